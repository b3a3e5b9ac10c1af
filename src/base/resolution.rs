use crate::base;

/// Granularity of the chart's axis ticks. Chosen from the length of the range
/// alone, independently of the aggregation period.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Resolution {
    Day,
    Week,
    Month,
    Year,
}

impl Resolution {
    pub fn from_days(days: i64) -> Self {
        match days {
            ..=8 => Resolution::Day,
            ..=40 => Resolution::Week,
            ..=400 => Resolution::Month,
            _ => Resolution::Year,
        }
    }

    pub fn for_range(range: base::Range) -> Self {
        Self::from_days(range.days())
    }
}
