use crate::base;

/// Width of the buckets amounts are summed into.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn datepart(self) -> base::Datepart {
        match self {
            Period::Daily => base::Datepart::Day,
            Period::Weekly => base::Datepart::Week,
            Period::Monthly => base::Datepart::Month,
        }
    }

    /// Start of the bucket containing `dt`.
    pub fn normalize(self, dt: base::Date) -> base::Date {
        dt.first_of(self.datepart())
    }
}
