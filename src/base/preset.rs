use crate::base;
use crate::base::backend;

/// Named ranges relative to today. Weeks start on Monday.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Preset {
    Week,
    LastWeek,
    Month,
    LastMonth,
    Quarter,
    Year,
    LastYear,
    /// From the earliest to the latest purchase. Needs the backend.
    All,
}

impl Preset {
    /// Resolves presets that need nothing but the calendar. Returns `None`
    /// for [`Preset::All`].
    pub fn resolve_offline(self, today: base::Date) -> Option<base::Range> {
        let of = |dt: Option<base::Date>, part| dt.map(|dt| base::Range::of(dt, part));
        match self {
            Preset::Week => of(Some(today), base::Datepart::Week),
            Preset::LastWeek => of(today.shift(base::Datepart::Week, -1), base::Datepart::Week),
            Preset::Month => of(Some(today), base::Datepart::Month),
            Preset::LastMonth => of(today.shift(base::Datepart::Month, -1), base::Datepart::Month),
            Preset::Quarter => {
                let first = today
                    .first_of(base::Datepart::Month)
                    .shift(base::Datepart::Month, -(((today.month() - 1) % 3) as i32))?;
                let last = first
                    .shift(base::Datepart::Month, 2)?
                    .last_of(base::Datepart::Month);
                base::Range::new(first, last).ok()
            }
            Preset::Year => of(Some(today), base::Datepart::Year),
            Preset::LastYear => of(today.shift(base::Datepart::Year, -1), base::Datepart::Year),
            Preset::All => None,
        }
    }

    /// Resolves any preset. [`Preset::All`] asks the backend for the span of
    /// all purchases and falls back to the current year if that fails or
    /// there is nothing to span.
    pub async fn resolve<B>(self, backend: &B, today: base::Date) -> base::Range
    where
        B: backend::Backend,
    {
        if let Some(range) = self.resolve_offline(today) {
            return range;
        }
        let fallback = base::Range::of(today, base::Datepart::Year);
        match backend.date_range().await {
            Ok(dr) => dr.to_range().unwrap_or_else(|| {
                tracing::warn!("no purchases to span, using {}", fallback);
                fallback
            }),
            Err(e) => {
                tracing::warn!(error = %e, "date range lookup failed, using {}", fallback);
                fallback
            }
        }
    }
}
