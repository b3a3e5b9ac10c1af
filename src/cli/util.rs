use crate::base;

/// A range given on the command line, either by preset name or explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeArg {
    Preset(base::Preset),
    Range(base::Range),
}

impl Default for RangeArg {
    fn default() -> Self {
        Self::Preset(base::Preset::Month)
    }
}

impl RangeArg {
    /// Resolves the range without contacting the backend. Returns `None` for
    /// presets that need it.
    pub fn resolve_offline(self, today: base::Date) -> Option<base::Range> {
        match self {
            RangeArg::Preset(p) => p.resolve_offline(today),
            RangeArg::Range(r) => Some(r),
        }
    }

    pub async fn resolve<B>(self, backend: &B, today: base::Date) -> base::Range
    where
        B: base::Backend,
    {
        match self {
            RangeArg::Preset(p) => p.resolve(backend, today).await,
            RangeArg::Range(r) => r,
        }
    }
}

impl std::str::FromStr for RangeArg {
    type Err = base::range::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(preset) = s.parse::<base::Preset>() {
            return Ok(Self::Preset(preset));
        }
        s.parse().map(Self::Range)
    }
}

impl TryFrom<&str> for RangeArg {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
