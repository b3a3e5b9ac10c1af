use crate::base;

/// Range of dates defined by two inclusive bounds, where `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Range {
    start: base::Date,
    end: base::Date,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("range start {start} is after range end {end}")]
pub struct InvertedError {
    start: base::Date,
    end: base::Date,
}

impl Range {
    pub fn new(start: base::Date, end: base::Date) -> Result<Self, InvertedError> {
        if start > end {
            return Err(InvertedError { start, end });
        }
        Ok(Self { start, end })
    }

    /// The calendar unit containing `dt`, e.g. the whole month for
    /// `Datepart::Month`.
    pub fn of(dt: base::Date, part: base::Datepart) -> Self {
        Self {
            start: dt.first_of(part),
            end: dt.last_of(part),
        }
    }

    pub fn start(self) -> base::Date {
        self.start
    }

    pub fn end(self) -> base::Date {
        self.end
    }

    /// Number of days spanned, counting both bounds.
    pub fn days(self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }

    /// Whether the range is exactly one calendar month, first day to last.
    pub fn is_full_month(self) -> bool {
        self == Self::of(self.start, base::Datepart::Month)
    }

    /// Returns an iterator over the first day of every `part` unit overlapping
    /// the range. The first item may precede `start`. For example, iterating
    /// by month over \[2015-03-30, 2015-05-02] yields 2015-03-01, 2015-04-01
    /// and 2015-05-01.
    ///
    /// A week cut short by [`base::Date::MIN`] starts at `MIN`; every later
    /// item is a Monday.
    pub fn buckets(self, part: base::Datepart) -> impl Iterator<Item = base::Date> {
        let end = self.end;
        std::iter::successors(Some(self.start.first_of(part)), move |dt| {
            dt.last_of(part)
                .shift(base::Datepart::Day, 1)
                .filter(|&next| next <= end)
        })
    }

    /// Returns an iterator over `start`, `start + 1 part`, `start + 2 parts`,
    /// etc., up to and including `end`.
    pub fn steps(self, part: base::Datepart) -> impl Iterator<Item = base::Date> {
        Iter {
            origin: self.start,
            end: self.end,
            part,
            k: 0,
        }
    }
}

struct Iter {
    origin: base::Date,
    end: base::Date,
    part: base::Datepart,
    k: i32,
}

impl Iterator for Iter {
    type Item = base::Date;

    fn next(&mut self) -> Option<Self::Item> {
        let dt = self
            .origin
            .shift(self.part, self.k)
            .filter(|&dt| dt <= self.end)?;
        self.k += 1;
        Some(dt)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
    #[error(transparent)]
    Inverted(#[from] InvertedError),
}

impl std::str::FromStr for Range {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((left, right)) => (
                if left.is_empty() {
                    base::Date::MIN
                } else {
                    left.parse::<base::Date>().map_err(Self::Err::Left)?
                },
                if right.is_empty() {
                    base::Date::MAX
                } else {
                    right.parse::<base::Date>().map_err(Self::Err::Right)?
                },
            ),
            None => {
                let dt = s.parse::<base::Date>()?;
                let part = match s.as_bytes()[0] as char {
                    'y' | 'Y' => base::Datepart::Year,
                    'm' | 'M' => base::Datepart::Month,
                    'w' | 'W' => base::Datepart::Week,
                    _ => base::Datepart::Day,
                };
                (dt.first_of(part), dt.last_of(part))
            }
        };
        Ok(Self::new(start, end)?)
    }
}

impl TryFrom<&str> for Range {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
