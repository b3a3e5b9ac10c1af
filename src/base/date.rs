use crate::base::Datepart;

/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Date(time::macros::date!(0000 - 01 - 01));

    /// 9999-12-31
    pub const MAX: Self = Date(time::macros::date!(9999 - 12 - 31));

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn weekday(self) -> time::Weekday {
        self.0.weekday()
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date, or the UTC date if the local offset cannot be
    /// determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self::new(now.date()).unwrap_or(Self::MAX)
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2015, 3, 30).expect("'today' for tests should be valid")
    }

    pub fn format<F>(self, fmt: &F) -> String
    where
        F: time::formatting::Formattable + ?Sized,
    {
        self.0
            .format(fmt)
            .expect("formatting a date with date components only should succeed")
    }

    /// Number of days from `self` to `other`. Negative if `other` is earlier.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).whole_days()
    }

    /// Weeks start on Monday.
    pub fn first_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Week => {
                let back = self.weekday().number_days_from_monday() as i32;
                self.shift(Datepart::Day, -back).unwrap_or(Self::MIN)
            }
            Datepart::Year => Self::from_ymd(self.year(), 1, 1)
                .expect("first day of a valid year should be a valid date"),
            Datepart::Month => Self::from_ymd(self.year(), self.month(), 1)
                .expect("first day of a valid month should be a valid date"),
        }
    }

    /// Weeks end on Sunday.
    pub fn last_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Week => {
                let fwd = 6 - self.weekday().number_days_from_monday() as i32;
                self.shift(Datepart::Day, fwd).unwrap_or(Self::MAX)
            }
            Datepart::Year => Self::from_ymd(self.year(), 12, 31)
                .expect("final day of a valid year should be a valid date"),
            Datepart::Month => Self::from_ymd(
                self.year(),
                self.month(),
                if (self.month() == 2)
                    && (self.year() % 4 == 0)
                    && ((self.year() % 100 != 0) || (self.year() % 400 == 0))
                {
                    29
                } else {
                    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31][self.month() as usize]
                },
            )
            .expect("final day of month should be computed correctly"),
        }
    }

    /// Offsets the given date by the given datepart, returning `None` if the
    /// resultant date is out of bounds.
    ///
    /// When shifting by years or months, clamps the resultant date's day to the
    /// resultant month's last-day-of-month. For example, if the original date
    /// is a Feb 29, shifting by 1 year will yield the next year's Feb 28.
    pub fn shift(self, part: Datepart, offset: i32) -> Option<Self> {
        let (y, m) = match part {
            Datepart::Day => {
                return self
                    .0
                    .checked_add(time::Duration::days(offset as i64))
                    .and_then(Self::new);
            }
            Datepart::Week => return self.shift(Datepart::Day, offset.checked_mul(7)?),
            Datepart::Year => (self.year().checked_add(offset)?, self.month() as i32),
            Datepart::Month => {
                let mut y = self.year();
                let mut m = (self.month() as i32).checked_add(offset)?;
                if m > 12 {
                    y += (m - 1) / 12;
                    m = (m - 1) % 12 + 1;
                } else if m < 1 {
                    y += (m - 12) / 12;
                    m = (m % 12 + 11) % 12 + 1;
                }
                (y, m)
            }
        };
        let last = Self::from_ymd(y, m as u8, 1)?.last_of(Datepart::Month);
        Self::from_ymd(y, m as u8, last.day().min(self.day()))
    }

    /// Parses a strict ISO 8601 calendar date (`yyyy-mm-dd`).
    pub fn parse_iso(s: &str) -> Result<Self, ParseError> {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        time::Date::parse(s, fmt)
            .map_err(ParseError::BadFormat)
            .and_then(|x| Self::new(x).ok_or(ParseError::OutOfRange))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not one of {{y, Y, m, M, w, W, d, D}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `xn` where `x` is one of `{y, Y, m, M, w, W, d, D}` and `n` is an integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            return Self::parse_iso(s);
        }

        let bytes = s.as_bytes();
        let offset: i32 = if bytes.len() == 1 {
            0
        } else {
            std::str::from_utf8(&bytes[1..])
                .map_err(|_| Self::Err::InvalidFirstChar)?
                .parse::<i32>()?
        };
        let today = Self::today();
        match bytes[0] as char {
            'd' | 'D' => today.shift(Datepart::Day, offset),
            'w' => today.first_of(Datepart::Week).shift(Datepart::Week, offset),
            'W' => today
                .shift(Datepart::Week, offset)
                .map(|dt| dt.last_of(Datepart::Week)),
            'y' => today.first_of(Datepart::Year).shift(Datepart::Year, offset),
            'Y' => today.last_of(Datepart::Year).shift(Datepart::Year, offset),
            'm' => today
                .first_of(Datepart::Month)
                .shift(Datepart::Month, offset),
            'M' => today
                .shift(Datepart::Month, offset)
                .map(|dt| dt.last_of(Datepart::Month)),
            _ => None,
        }
        .ok_or(Self::Err::InvalidFirstChar)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
