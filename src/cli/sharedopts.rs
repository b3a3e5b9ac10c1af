use crate::base;

pub const RANGE_HELP: &str = "Range of interest [default: month]";
pub const RANGE_HELP_LONG: &str = "Range of interest [default: month]

Either a preset or an explicit range.

Presets are relative to today, with weeks starting on Monday:
week, lastweek, month, lastmonth, quarter, year, lastyear, all

'all' spans the earliest to the latest purchase known to the backend, or the current year if that cannot be determined.

An explicit range must be in the format 'A:B'. Each of 'A' or 'B' is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below).

A relative date is one of the following ('n' is optional and defaults to 0):
dn: n days from today
wn: Monday of the nth week from today
Wn: Sunday of the nth week from today
mn: first day of the nth month from today
Mn: last day of the nth month from today
yn: first day of the nth year from today
Yn: last day of the nth year from today

The following shorthands are also available:
dn = dn:dn
wn = wn:Wn
mn = mn:Mn
yn = yn:Yn";

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
pub struct PeriodOpts {
    /// Sum purchases by day [default]
    #[arg(short)]
    d: bool,

    /// Sum purchases by week, starting on Monday
    #[arg(short)]
    w: bool,

    /// Sum purchases by month
    #[arg(short)]
    m: bool,
}

impl PeriodOpts {
    pub fn period(&self) -> base::Period {
        if self.m {
            base::Period::Monthly
        } else if self.w {
            base::Period::Weekly
        } else {
            base::Period::Daily
        }
    }
}
