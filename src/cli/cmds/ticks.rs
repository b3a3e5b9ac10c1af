use anyhow::Context;

use crate::base;
use crate::cli;
use crate::cli::sharedopts;

/// Show the axis ticks a chart over a range would get
///
/// Works offline on an empty series, so presets needing the backend are not
/// accepted.
#[derive(clap::Parser)]
pub struct Ticks {
    #[arg(help = sharedopts::RANGE_HELP, long_help = sharedopts::RANGE_HELP_LONG)]
    range: Option<cli::util::RangeArg>,

    #[command(flatten)]
    period_opts: sharedopts::PeriodOpts,

    /// Print the tick plan as JSON
    #[arg(long)]
    json: bool,
}

impl Ticks {
    pub fn run(self, today: base::Date) -> anyhow::Result<cli::Output> {
        let range = self
            .range
            .unwrap_or_default()
            .resolve_offline(today)
            .context("range needs the backend, try the 'range' command to resolve it first")?;
        let chart = base::Chart::zeroed(range, self.period_opts.period());
        if self.json {
            return Ok(cli::Output::Str(serde_json::to_string_pretty(&chart.ticks)?));
        }

        let width = base::util::count_digits(chart.points.len().saturating_sub(1) as u64);
        let mut s = format!("{} ticks over {}\n", chart.ticks.resolution, range);
        for &i in &chart.ticks.indices {
            let date = chart.points[i].date;
            match chart.ticks.label(i) {
                Some(label) => s.push_str(&format!("{:>width$} {} {}\n", i, date, label)),
                None => s.push_str(&format!("{:>width$} {}\n", i, date)),
            }
        }
        Ok(cli::Output::Str(s))
    }
}
