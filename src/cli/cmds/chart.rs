use crate::base;
use crate::cli;
use crate::cli::sharedopts;

/// Chart confirmed purchases over a range
#[derive(clap::Parser)]
pub struct Chart {
    #[arg(help = sharedopts::RANGE_HELP, long_help = sharedopts::RANGE_HELP_LONG)]
    range: Option<cli::util::RangeArg>,

    #[command(flatten)]
    period_opts: sharedopts::PeriodOpts,

    /// Print the chart as JSON
    #[arg(long)]
    json: bool,
}

impl Chart {
    pub async fn run<B>(
        self,
        backend: &B,
        config: &base::Config,
        today: base::Date,
    ) -> anyhow::Result<cli::Output>
    where
        B: base::Backend,
    {
        let range = self.range.unwrap_or_default().resolve(backend, today).await;

        let mut session = base::Session::new();
        let ticket = session.begin(self.period_opts.period(), range);
        let result = ticket.load(backend, config.per_page).await;
        let cause = result.as_ref().err().map(ToString::to_string);
        session.complete(&ticket, result);

        let chart = match session.state() {
            base::session::State::Ready(chart) => chart.clone(),
            base::session::State::Failed(msg) => {
                anyhow::bail!("{}: {}", msg, cause.unwrap_or_default())
            }
            base::session::State::Idle | base::session::State::Loading => unreachable!(),
        };
        Ok(if self.json {
            cli::Output::Str(serde_json::to_string_pretty(&chart)?)
        } else {
            cli::Output::Table(base::Table {
                chart,
                color: config.use_colored_output,
            })
        })
    }
}
