use crate::base;
use crate::cli;
use crate::cli::sharedopts;

/// Resolve a range and show its tick resolution
#[derive(clap::Parser)]
pub struct Range {
    #[arg(help = sharedopts::RANGE_HELP, long_help = sharedopts::RANGE_HELP_LONG)]
    range: Option<cli::util::RangeArg>,
}

impl Range {
    pub async fn run<B>(self, backend: &B, today: base::Date) -> anyhow::Result<cli::Output>
    where
        B: base::Backend,
    {
        let range = self.range.unwrap_or_default().resolve(backend, today).await;
        Ok(cli::Output::Str(format!(
            "{} ({} days, {} ticks)",
            range,
            range.days(),
            base::Resolution::for_range(range)
        )))
    }
}
