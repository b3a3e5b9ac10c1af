use anyhow::Context;

use crate::base;
use crate::cli;

/// Spending over time, bucketed and ready to chart
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Chart(cli::cmds::chart::Chart),
    Ticks(cli::cmds::ticks::Ticks),
    Range(cli::cmds::range::Range),
}

impl Root {
    pub async fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let backend = base::HttpBackend::new(&config).context("failed to set up HTTP client")?;
        self.run_with(&backend, &config).await
    }

    /// Runs any command other than `init` against `backend`.
    pub async fn run_with<B>(self, backend: &B, config: &base::Config) -> anyhow::Result<cli::Output>
    where
        B: base::Backend,
    {
        let today = base::Date::today();
        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Chart(cmd) => cmd.run(backend, config, today).await,
            Commands::Ticks(cmd) => cmd.run(today),
            Commands::Range(cmd) => cmd.run(backend, today).await,
        }
    }
}
