use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use etc1_dxt1_tables::bench::{Harness, MismatchPolicy, StdClock, DEFAULT_RUNS};

#[derive(Parser)]
#[command(name = "etc1-dxt1-tables")]
#[command(about = "Generate the ETC1 to DXT1 green endpoint table, verify it and time it")]
struct Cli {
    /// Number of timed generation passes
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_RUNS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    runs: usize,

    /// Exit with an error if the generated table differs from the known one
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "etc1_dxt1_tables=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let policy = if cli.strict {
        MismatchPolicy::Fail
    } else {
        MismatchPolicy::Warn
    };

    let report = Harness::new(StdClock::new())
        .runs(cli.runs)
        .policy(policy)
        .run()?;

    if let Some(best) = report.best() {
        println!("Best run took {}ms", best);
    }

    Ok(())
}
