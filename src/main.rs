use clap::Parser;
use tracing_subscriber::EnvFilter;

use live_scoreboard::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("live_scoreboard=debug,info")
    } else {
        EnvFilter::new("live_scoreboard=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Replay(args) => {
            cli::replay::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Normalize(args) => {
            cli::normalize::run(args, cli.format)?;
        }
    }

    Ok(())
}
