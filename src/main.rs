use clap::Parser;
use tracing_subscriber::EnvFilter;

mod alignment;
mod cli;
mod config;
mod core;
mod features;
mod grading;
mod parsing;
mod preprocess;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("litreading=debug,info")
    } else {
        EnvFilter::new("litreading=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Features(args) => {
            cli::features::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Compare(args) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Grade(args) => {
            cli::grade::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
