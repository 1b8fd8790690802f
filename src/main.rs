use clap::Parser;
use tracing_subscriber::EnvFilter;

use symptom_match::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("symptom_match=debug,info")
    } else {
        EnvFilter::new("symptom_match=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Predict(args) => {
            cli::predict::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Symptoms(args) => {
            cli::dataset::run_symptoms(args, cli.format)?;
        }
        cli::Commands::Stats(args) => {
            cli::dataset::run_stats(args, cli.format)?;
        }
        cli::Commands::Precautions(args) => {
            cli::dataset::run_precautions(args, cli.format)?;
        }
        cli::Commands::Export(args) => {
            cli::dataset::run_export(args, cli.verbose)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
    }

    Ok(())
}
