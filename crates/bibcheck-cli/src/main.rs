//! bibcheck CLI - verify academic references with a search-grounded LLM.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Verify {
            file,
            llm,
            model,
            no_search,
            output,
            report,
            max,
            sample,
        } => commands::verify::run(commands::verify::VerifyOptions {
            file,
            llm,
            model,
            no_search,
            output,
            report,
            max,
            sample,
            verbose: cli.verbose,
        }),

        Commands::Segment { file, json, sample } => {
            commands::segment::run(file, json, sample, cli.verbose)
        }

        Commands::Report { file } => commands::report::run(file, cli.verbose),

        Commands::Sample => commands::sample::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for reports and JSON.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "bibcheck=debug,info" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
