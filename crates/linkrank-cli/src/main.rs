//! LinkRank CLI
//!
//! PageRank estimation for local HTML corpora.

use anyhow::Result;
use clap::Parser;
use linkrank_core::LinkRankError;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let result = match cli.command {
        Commands::Rank(args) => commands::rank::run(args, cli.format),
        Commands::Sample(args) => commands::rank::run_sample(args, cli.format),
        Commands::Iterate(args) => commands::rank::run_iterate(args, cli.format),
    };

    if let Err(err) = result {
        if let Some(core_err) = err.downcast_ref::<LinkRankError>() {
            eprintln!("error: {core_err}");
            std::process::exit(core_err.exit_code());
        }
        return Err(err);
    }

    Ok(())
}
