//! Crystalline - rules-driven crystallinity scoring for codebases
//!
//! Computes a heuristic quality score from static-analysis counters,
//! renders a markdown report, and posts it as a PR comment or issue.

mod analysis;
mod cli;
mod models;
mod publish;
mod reporters;
mod rules;
mod scoring;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
