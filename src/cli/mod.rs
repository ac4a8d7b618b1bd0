//! CLI command definitions and handlers

mod init;
mod publish;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Crystalline - rules-driven crystallinity scoring
#[derive(Parser, Debug)]
#[command(name = "crystalline")]
#[command(
    version,
    about = "Score codebase crystallinity from static-analysis counters and post the report",
    after_help = "\
Examples:
  crystalline init .                                  Write a starter rules document
  crystalline score . --rules crystalline.rules \\
      --out-json score.json --out-md report.md        Compute and write both outputs
  crystalline publish --markdown report.md --pr 42    Comment on PR #42
  crystalline publish --markdown report.md            Open an issue instead"
)]
pub struct Cli {
    /// Path to repository (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a starter rules document with example weights
    Init,

    /// Compute crystallinity scores and write JSON + markdown reports
    Score {
        /// Rules document with metric weights and warn thresholds
        #[arg(long, value_name = "PATH")]
        rules: PathBuf,

        /// Where to write the machine-readable score record
        #[arg(long, value_name = "PATH")]
        out_json: PathBuf,

        /// Where to write the markdown report
        #[arg(long, value_name = "PATH")]
        out_md: PathBuf,
    },

    /// Post a markdown report as a PR comment, or open an issue
    Publish {
        /// Markdown report to post
        #[arg(long, value_name = "PATH")]
        markdown: PathBuf,

        /// Pull request number (falls back to the PR_NUMBER environment variable)
        #[arg(long, env = "PR_NUMBER")]
        pr: Option<String>,

        /// Issue title used when no PR number is available
        #[arg(long, default_value = "Crystallinity Report")]
        title: String,
    },

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(&cli.path),

        Commands::Score {
            rules,
            out_json,
            out_md,
        } => score::run(&cli.path, &rules, &out_json, &out_md),

        Commands::Publish {
            markdown,
            pr,
            title,
        } => publish::run(&markdown, pr.as_deref(), &title),

        Commands::Version => {
            println!("crystalline {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
