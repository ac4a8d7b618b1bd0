//! Publish command - post a rendered report to the repository host

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use crate::publish::{publish_report, GhCli};

/// Run the publish command
pub fn run(markdown: &Path, pr: Option<&str>, title: &str) -> Result<()> {
    let body = std::fs::read_to_string(markdown)
        .with_context(|| format!("Failed to read report: {}", markdown.display()))?;

    match pr {
        Some(pr) => debug!(pr, "publishing report as PR comment"),
        None => debug!(title, "publishing report as new issue"),
    }

    publish_report(&GhCli::new(), title, &body, pr)?;

    match pr {
        Some(pr) => println!("{} Commented on PR #{}", style("✓").green(), pr),
        None => println!("{} Opened issue '{}'", style("✓").green(), title),
    }

    Ok(())
}
