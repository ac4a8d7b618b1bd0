//! Score command implementation
//!
//! 1. Parse the rules document
//! 2. Snapshot repository statistics
//! 3. Compute the score record
//! 4. Write JSON and markdown outputs

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use crate::analysis;
use crate::reporters;
use crate::rules::RuleSet;
use crate::scoring;

/// Run the score command
pub fn run(path: &Path, rules_path: &Path, out_json: &Path, out_md: &Path) -> Result<()> {
    let repo_path = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    let rules_text = std::fs::read_to_string(rules_path)
        .with_context(|| format!("Failed to read rules document: {}", rules_path.display()))?;
    let rules = RuleSet::parse(&rules_text)
        .with_context(|| format!("Failed to parse rules document: {}", rules_path.display()))?;
    debug!(rules = %rules_path.display(), "rules loaded");

    let stats = analysis::snapshot_stats(&repo_path);
    let record = scoring::score(&stats, &rules)?;

    let json = reporters::json::render(&record)?;
    std::fs::write(out_json, json)
        .with_context(|| format!("Failed to write {}", out_json.display()))?;

    let md = reporters::markdown::render(&record)?;
    std::fs::write(out_md, md).with_context(|| format!("Failed to write {}", out_md.display()))?;

    println!(
        "\n{} Crystallinity {}",
        style("💎").bold(),
        style(format!("{:.3}", record.crystallinity)).bold()
    );
    println!(
        "  defect density {:.3}  symmetry {:.3}  phase shift {:.3}  lattice {:.3}",
        record.defect_density, record.symmetry_index, record.phase_shift, record.lattice_coherency
    );
    println!(
        "  wrote {} and {}",
        style(out_json.display()).cyan(),
        style(out_md.display()).cyan()
    );

    Ok(())
}
