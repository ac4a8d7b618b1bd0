//! Init command - write a starter rules document

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Rules document file name
pub const RULES_FILE: &str = "crystalline.rules";

const DEFAULT_RULES: &str = r#"# Crystalline scoring rules
#
# Each metric block maps statistic counters to signed weights.
# Lines outside the recognized shapes are ignored.

metrics:
  lattice_coherency:
    weights: {layer_crossing: -0.2, cyclic_deps: -0.4, fan_in_out_outliers: -0.1}
  symmetry_index:
    weights: {duplicate_funcs: -0.05, moved_files_across_layers: -0.02}
  defect_density:
    weights: {dead_code_blocks: 0.01, unused_imports: 0.01, todo_fixes: 0.01, force_unwraps: 0.02}
  phase_shift:
    weights: {moved_files_across_layers: 0.1, public_api_changes: 0.05, build_phase_delta: 0.05}

thresholds:
  warn: {defect_density: 0.12, symmetry_index: 0.65}
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let repo_path = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !repo_path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", repo_path.display());
    }

    let rules_path = repo_path.join(RULES_FILE);
    if rules_path.exists() {
        println!(
            "{} Rules document already exists at {}",
            style("✓").green(),
            style(rules_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&rules_path, DEFAULT_RULES)
        .with_context(|| format!("Failed to write {}", rules_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(rules_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!(
        "  {} Compute scores",
        style(format!(
            "crystalline score . --rules {} --out-json score.json --out-md report.md",
            RULES_FILE
        ))
        .cyan()
    );
    println!(
        "  {} Post the report",
        style("crystalline publish --markdown report.md").cyan()
    );

    Ok(())
}
