//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates the report body posted as a pull-request comment or issue.

use crate::models::{ScoreRecord, DEFECT_DENSITY, SYMMETRY_INDEX};
use crate::rules::{DEFAULT_DEFECT_DENSITY_WARN, DEFAULT_SYMMETRY_INDEX_WARN};
use anyhow::Result;
use chrono::Local;

/// Render record as GitHub-flavored Markdown
pub fn render(record: &ScoreRecord) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header());
    md.push('\n');
    md.push_str(&render_metrics(record));
    md.push('\n');
    md.push_str(&render_advisories(record));

    Ok(md)
}

fn render_header() -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("### 💎 Crystallinity Report\n\nGenerated: {}\n", timestamp)
}

fn render_metrics(record: &ScoreRecord) -> String {
    format!(
        "- Defect density: **{:.3}**\n\
         - Symmetry index: **{:.3}**\n\
         - Phase shift: **{:.3}**\n\
         - Crystallinity: **{:.3}**\n",
        record.defect_density, record.symmetry_index, record.phase_shift, record.crystallinity
    )
}

fn render_advisories(record: &ScoreRecord) -> String {
    let mut md = String::from("**Heuristic findings**:\n");

    let defect_warn = record
        .thresholds_warn
        .get(DEFECT_DENSITY)
        .copied()
        .unwrap_or(DEFAULT_DEFECT_DENSITY_WARN);
    if record.defect_density > defect_warn {
        md.push_str(
            "- Defect density exceeds the warn threshold. Prune dead code, unused imports, and stale TODOs.\n",
        );
    }

    let symmetry_warn = record
        .thresholds_warn
        .get(SYMMETRY_INDEX)
        .copied()
        .unwrap_or(DEFAULT_SYMMETRY_INDEX_WARN);
    if record.symmetry_index < symmetry_warn {
        md.push_str(
            "- Symmetry index is below the warn threshold. Consolidate duplicate implementations and tighten layer discipline.\n",
        );
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_record;

    #[test]
    fn test_markdown_has_header_and_metrics() {
        let md = render(&test_record()).unwrap();
        assert!(md.contains("Crystallinity Report"));
        assert!(md.contains("**0.150**"));
        assert!(md.contains("**0.800**"));
        assert!(md.contains("**0.100**"));
        assert!(md.contains("**0.825**"));
    }

    #[test]
    fn test_defect_advisory_above_threshold() {
        // defect 0.15 > warn 0.12
        let md = render(&test_record()).unwrap();
        assert!(md.contains("Defect density exceeds"));
    }

    #[test]
    fn test_defect_advisory_suppressed_below_threshold() {
        let mut record = test_record();
        record.defect_density = 0.10;
        let md = render(&record).unwrap();
        assert!(!md.contains("Defect density exceeds"));
    }

    #[test]
    fn test_symmetry_advisory_below_threshold() {
        let mut record = test_record();
        record.symmetry_index = 0.5;
        let md = render(&record).unwrap();
        assert!(md.contains("Symmetry index is below"));
    }

    #[test]
    fn test_symmetry_advisory_suppressed_at_threshold() {
        let mut record = test_record();
        record.symmetry_index = 0.65;
        let md = render(&record).unwrap();
        assert!(!md.contains("Symmetry index is below"));
    }

    #[test]
    fn test_defaults_used_when_thresholds_absent() {
        let mut record = test_record();
        record.thresholds_warn.clear();
        // defect 0.15 > default 0.12, symmetry 0.8 >= default 0.65
        let md = render(&record).unwrap();
        assert!(md.contains("Defect density exceeds"));
        assert!(!md.contains("Symmetry index is below"));
    }
}
