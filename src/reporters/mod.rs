//! Output reporters for score records
//!
//! Two formats:
//! - `json` - machine-readable, consumed by downstream tooling
//! - `markdown` - GitHub-flavored, posted as a PR comment or issue body

pub mod json;
pub mod markdown;

#[cfg(test)]
pub(crate) mod tests {
    use crate::models::ScoreRecord;
    use std::collections::BTreeMap;

    /// Create a ScoreRecord for reporter tests.
    pub(crate) fn test_record() -> ScoreRecord {
        let thresholds_warn: BTreeMap<String, f64> = [
            ("defect_density".to_string(), 0.12),
            ("symmetry_index".to_string(), 0.65),
        ]
        .into();

        ScoreRecord {
            lattice_coherency: -0.5,
            symmetry_index: 0.8,
            defect_density: 0.15,
            phase_shift: 0.1,
            crystallinity: 0.825,
            thresholds_warn,
        }
    }
}
