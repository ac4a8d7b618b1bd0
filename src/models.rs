//! Core data models for Crystalline
//!
//! Shared between the analysis stub, the score engine, and the reporters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metric names the score engine requires a rules document to define.
pub const LATTICE_COHERENCY: &str = "lattice_coherency";
pub const SYMMETRY_INDEX: &str = "symmetry_index";
pub const DEFECT_DENSITY: &str = "defect_density";
pub const PHASE_SHIFT: &str = "phase_shift";

/// Static-analysis counters for one snapshot of a repository.
///
/// Counter names map to non-negative counts (dead_code_blocks,
/// duplicate_funcs, unused_imports, ...). Counters the analyzer did not
/// emit read as 0. BTreeMap keeps iteration order deterministic so the
/// weighted sums in the score engine are reproducible bit-for-bit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub counts: BTreeMap<String, f64>,
}

impl StatsSnapshot {
    /// Counter value, defaulting to 0 when absent.
    pub fn count(&self, name: &str) -> f64 {
        self.counts.get(name).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(String, f64)> for StatsSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Computed crystallinity scores for one snapshot.
///
/// `crystallinity` is the composite signal in [0, 1]; the other four are
/// its inputs and context, reported alongside it. `thresholds_warn` is
/// carried through from the rules document so the report renderer does
/// not need the RuleSet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub lattice_coherency: f64,
    pub symmetry_index: f64,
    pub defect_density: f64,
    pub phase_shift: f64,
    pub crystallinity: f64,
    #[serde(default)]
    pub thresholds_warn: BTreeMap<String, f64>,
}
