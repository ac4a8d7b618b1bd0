//! Score engine: pure arithmetic over a snapshot and a rule set.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{
    ScoreRecord, StatsSnapshot, DEFECT_DENSITY, LATTICE_COHERENCY, PHASE_SHIFT, SYMMETRY_INDEX,
};
use crate::rules::RuleSet;

/// Base offset added to the raw defect weighted sum before flooring.
const DEFECT_BASELINE: f64 = 0.05;

/// Errors raised while computing a score.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("rules document does not define metric '{0}'")]
    MissingMetric(String),
}

/// Weighted sum of snapshot counters.
///
/// Counters absent from the snapshot contribute 0, so the sum never fails
/// on a missing key.
pub fn weighted_sum(stats: &StatsSnapshot, weights: &BTreeMap<String, f64>) -> f64 {
    weights
        .iter()
        .map(|(name, weight)| stats.count(name) * weight)
        .sum()
}

/// Compute a [`ScoreRecord`] from one snapshot and one rule set.
///
/// Pure function of its inputs: identical inputs produce bit-identical
/// records. Fails only when the rules document is missing one of the four
/// required metric blocks.
pub fn score(stats: &StatsSnapshot, rules: &RuleSet) -> Result<ScoreRecord, ScoreError> {
    let lattice_coherency = weighted_sum(stats, required(rules, LATTICE_COHERENCY)?);
    let symmetry_index = 1.0 + weighted_sum(stats, required(rules, SYMMETRY_INDEX)?);
    let defect_density =
        (DEFECT_BASELINE + weighted_sum(stats, required(rules, DEFECT_DENSITY)?)).max(0.0);
    let phase_shift = weighted_sum(stats, required(rules, PHASE_SHIFT)?).max(0.0);
    let crystallinity =
        (0.5 * symmetry_index + 0.5 * (1.0 - defect_density)).clamp(0.0, 1.0);

    Ok(ScoreRecord {
        lattice_coherency,
        symmetry_index,
        defect_density,
        phase_shift,
        crystallinity,
        thresholds_warn: rules.thresholds_warn.clone(),
    })
}

fn required<'a>(rules: &'a RuleSet, metric: &str) -> Result<&'a BTreeMap<String, f64>, ScoreError> {
    rules
        .weights(metric)
        .ok_or_else(|| ScoreError::MissingMetric(metric.to_string()))
}
