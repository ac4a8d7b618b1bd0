//! Rules document parser
//!
//! Scoring weights and warn thresholds come from a small line-oriented
//! dialect rather than a general-purpose config format. Three line shapes
//! are recognized, everything else is ignored:
//!
//! ```text
//!   defect_density:                          <- metric header (2+ leading spaces)
//!     weights: {dead_code_blocks: 0.01}      <- weights for the current metric
//!   warn: {defect_density: 0.12}             <- global warn thresholds (first wins)
//! ```
//!
//! The parser is an explicit line scanner producing a typed [`RuleSet`].
//! A line that looks like a weights or warn line but fails the expected
//! shape is a hard error, not a silent skip.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::models::{DEFECT_DENSITY, SYMMETRY_INDEX};

/// Warn threshold applied to `defect_density` when the rules document
/// does not set one. The report flags snapshots *above* this value.
pub const DEFAULT_DEFECT_DENSITY_WARN: f64 = 0.12;

/// Warn threshold applied to `symmetry_index` when the rules document
/// does not set one. The report flags snapshots *below* this value.
pub const DEFAULT_SYMMETRY_INDEX_WARN: f64 = 0.65;

/// Errors raised while parsing a rules document.
///
/// Any error aborts the parse; no partial RuleSet is produced.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("line {line}: '{entry}' is not a 'name: value' pair")]
    MalformedPair { entry: String, line: usize },

    #[error("line {line}: invalid weight '{value}'")]
    InvalidWeight {
        value: String,
        line: usize,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("line {line}: weights line outside a metric block")]
    DanglingWeights { line: usize },

    #[error("line {line}: expected a brace-delimited {{...}} group")]
    MissingBraces { line: usize },
}

/// Weight mapping for a single metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRule {
    /// Statistic name -> signed weight. Empty when the rules document
    /// declared the metric header without a weights line.
    pub weights: BTreeMap<String, f64>,
}

/// Parsed rules document: per-metric weights plus global warn thresholds.
///
/// Built once per invocation and immutable thereafter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    metrics: BTreeMap<String, MetricRule>,
    pub thresholds_warn: BTreeMap<String, f64>,
}

impl RuleSet {
    /// Parse the full text of a rules document.
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        let mut metrics: BTreeMap<String, MetricRule> = BTreeMap::new();
        let mut thresholds: Option<BTreeMap<String, f64>> = None;
        let mut current: Option<String> = None;

        for (idx, line) in text.lines().enumerate() {
            let lineno = idx + 1;

            if let Some(name) = metric_header(line) {
                // Re-declaring a header resets any weights parsed for it.
                metrics.insert(name.to_string(), MetricRule::default());
                current = Some(name.to_string());
                continue;
            }

            if line.contains("weights:") {
                let Some(metric) = current.as_deref() else {
                    return Err(RuleError::DanglingWeights { line: lineno });
                };
                let group =
                    brace_group(line).ok_or(RuleError::MissingBraces { line: lineno })?;
                let weights = parse_pairs(group, lineno)?;
                // Header insertion above guarantees the entry exists.
                if let Some(rule) = metrics.get_mut(metric) {
                    rule.weights = weights;
                }
                continue;
            }

            // Only the first warn group counts.
            if thresholds.is_none() && line.contains("warn:") {
                let group =
                    brace_group(line).ok_or(RuleError::MissingBraces { line: lineno })?;
                thresholds = Some(parse_pairs(group, lineno)?);
            }
        }

        let mut thresholds_warn = thresholds.unwrap_or_default();
        thresholds_warn
            .entry(DEFECT_DENSITY.to_string())
            .or_insert(DEFAULT_DEFECT_DENSITY_WARN);
        thresholds_warn
            .entry(SYMMETRY_INDEX.to_string())
            .or_insert(DEFAULT_SYMMETRY_INDEX_WARN);

        debug!(
            metrics = metrics.len(),
            thresholds = thresholds_warn.len(),
            "parsed rules document"
        );

        Ok(Self {
            metrics,
            thresholds_warn,
        })
    }

    /// Weight mapping for a metric, if the document declared it.
    pub fn weights(&self, metric: &str) -> Option<&BTreeMap<String, f64>> {
        self.metrics.get(metric).map(|rule| &rule.weights)
    }
}

/// Match a metric header line: two-or-more leading spaces, a `[a-z_]+`
/// identifier, a colon, then end of line (trailing whitespace allowed).
fn metric_header(line: &str) -> Option<&str> {
    let body = line.strip_prefix("  ")?.trim_start_matches(' ');
    let name = body.trim_end().strip_suffix(':')?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_') {
        return None;
    }
    Some(name)
}

/// Contents of the first `{...}` group on the line.
fn brace_group(line: &str) -> Option<&str> {
    let start = line.find('{')?;
    let end = line[start + 1..].find('}')? + start + 1;
    Some(&line[start + 1..end])
}

/// Parse comma-separated `name: value` pairs from a brace group.
fn parse_pairs(group: &str, line: usize) -> Result<BTreeMap<String, f64>, RuleError> {
    let mut pairs = BTreeMap::new();
    if group.trim().is_empty() {
        return Ok(pairs);
    }
    for piece in group.split(',') {
        let halves: Vec<&str> = piece.split(':').collect();
        let [name, value] = halves.as_slice() else {
            return Err(RuleError::MalformedPair {
                entry: piece.trim().to_string(),
                line,
            });
        };
        let value = value.trim();
        let weight = value.parse::<f64>().map_err(|source| RuleError::InvalidWeight {
            value: value.to_string(),
            line,
            source,
        })?;
        pairs.insert(name.trim().to_string(), weight);
    }
    Ok(pairs)
}
