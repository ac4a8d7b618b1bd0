//! Crystallinity Scoring System
//!
//! This module turns a statistics snapshot and a parsed rules document
//! into the crystallinity score record. Every derived metric is a
//! transform of one reusable primitive, the weighted sum.
//!
//! # Scoring Formulas
//!
//! ```text
//! weighted_sum(S, W)  = Σ over (k, w) in W of S.get(k, 0) × w
//!
//! lattice_coherency   = weighted_sum(S, W_lattice)
//! symmetry_index      = 1.0 + weighted_sum(S, W_symmetry)
//! defect_density      = max(0.0, 0.05 + weighted_sum(S, W_defect))
//! phase_shift         = max(0.0, weighted_sum(S, W_phase))
//! crystallinity       = clamp[0,1](0.5 × symmetry + 0.5 × (1.0 − defect))
//! ```
//!
//! The composite folds in only symmetry and defect density, a two-factor
//! "balance vs. cleanliness" signal. Lattice coherency and phase shift
//! are computed and reported but stay out of the composite.
//!
//! # Example
//!
//! A snapshot with 4 duplicate functions and per-counter defect weights
//! summing to 0.10:
//! - symmetry_index = 1.0 + 4 × (−0.05) = 0.80
//! - defect_density = 0.05 + 0.10 = 0.15
//! - crystallinity = 0.5 × 0.80 + 0.5 × 0.85 = 0.825

mod engine;

pub use engine::{score, weighted_sum, ScoreError};
