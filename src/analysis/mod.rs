//! Repository analysis
//!
//! Walks a repository and produces the counter snapshot the score engine
//! consumes. The walker is not built yet: until it lands, every
//! invocation returns a fixed snapshot so the scoring and reporting
//! pipeline can be exercised end to end.

use std::path::Path;

use tracing::warn;

use crate::models::StatsSnapshot;

/// Counter snapshot for the repository at `repo_path`.
///
/// TODO: replace the fixed counters with tree-sitter-backed extraction
/// (dead code, duplicate functions, import usage) once the analyzer
/// exists.
pub fn snapshot_stats(repo_path: &Path) -> StatsSnapshot {
    warn!(
        path = %repo_path.display(),
        "analyzer not implemented, using placeholder counters"
    );
    [
        ("dead_code_blocks", 3.0),
        ("duplicate_funcs", 4.0),
        ("moved_files_across_layers", 1.0),
        ("force_unwraps", 1.0),
        ("unused_imports", 2.0),
        ("todo_fixes", 1.0),
        ("layer_crossing", 1.0),
        ("cyclic_deps", 0.0),
        ("fan_in_out_outliers", 1.0),
        ("public_api_changes", 0.0),
        ("build_phase_delta", 0.0),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}
