//! JSON reporter
//!
//! Outputs the full ScoreRecord as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::ScoreRecord;
use anyhow::Result;

/// Render record as JSON
pub fn render(record: &ScoreRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Render record as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(record: &ScoreRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_record;

    #[test]
    fn test_json_render_valid() {
        let record = test_record();
        let json_str = render(&record).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["crystallinity"], 0.825);
        assert_eq!(parsed["thresholds_warn"]["defect_density"], 0.12);
    }

    #[test]
    fn test_json_render_compact() {
        let record = test_record();
        let json_str = render_compact(&record).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_round_trip() {
        let record = test_record();
        let json_str = render(&record).expect("render JSON");
        let back: crate::models::ScoreRecord =
            serde_json::from_str(&json_str).expect("deserialize record");
        assert_eq!(back, record);
    }
}
