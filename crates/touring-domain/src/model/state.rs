//! Persisted trip state

use serde::{Deserialize, Serialize};

use super::inputs::RawInputs;
use super::salvage::or_default;
use super::scenario::ScenarioBook;

/// Everything that survives between runs
///
/// A malformed `last` or `scenarios` value loads as empty without
/// affecting the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripState {
    /// Inputs of the most recent calculation
    #[serde(default, deserialize_with = "or_default")]
    pub last: Option<RawInputs>,

    #[serde(default, deserialize_with = "or_default")]
    pub scenarios: ScenarioBook,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_last_keeps_scenarios() {
        let json = r#"{
            "last": "garbage",
            "scenarios": [
                {"id": "scn_a", "name": "箱根", "inputs": {}, "updatedAt": "2026-01-01T00:00:00Z"}
            ]
        }"#;
        let state: TripState = serde_json::from_str(json).unwrap();
        assert!(state.last.is_none());
        assert_eq!(state.scenarios.len(), 1);
    }

    #[test]
    fn test_malformed_scenarios_keep_last() {
        let json = r#"{"last": {"distance": "300", "people": false}, "scenarios": "oops"}"#;
        let state: TripState = serde_json::from_str(json).unwrap();
        let last = state.last.unwrap();
        assert_eq!(last.distance, "300");
        assert_eq!(last.people, "false");
        assert!(state.scenarios.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let state: TripState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, TripState::default());
    }
}
