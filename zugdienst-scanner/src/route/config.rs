//! Reconciliation policy flags.

use serde::Deserialize;

/// Policy knobs for the route reconstructor.
///
/// The source data has been processed with mutually inconsistent rules in
/// the past for two situations; both are explicit flags here instead of a
/// baked-in guess.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReconcilePolicy {
    /// Stop collecting planned stops at the first operational event.
    ///
    /// Default `false`: an event is a per-entry signal and the full
    /// timetable keeps contributing stops. Setting this reproduces the
    /// stricter legacy behavior and lowers stop counts on interrupted
    /// services.
    pub stop_matching_at_event: bool,

    /// Apply the route-label deviation heuristic to freight services too.
    ///
    /// Default `false`: fictional itinerary labels are a passenger-train
    /// naming convention, so only passenger services get re-tagged.
    pub deviation_applies_to_freight: bool,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self {
            stop_matching_at_event: false,
            deviation_applies_to_freight: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let policy = ReconcilePolicy::default();
        assert!(!policy.stop_matching_at_event);
        assert!(!policy.deviation_applies_to_freight);
    }

    #[test]
    fn deserialize_partial_json() {
        let policy: ReconcilePolicy =
            serde_json::from_str(r#"{"stopMatchingAtEvent": true}"#).unwrap();
        assert!(policy.stop_matching_at_event);
        assert!(!policy.deviation_applies_to_freight);
    }

    #[test]
    fn deserialize_empty_json() {
        let policy: ReconcilePolicy = serde_json::from_str("{}").unwrap();
        assert!(!policy.stop_matching_at_event);
    }
}
