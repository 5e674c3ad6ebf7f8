//! Intent routing — decides which schema a query should target.
//!
//! The router is a trait seam so the keyword heuristic can later be
//! replaced by a model-based classifier without touching the orchestrator.

use wayfinder_core::schema::SchemaKind;

/// Chooses the target schema for a query.
///
/// Implementations must only return `Flight`, `Hotel`, or `Plan` — the
/// `Budget` schema belongs to the guardrail, not to routing.
pub trait IntentRouter: Send + Sync {
    fn route(&self, query: &str) -> SchemaKind;
}

/// Case-insensitive substring heuristic.
///
/// "flight" wins over "hotel" when both appear; anything without a signal
/// falls back to a full travel plan. Deliberately simple — ambiguity is
/// resolved by the fallback, never surfaced as an error.
pub struct KeywordRouter;

impl IntentRouter for KeywordRouter {
    fn route(&self, query: &str) -> SchemaKind {
        let query = query.to_lowercase();
        if query.contains("flight") {
            SchemaKind::Flight
        } else if query.contains("hotel") {
            SchemaKind::Hotel
        } else {
            SchemaKind::Plan
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_keyword_routes_to_flight() {
        assert_eq!(
            KeywordRouter.route("Find me a flight to Boston"),
            SchemaKind::Flight
        );
    }

    #[test]
    fn hotel_keyword_routes_to_hotel() {
        assert_eq!(KeywordRouter.route("hotel in Rome"), SchemaKind::Hotel);
    }

    #[test]
    fn no_keyword_defaults_to_plan() {
        assert_eq!(KeywordRouter.route("plan my trip"), SchemaKind::Plan);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(KeywordRouter.route("FLIGHT to NYC"), SchemaKind::Flight);
        assert_eq!(KeywordRouter.route("a Hotel with a pool"), SchemaKind::Hotel);
    }

    #[test]
    fn flight_wins_over_hotel() {
        assert_eq!(
            KeywordRouter.route("flight and hotel package"),
            SchemaKind::Flight
        );
    }
}
