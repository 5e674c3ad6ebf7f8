//! Travel record schemas — the closed set of shapes a completion can target.
//!
//! Each [`SchemaKind`] maps to one typed record and one static field table.
//! The field table is the single source of truth for both prompt schema
//! rendering and response validation: a field added here shows up in the
//! prompt's schema block and is checked by the validator with no further
//! wiring.

use serde::{Deserialize, Serialize};

/// Which JSON shape a completion is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// A single flight recommendation.
    Flight,
    /// A single hotel recommendation.
    Hotel,
    /// A full multi-day travel plan.
    Plan,
    /// A budget-realism judgment (used by the guardrail pre-check).
    Budget,
}

impl SchemaKind {
    /// Stable schema name used in prompts and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flight => "FlightRecommendation",
            Self::Hotel => "HotelRecommendation",
            Self::Plan => "TravelPlan",
            Self::Budget => "BudgetAnalysis",
        }
    }

    /// The assistant persona announced at the top of a prompt for this kind.
    pub fn persona(&self) -> &'static str {
        match self {
            Self::Flight => "You are a flight booking assistant.",
            Self::Hotel => "You are a hotel booking assistant.",
            Self::Plan => "You are a helpful and enthusiastic travel planning assistant.",
            Self::Budget => "You are a budget check assistant.",
        }
    }

    /// The field table for this shape.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Flight => FLIGHT_FIELDS,
            Self::Hotel => HOTEL_FIELDS,
            Self::Plan => PLAN_FIELDS,
            Self::Budget => BUDGET_FIELDS,
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldType {
    /// A string value.
    Text,
    /// A floating-point number with an optional inclusive lower bound.
    Number { min: Option<f64> },
    /// A whole number with an optional inclusive lower bound.
    Integer { min: Option<i64> },
    /// A boolean value.
    Flag,
    /// An ordered list of strings.
    TextList,
}

impl FieldType {
    /// JSON Schema type name for prompt rendering.
    pub fn json_name(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number { .. } => "number",
            Self::Integer { .. } => "integer",
            Self::Flag => "boolean",
            Self::TextList => "array",
        }
    }
}

/// One field in a schema's field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub description: &'static str,
}

const FLIGHT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "airline",
        ty: FieldType::Text,
        required: true,
        description: "Airline operating the recommended flight",
    },
    FieldSpec {
        name: "departure_time",
        ty: FieldType::Text,
        required: true,
        description: "Departure time of the flight",
    },
    FieldSpec {
        name: "arrival_time",
        ty: FieldType::Text,
        required: true,
        description: "Arrival time of the flight",
    },
    FieldSpec {
        name: "price",
        ty: FieldType::Number { min: Some(0.0) },
        required: true,
        description: "Ticket price in US dollars",
    },
    FieldSpec {
        name: "direct_flight",
        ty: FieldType::Flag,
        required: true,
        description: "Whether the flight is direct",
    },
    FieldSpec {
        name: "recommendation_reason",
        ty: FieldType::Text,
        required: true,
        description: "Why this flight was recommended",
    },
];

const HOTEL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        ty: FieldType::Text,
        required: true,
        description: "Name of the hotel",
    },
    FieldSpec {
        name: "location",
        ty: FieldType::Text,
        required: true,
        description: "Where the hotel is located",
    },
    FieldSpec {
        name: "price_per_night",
        ty: FieldType::Number { min: Some(0.0) },
        required: true,
        description: "Nightly rate in US dollars",
    },
    FieldSpec {
        name: "amenities",
        ty: FieldType::TextList,
        required: true,
        description: "Amenities offered by the hotel",
    },
    FieldSpec {
        name: "recommendation_reason",
        ty: FieldType::Text,
        required: true,
        description: "Why this hotel was recommended",
    },
];

const PLAN_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "destination",
        ty: FieldType::Text,
        required: true,
        description: "Destination city or region",
    },
    FieldSpec {
        name: "duration_days",
        ty: FieldType::Integer { min: Some(1) },
        required: true,
        description: "Trip length in days",
    },
    FieldSpec {
        name: "budget",
        ty: FieldType::Number { min: Some(0.0) },
        required: true,
        description: "Total budget in US dollars",
    },
    FieldSpec {
        name: "activities",
        ty: FieldType::TextList,
        required: true,
        description: "List of recommended activities",
    },
    FieldSpec {
        name: "notes",
        ty: FieldType::Text,
        required: true,
        description: "Additional notes or recommendations",
    },
];

const BUDGET_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "is_realistic",
        ty: FieldType::Flag,
        required: true,
        description: "Whether the stated budget is realistic for the trip",
    },
    FieldSpec {
        name: "reasoning",
        ty: FieldType::Text,
        required: true,
        description: "Short explanation of the judgment",
    },
    FieldSpec {
        name: "suggested_budget",
        ty: FieldType::Number { min: Some(0.0) },
        required: false,
        description: "A more realistic budget, when the stated one is not",
    },
];

// --- Typed records ---

/// A single flight recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecommendation {
    pub airline: String,
    pub departure_time: String,
    pub arrival_time: String,
    /// Ticket price in US dollars. Never negative.
    pub price: f64,
    pub direct_flight: bool,
    pub recommendation_reason: String,
}

/// A single hotel recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecommendation {
    pub name: String,
    pub location: String,
    /// Nightly rate in US dollars. Never negative.
    pub price_per_night: f64,
    pub amenities: Vec<String>,
    pub recommendation_reason: String,
}

/// A full travel plan for a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub destination: String,
    /// Trip length in days. Always at least 1.
    pub duration_days: u32,
    pub budget: f64,
    pub activities: Vec<String>,
    pub notes: String,
}

/// A budget-realism judgment produced by the guardrail pre-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysis {
    pub is_realistic: bool,
    pub reasoning: String,
    /// Typically present only when `is_realistic` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_budget: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_fields() {
        for kind in [
            SchemaKind::Flight,
            SchemaKind::Hotel,
            SchemaKind::Plan,
            SchemaKind::Budget,
        ] {
            assert!(!kind.fields().is_empty());
            assert!(!kind.name().is_empty());
            assert!(kind.persona().starts_with("You are"));
        }
    }

    #[test]
    fn flight_fields_are_all_required() {
        assert!(SchemaKind::Flight.fields().iter().all(|f| f.required));
        assert_eq!(SchemaKind::Flight.fields().len(), 6);
    }

    #[test]
    fn suggested_budget_is_optional() {
        let field = SchemaKind::Budget
            .fields()
            .iter()
            .find(|f| f.name == "suggested_budget")
            .unwrap();
        assert!(!field.required);
        assert_eq!(field.ty, FieldType::Number { min: Some(0.0) });
    }

    #[test]
    fn budget_analysis_roundtrip_without_suggestion() {
        let analysis = BudgetAnalysis {
            is_realistic: true,
            reasoning: "within typical costs".into(),
            suggested_budget: None,
        };
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(!json.contains("suggested_budget"));
        let back: BudgetAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }

    #[test]
    fn travel_plan_roundtrip() {
        let plan = TravelPlan {
            destination: "Tokyo".into(),
            duration_days: 7,
            budget: 3000.0,
            activities: vec!["teamLab".into(), "Tsukiji market".into()],
            notes: "book museum tickets ahead".into(),
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: TravelPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SchemaKind::Flight).unwrap(),
            "\"flight\""
        );
    }
}
