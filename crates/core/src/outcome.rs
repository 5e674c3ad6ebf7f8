//! Tagged results flowing out of the pipeline.
//!
//! Failures are values, not exceptions: validation problems, guardrail
//! verdicts, and the final pipeline result are all plain enums threaded
//! through return values. Nothing here crosses an `await` as a panic or an
//! escaping error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::{
    BudgetAnalysis, FlightRecommendation, HotelRecommendation, SchemaKind, TravelPlan,
};

/// A successfully validated record of any schema kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Flight(FlightRecommendation),
    Hotel(HotelRecommendation),
    Plan(TravelPlan),
    Budget(BudgetAnalysis),
}

impl Record {
    /// Which schema this record satisfies.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::Flight(_) => SchemaKind::Flight,
            Self::Hotel(_) => SchemaKind::Hotel,
            Self::Plan(_) => SchemaKind::Plan,
            Self::Budget(_) => SchemaKind::Budget,
        }
    }
}

/// Why a completion failed validation against a schema.
///
/// Carries every per-field problem, not just the first, plus the raw text
/// the model produced (pre-sanitization where the caller has it) for
/// diagnostics.
#[derive(Debug, Clone, Error)]
#[error("{} validation failed: {}", .kind.name(), .problems.join("; "))]
pub struct ValidationFailure {
    /// The schema the text was validated against.
    pub kind: SchemaKind,

    /// The text that failed, for diagnostics.
    pub raw: String,

    /// Human-readable description of each field violation.
    pub problems: Vec<String>,
}

impl ValidationFailure {
    pub fn new(kind: SchemaKind, raw: impl Into<String>, problems: Vec<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            problems,
        }
    }

    /// Replace the carried text with the pre-sanitization original.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }
}

/// Outcome of validating one completion against one schema.
pub type ParseOutcome = Result<Record, ValidationFailure>;

/// Verdict of the budget-realism pre-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum GuardrailVerdict {
    /// The budget looks realistic — proceed with the main request.
    Pass,

    /// The budget is unrealistic — the main request must be skipped.
    Block {
        reasoning: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suggested_budget: Option<f64>,
    },

    /// The check itself failed. Callers treat this as a pass (fail-open);
    /// the reason is kept so the recovery is observable.
    Indeterminate { reason: String },
}

impl GuardrailVerdict {
    /// Whether the main request should proceed.
    pub fn allows_main_request(&self) -> bool {
        !matches!(self, Self::Block { .. })
    }
}

/// The final result of one pipeline invocation.
///
/// Serializes to the wire shape consumed by callers:
/// `{"type": "flight" | "hotel" | "plan", ...fields}`,
/// `{"type": "guardrail", "reasoning": ..., "suggested_budget": ...}`, or
/// `{"type": "error", "error": ..., "raw": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineResult {
    Flight(FlightRecommendation),
    Hotel(HotelRecommendation),
    Plan(TravelPlan),
    Guardrail {
        reasoning: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        suggested_budget: Option<f64>,
    },
    Error {
        error: String,
        /// The raw completion text, empty when the gateway call itself failed.
        #[serde(default)]
        raw: String,
    },
}
