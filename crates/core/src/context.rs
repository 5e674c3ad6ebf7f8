//! Session-scoped user preferences injected into prompt construction.
//!
//! A [`UserContext`] is owned by the calling session (CLI, service handler).
//! The pipeline only ever sees an immutable reference — preference updates
//! happen through the explicit methods here, never mid-flight. Callers that
//! share a context across concurrent queries should pass each invocation a
//! snapshot (`clone()`) rather than a shared mutable reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How much the user is willing to spend, as a coarse tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetLevel {
    Budget,
    #[default]
    MidRange,
    Luxury,
}

impl std::fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for BudgetLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" | "low" => Ok(Self::Budget),
            "mid-range" | "mid_range" | "midrange" | "mid" => Ok(Self::MidRange),
            "luxury" | "high" => Ok(Self::Luxury),
            other => Err(format!(
                "unknown budget level '{other}' (expected budget, mid-range, or luxury)"
            )),
        }
    }
}

/// Per-session preference bundle rendered into prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    /// Stable identifier for the user or session.
    pub user_id: String,

    /// Airlines the user prefers to fly, in preference order.
    pub preferred_airlines: Vec<String>,

    /// Amenities a recommended hotel must offer.
    pub hotel_amenities: Vec<String>,

    /// Spending tier.
    pub budget_level: BudgetLevel,

    /// When this session started.
    pub session_start: DateTime<Utc>,
}

impl UserContext {
    /// Create a context for a known user id with empty preferences.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            preferred_airlines: Vec::new(),
            hotel_amenities: Vec::new(),
            budget_level: BudgetLevel::default(),
            session_start: Utc::now(),
        }
    }

    /// Create a context with a generated session identifier.
    pub fn anonymous() -> Self {
        Self::new(format!("user-{}", Uuid::new_v4()))
    }

    /// Add an airline to the preference list. Duplicates are ignored.
    pub fn prefer_airline(&mut self, airline: impl Into<String>) {
        let airline = airline.into();
        if !self.preferred_airlines.contains(&airline) {
            self.preferred_airlines.push(airline);
        }
    }

    /// Add a required hotel amenity. Duplicates are ignored.
    pub fn require_amenity(&mut self, amenity: impl Into<String>) {
        let amenity = amenity.into();
        if !self.hotel_amenities.contains(&amenity) {
            self.hotel_amenities.push(amenity);
        }
    }

    /// Change the spending tier.
    pub fn set_budget_level(&mut self, level: BudgetLevel) {
        self.budget_level = level;
    }
}
