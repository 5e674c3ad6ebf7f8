//! # Wayfinder Core
//!
//! Domain types, traits, and error definitions for the Wayfinder structured
//! travel-completion pipeline. This crate has **zero framework dependencies**
//! — it defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The completion gateway is defined as a trait here; implementations live in
//! their respective crates. This enables:
//! - Swapping LLM backends via configuration
//! - Easy testing with mock/stub gateways
//! - Clean dependency graph (all crates depend inward on core)

pub mod context;
pub mod error;
pub mod gateway;
pub mod outcome;
pub mod schema;

// Re-export key types at crate root for ergonomics
pub use context::{BudgetLevel, UserContext};
pub use error::GatewayError;
pub use gateway::{CompletionGateway, CompletionRequest, CompletionResponse, Usage};
pub use outcome::{GuardrailVerdict, ParseOutcome, PipelineResult, Record, ValidationFailure};
pub use schema::{
    BudgetAnalysis, FieldSpec, FieldType, FlightRecommendation, HotelRecommendation, SchemaKind,
    TravelPlan,
};
