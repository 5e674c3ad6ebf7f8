//! The Wayfinder structured completion pipeline.
//!
//! One `handle` call runs: budget guardrail → intent routing → prompt
//! construction → gateway completion → sanitization → schema validation,
//! and returns a tagged [`wayfinder_core::PipelineResult`]. A blocked
//! guardrail short-circuits before the main completion is ever requested;
//! a failed guardrail fails open.
//!
//! The orchestrator is stateless — independent queries may run concurrently
//! against a shared `Pipeline` without coordination.

pub mod guardrail;
pub mod orchestrator;
pub mod prompt;
pub mod route;
pub mod sanitize;
pub mod validate;

pub use guardrail::GuardrailGate;
pub use orchestrator::Pipeline;
pub use prompt::{build_budget_check_prompt, build_prompt};
pub use route::{IntentRouter, KeywordRouter};
pub use sanitize::sanitize;
pub use validate::parse;

#[cfg(test)]
pub(crate) mod test_helpers;
