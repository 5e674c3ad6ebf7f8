//! Completion gateway implementations for Wayfinder.
//!
//! All gateways implement the `wayfinder_core::CompletionGateway` trait.
//! The registry selects the configured backend at startup.

pub mod openai_compat;
pub mod registry;

pub use openai_compat::OpenAiCompatGateway;
pub use registry::{GatewayRegistry, build_from_config};
