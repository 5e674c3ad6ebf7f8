//! Error types for the Wayfinder domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Only the completion
//! gateway can fail with an escaping error — everything downstream of it
//! (sanitization, validation, guardrail verdicts) is expressed as a tagged
//! value in [`crate::outcome`], so a failed query never aborts a host
//! process that keeps serving subsequent queries.

use thiserror::Error;

/// Errors raised by a completion gateway (transport, auth, provider-side).
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Gateway not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}
