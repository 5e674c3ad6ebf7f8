//! The pipeline orchestrator — sequences guardrail, routing, prompt
//! construction, completion, sanitization, and validation.
//!
//! `handle` is stateless: nothing is retained between calls, and a shared
//! `Pipeline` may serve independent queries concurrently. At most two
//! gateway calls happen per invocation — the guardrail, then (unless it
//! blocks) the main completion.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use wayfinder_core::context::UserContext;
use wayfinder_core::gateway::{CompletionGateway, CompletionRequest};
use wayfinder_core::outcome::{GuardrailVerdict, PipelineResult, Record};

use crate::guardrail::GuardrailGate;
use crate::prompt::build_prompt;
use crate::route::{IntentRouter, KeywordRouter};
use crate::sanitize::sanitize;
use crate::validate::parse;

/// The structured completion pipeline.
pub struct Pipeline {
    gateway: Arc<dyn CompletionGateway>,
    router: Box<dyn IntentRouter>,
    guardrail: GuardrailGate,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl Pipeline {
    /// Create a pipeline with the keyword router, default temperatures
    /// (0.7 main, 0.2 guardrail), and a 120s per-call timeout.
    pub fn new(gateway: Arc<dyn CompletionGateway>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            guardrail: GuardrailGate::new(gateway.clone(), &model),
            gateway,
            router: Box::new(KeywordRouter),
            model,
            temperature: 0.7,
            max_tokens: None,
            timeout: Duration::from_secs(120),
        }
    }

    /// Set the main completion temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the guardrail temperature.
    pub fn with_guardrail_temperature(mut self, temperature: f32) -> Self {
        self.guardrail = self.guardrail.with_temperature(temperature);
        self
    }

    /// Replace the intent router.
    pub fn with_router(mut self, router: Box<dyn IntentRouter>) -> Self {
        self.router = router;
        self
    }

    /// Set the per-call timeout, applied to both gateway calls.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.guardrail = self.guardrail.with_timeout(timeout);
        self.timeout = timeout;
        self
    }

    /// Cap the tokens generated by the main completion.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Run one query through the full pipeline.
    pub async fn handle(&self, query: &str, context: Option<&UserContext>) -> PipelineResult {
        // 1. Guardrail — a block ends the invocation before the main
        //    completion is ever requested.
        match self.guardrail.check_budget(query).await {
            GuardrailVerdict::Block {
                reasoning,
                suggested_budget,
            } => {
                info!("query blocked by budget check");
                return PipelineResult::Guardrail {
                    reasoning,
                    suggested_budget,
                };
            }
            GuardrailVerdict::Indeterminate { reason } => {
                debug!(%reason, "budget check indeterminate, proceeding");
            }
            GuardrailVerdict::Pass => {}
        }

        // 2–3. Route the query and build the prompt.
        let kind = self.router.route(query);
        debug!(kind = kind.name(), "routed query");
        let prompt = build_prompt(kind, query, context);

        // 4. Main completion.
        let mut request =
            CompletionRequest::new(&self.model, prompt).with_temperature(self.temperature);
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let response = match tokio::time::timeout(self.timeout, self.gateway.complete(request))
            .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(error = %e, "completion request failed");
                return PipelineResult::Error {
                    error: e.to_string(),
                    raw: String::new(),
                };
            }
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "completion request timed out");
                return PipelineResult::Error {
                    error: format!("completion timed out after {}s", self.timeout.as_secs()),
                    raw: String::new(),
                };
            }
        };

        // 5–6. Sanitize and validate. A failure carries the raw text as
        //      the provider returned it, not the sanitized form.
        match parse(sanitize(&response.text), kind) {
            Ok(Record::Flight(flight)) => PipelineResult::Flight(flight),
            Ok(Record::Hotel(hotel)) => PipelineResult::Hotel(hotel),
            Ok(Record::Plan(plan)) => PipelineResult::Plan(plan),
            Ok(Record::Budget(_)) => PipelineResult::Error {
                error: "router targeted the budget schema outside the guardrail".into(),
                raw: response.text,
            },
            Err(failure) => {
                warn!(problems = failure.problems.len(), "completion failed validation");
                let failure = failure.with_raw(response.text);
                PipelineResult::Error {
                    error: failure.to_string(),
                    raw: failure.raw,
                }
            }
        }
    }
}
