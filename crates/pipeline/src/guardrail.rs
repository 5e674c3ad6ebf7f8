//! Budget-realism pre-check that can short-circuit the main request.
//!
//! The check is advisory: it runs before the main completion and blocks
//! obviously unrealistic requests, but any failure in the check itself —
//! transport, timeout, malformed response — collapses to `Indeterminate`,
//! which callers treat as a pass. The failure reason is kept and logged so
//! the fail-open path stays observable.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use wayfinder_core::gateway::{CompletionGateway, CompletionRequest};
use wayfinder_core::outcome::{GuardrailVerdict, Record};
use wayfinder_core::schema::SchemaKind;

use crate::prompt::build_budget_check_prompt;
use crate::sanitize::sanitize;
use crate::validate::parse;

/// Runs the budget-realism judgment against the completion gateway.
pub struct GuardrailGate {
    gateway: Arc<dyn CompletionGateway>,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl GuardrailGate {
    /// Create a gate with the default low temperature (0.2) and a 120s
    /// per-call timeout.
    pub fn new(gateway: Arc<dyn CompletionGateway>, model: impl Into<String>) -> Self {
        Self {
            gateway,
            model: model.into(),
            temperature: 0.2,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Judge whether the query's implied budget is realistic.
    ///
    /// Never fails: every error path returns `Indeterminate`.
    pub async fn check_budget(&self, query: &str) -> GuardrailVerdict {
        let prompt = build_budget_check_prompt(query);
        let request =
            CompletionRequest::new(&self.model, prompt).with_temperature(self.temperature);

        let response = match tokio::time::timeout(self.timeout, self.gateway.complete(request))
            .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(error = %e, "budget check call failed, proceeding without it");
                return GuardrailVerdict::Indeterminate {
                    reason: e.to_string(),
                };
            }
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "budget check timed out, proceeding without it");
                return GuardrailVerdict::Indeterminate {
                    reason: format!("budget check timed out after {}s", self.timeout.as_secs()),
                };
            }
        };

        match parse(sanitize(&response.text), SchemaKind::Budget) {
            Ok(Record::Budget(analysis)) => {
                if analysis.is_realistic {
                    debug!("budget judged realistic");
                    GuardrailVerdict::Pass
                } else {
                    debug!(suggested = ?analysis.suggested_budget, "budget judged unrealistic");
                    GuardrailVerdict::Block {
                        reasoning: analysis.reasoning,
                        suggested_budget: analysis.suggested_budget,
                    }
                }
            }
            Ok(record) => GuardrailVerdict::Indeterminate {
                reason: format!("unexpected {} record from budget check", record.kind()),
            },
            Err(failure) => {
                warn!(problems = failure.problems.len(), "budget check response failed validation, proceeding without it");
                GuardrailVerdict::Indeterminate {
                    reason: failure.to_string(),
                }
            }
        }
    }
}
