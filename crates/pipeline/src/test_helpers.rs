//! Shared test helpers for pipeline tests.

use std::sync::Mutex;
use wayfinder_core::error::GatewayError;
use wayfinder_core::gateway::{
    CompletionGateway, CompletionRequest, CompletionResponse, Usage,
};

/// A mock gateway that returns a sequence of scripted outcomes.
///
/// Each call to `complete` consumes the next entry and records the request
/// it received, so tests can assert on call counts and prompt contents.
/// Panics if more calls are made than outcomes were scripted.
pub struct SequentialMockGateway {
    script: Mutex<Vec<Result<CompletionResponse, GatewayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl SequentialMockGateway {
    pub fn new(script: Vec<Result<CompletionResponse, GatewayError>>) -> Self {
        Self {
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A gateway that returns a single text response.
    pub fn single_text(text: &str) -> Self {
        Self::new(vec![Ok(make_response(text))])
    }

    /// A gateway that returns the given texts in order.
    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(make_response(t))).collect())
    }

    /// How many times `complete` was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The request received by the `index`-th call.
    pub fn request(&self, index: usize) -> CompletionRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait::async_trait]
impl CompletionGateway for SequentialMockGateway {
    fn name(&self) -> &str {
        "sequential_mock"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, GatewayError> {
        self.requests.lock().unwrap().push(request);

        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            panic!(
                "SequentialMockGateway: no more responses (call #{})",
                self.call_count()
            );
        }
        script.remove(0)
    }
}

/// Create a plain text response with mock usage numbers.
pub fn make_response(text: &str) -> CompletionResponse {
    CompletionResponse {
        text: text.into(),
        model: "mock-model".into(),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
    }
}
