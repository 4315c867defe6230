// Test stubs for the classification pipelines.
//
// StubModel implements ChatModel with canned behavior:
// - `returning`: same reply for every call
// - `with_sequence`: scripted replies consumed in order, then an error
// - `failing`: every call errors
//
// Calls and prompts are recorded so tests can assert on model-call budgets
// and on what the classifiers actually sent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use ai_client::{AiError, ChatModel, ChatRequest};
use async_trait::async_trait;

pub struct StubModel {
    scripted: Mutex<Vec<String>>,
    fallback: Option<String>,
    fail: bool,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubModel {
    /// Reply with `reply` for every call.
    pub fn returning(reply: &str) -> Self {
        Self {
            scripted: Mutex::new(Vec::new()),
            fallback: Some(reply.to_string()),
            fail: false,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Reply with each element of `replies` in order; further calls error.
    pub fn with_sequence(replies: &[&str]) -> Self {
        Self {
            scripted: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            fallback: None,
            fail: false,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Error on every call.
    pub fn failing() -> Self {
        Self {
            scripted: Mutex::new(Vec::new()),
            fallback: None,
            fail: true,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of `complete` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// User prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn complete(
        &self,
        request: &ChatRequest,
        _timeout: Option<Duration>,
    ) -> ai_client::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = request.messages.first() {
            self.prompts.lock().unwrap().push(message.content.clone());
        }

        if self.fail {
            return Err(AiError::Network("stub failure".to_string()));
        }

        let mut scripted = self.scripted.lock().unwrap();
        if !scripted.is_empty() {
            return Ok(scripted.remove(0));
        }
        drop(scripted);

        match &self.fallback {
            Some(reply) => Ok(reply.clone()),
            None => Err(AiError::Api {
                status: 500,
                message: "stub reply sequence exhausted".to_string(),
            }),
        }
    }
}
