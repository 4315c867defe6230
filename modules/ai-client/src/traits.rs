use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::ChatRequest;

/// A chat completion backend.
///
/// Implemented by [`crate::OpenRouter`] for real API calls. Callers hold an
/// `Arc<dyn ChatModel>` so the backend can be swapped out in tests.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run one chat completion and return the assistant's reply text.
    ///
    /// `timeout` overrides the client's default deadline for this call only;
    /// `None` keeps the default.
    async fn complete(&self, request: &ChatRequest, timeout: Option<Duration>) -> Result<String>;
}
