//! Binary political / not-political classification of single posts.

use std::sync::Arc;
use std::time::Duration;

use ai_client::{ChatMessage, ChatModel, ChatRequest};
use anyhow::{Context, Result};
use leanscope_common::PoliticalLabel;
use tracing::warn;

/// Per-request timeout for single-post calls. One post is a small prompt;
/// anything slower than this is treated as a failure.
const POST_TIMEOUT: Duration = Duration::from_secs(30);

/// Labels one post at a time through an injected chat model.
pub struct PostClassifier {
    model: Arc<dyn ChatModel>,
    model_id: String,
}

impl PostClassifier {
    pub fn new(model: Arc<dyn ChatModel>, model_id: impl Into<String>) -> Self {
        Self {
            model,
            model_id: model_id.into(),
        }
    }

    /// Label one post.
    ///
    /// Empty or whitespace-only text short-circuits to `not political`
    /// without a model call. An off-vocabulary reply is coerced to the
    /// `error` sentinel with a warning; a failed call is fatal.
    pub async fn classify(&self, text: &str) -> Result<PoliticalLabel> {
        if text.trim().is_empty() {
            return Ok(PoliticalLabel::NotPolitical);
        }

        let request = ChatRequest::new(
            self.model_id.clone(),
            vec![ChatMessage::user(prompt(text))],
        )
        .with_temperature(0.0);

        let response = self
            .model
            .complete(&request, Some(POST_TIMEOUT))
            .await
            .context("post classification call failed")?;

        let normalized = response.trim().to_lowercase();
        Ok(PoliticalLabel::from_response(&normalized).unwrap_or_else(|| {
            warn!(reply = %normalized, "Off-vocabulary post label, recording sentinel");
            PoliticalLabel::Error
        }))
    }
}

fn prompt(text: &str) -> String {
    format!(
        r#"You are an AI assistant that must decide whether the following post is political or not.

Rules:
- Answer either: "political" or "not political"
- Do not provide explanations or context
- If ambiguous, lean toward "not political"

Post:
"{text}"

Your response:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::StubModel;

    fn classifier(stub: &Arc<StubModel>) -> PostClassifier {
        PostClassifier::new(stub.clone(), "test-model")
    }

    #[tokio::test]
    async fn empty_text_short_circuits_without_a_call() {
        let stub = Arc::new(StubModel::returning("political"));
        let label = classifier(&stub).classify("   \n ").await.unwrap();

        assert_eq!(label, PoliticalLabel::NotPolitical);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn reply_is_normalized_before_matching() {
        let stub = Arc::new(StubModel::returning("  Political\n"));
        let label = classifier(&stub).classify("vote tomorrow").await.unwrap();

        assert_eq!(label, PoliticalLabel::Political);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn off_vocabulary_reply_becomes_sentinel() {
        let stub = Arc::new(StubModel::returning("probably political"));
        let label = classifier(&stub).classify("vote tomorrow").await.unwrap();

        assert_eq!(label, PoliticalLabel::Error);
    }

    #[tokio::test]
    async fn failed_call_is_fatal() {
        let stub = Arc::new(StubModel::failing());
        let result = classifier(&stub).classify("vote tomorrow").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn prompt_embeds_the_post_verbatim() {
        let stub = Arc::new(StubModel::returning("not political"));
        classifier(&stub).classify("I love tacos").await.unwrap();

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"I love tacos\""));
    }
}
