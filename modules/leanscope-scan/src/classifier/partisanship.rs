//! Ternary partisanship classification over one author's posts.

use std::sync::Arc;

use ai_client::{ChatMessage, ChatModel, ChatRequest};
use anyhow::{Context, Result};
use leanscope_common::Partisanship;
use tracing::warn;

/// Labels one author from the concatenated text of their posts.
///
/// No per-request timeout: the aggregated prompt can be large, so the
/// client's default deadline applies.
pub struct PartisanshipClassifier {
    model: Arc<dyn ChatModel>,
    model_id: String,
    include_explanation: bool,
}

impl PartisanshipClassifier {
    pub fn new(
        model: Arc<dyn ChatModel>,
        model_id: impl Into<String>,
        include_explanation: bool,
    ) -> Self {
        Self {
            model,
            model_id: model_id.into(),
            include_explanation,
        }
    }

    /// Label one author. Returns the label and the explanation text (empty
    /// when rationale was not requested or the reply carried none).
    ///
    /// Zero posts bypasses the model entirely: `unsure`, empty explanation.
    /// Embedded newlines in each post are flattened to spaces so the prompt
    /// keeps one post per line.
    pub async fn classify(&self, posts: &[String]) -> Result<(Partisanship, String)> {
        if posts.is_empty() {
            return Ok((Partisanship::Unsure, String::new()));
        }

        let joined = posts
            .iter()
            .map(|p| p.replace('\n', " "))
            .collect::<Vec<_>>()
            .join("\n");

        let request = ChatRequest::new(
            self.model_id.clone(),
            vec![ChatMessage::user(self.prompt(&joined))],
        )
        .with_temperature(0.0);

        let response = self
            .model
            .complete(&request, None)
            .await
            .context("partisanship classification call failed")?;

        Ok(self.parse(&response))
    }

    fn prompt(&self, posts: &str) -> String {
        let explanation_rule = if self.include_explanation {
            "Include a brief explanation after your answer."
        } else {
            "Do not provide explanations."
        };
        format!(
            r#"You are an AI assistant classifying political leaning.

Rules:
- Respond exactly with: democrat, republican, or unsure
- {explanation_rule}

Posts:
{posts}

Your response:"#
        )
    }

    /// Split the normalized reply into (label, explanation).
    ///
    /// With rationale requested, the label candidate is the first
    /// whitespace-delimited token and the rest of the reply is the
    /// explanation. Without it, the whole reply is the candidate. An
    /// off-vocabulary candidate is coerced to the `error` sentinel.
    fn parse(&self, response: &str) -> (Partisanship, String) {
        let normalized = response.trim().to_lowercase();

        let (candidate, explanation) = if self.include_explanation {
            match normalized.split_once(char::is_whitespace) {
                Some((label, rest)) => (label, rest.trim_start()),
                None => (normalized.as_str(), ""),
            }
        } else {
            (normalized.as_str(), "")
        };

        let label = Partisanship::from_response(candidate).unwrap_or_else(|| {
            warn!(reply = %candidate, "Off-vocabulary partisanship label, recording sentinel");
            Partisanship::Error
        });

        (label, explanation.to_string())
    }
}
