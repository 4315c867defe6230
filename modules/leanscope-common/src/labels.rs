//! Closed label vocabularies for classifier outputs.
//!
//! Model replies are only accepted verbatim from these sets. Anything else is
//! coerced to the `Error` sentinel by the caller, so the output tables never
//! carry free-form labels.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Post labels
// ============================================================================

/// Verdict for a single post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliticalLabel {
    Political,
    #[serde(rename = "not political")]
    NotPolitical,
    /// Sentinel for a failed call or an off-vocabulary reply.
    Error,
}

impl PoliticalLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            PoliticalLabel::Political => "political",
            PoliticalLabel::NotPolitical => "not political",
            PoliticalLabel::Error => "error",
        }
    }

    /// Parse a model reply, accepting only the exact vocabulary.
    /// The sentinel is never parsed from a reply.
    pub fn from_response(response: &str) -> Option<Self> {
        match response.trim().to_lowercase().as_str() {
            "political" => Some(PoliticalLabel::Political),
            "not political" => Some(PoliticalLabel::NotPolitical),
            _ => None,
        }
    }
}

impl fmt::Display for PoliticalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Author labels
// ============================================================================

/// Verdict for an author's overall political leaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partisanship {
    Democrat,
    Republican,
    Unsure,
    /// Sentinel for a failed call or an off-vocabulary reply.
    Error,
}

impl Partisanship {
    pub const fn as_str(self) -> &'static str {
        match self {
            Partisanship::Democrat => "democrat",
            Partisanship::Republican => "republican",
            Partisanship::Unsure => "unsure",
            Partisanship::Error => "error",
        }
    }

    /// Parse a label candidate, accepting only the exact vocabulary.
    /// The sentinel is never parsed from a reply.
    pub fn from_response(response: &str) -> Option<Self> {
        match response.trim().to_lowercase().as_str() {
            "democrat" => Some(Partisanship::Democrat),
            "republican" => Some(Partisanship::Republican),
            "unsure" => Some(Partisanship::Unsure),
            _ => None,
        }
    }
}

impl fmt::Display for Partisanship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
