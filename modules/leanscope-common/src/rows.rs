//! Row schemas for the output tables.
//!
//! Field order is the column order in the CSV files. Renaming or reordering
//! fields changes the table schema, which breaks resume against existing
//! output files.

use serde::{Deserialize, Serialize};

use crate::labels::{Partisanship, PoliticalLabel};

/// One classified post in the post classification table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRow {
    /// Cohort the author belongs to. Mirrors `user_id` for single-cohort runs.
    pub group_id: String,
    pub platform: String,
    pub user_id: String,
    pub post_id: String,
    pub is_political: PoliticalLabel,
}

/// One classified author in the partisanship table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRow {
    pub username: String,
    pub partisanship: Partisanship,
    /// Free-text rationale. Empty when rationale was not requested.
    pub explanation: String,
}
