//! Author partisanship pipeline.
//!
//! One run: snapshot the usernames already in the table, then classify each
//! remaining user from the text of up to `posts_per_author` posts, one model
//! call per user. The batch is appended once at the end; a fatal error
//! discards it.

use std::path::Path;

use anyhow::{Context, Result};
use leanscope_common::{AuthorRow, Partisanship};
use tracing::info;

use crate::classifier::PartisanshipClassifier;
use crate::pipeline::stats::AuthorRunStats;
use crate::store::ResultsTable;
use crate::timeline;

pub struct AuthorPipeline {
    classifier: PartisanshipClassifier,
    table: ResultsTable,
    max_users: usize,
    posts_per_author: usize,
    force: bool,
}

impl AuthorPipeline {
    pub fn new(classifier: PartisanshipClassifier, table: ResultsTable) -> Self {
        Self {
            classifier,
            table,
            max_users: 1000,
            posts_per_author: 500,
            force: false,
        }
    }

    pub fn with_max_users(mut self, max_users: usize) -> Self {
        self.max_users = max_users;
        self
    }

    /// Most posts aggregated into one user's prompt.
    pub fn with_posts_per_author(mut self, posts_per_author: usize) -> Self {
        self.posts_per_author = posts_per_author;
        self
    }

    /// Reclassify users already present in the table. Duplicate keys are the
    /// documented result.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub async fn run(&self, input_dir: &Path) -> Result<AuthorRunStats> {
        let existing = self
            .table
            .existing_keys("username")
            .context("failed to load existing usernames")?;
        let timelines = timeline::list_timelines(input_dir, self.max_users)
            .context("failed to list timelines")?;

        info!(
            timelines = timelines.len(),
            existing = existing.len(),
            "Author classification starting"
        );

        let mut stats = AuthorRunStats::default();
        let mut rows: Vec<AuthorRow> = Vec::new();

        for timeline in &timelines {
            if !self.force && existing.contains(&timeline.username) {
                stats.users_skipped += 1;
                continue;
            }

            let mut texts: Vec<String> = Vec::new();
            let mut posts = timeline::read_texts(&timeline.path)?;
            // Cap check precedes each decode so surplus lines are never
            // parsed.
            while texts.len() < self.posts_per_author {
                let Some(post) = posts.next() else { break };
                texts.push(post?.text);
            }

            if texts.is_empty() {
                stats.zero_post_users += 1;
            }

            let (label, explanation) = self.classifier.classify(&texts).await?;
            if label == Partisanship::Error {
                stats.label_coercions += 1;
            }
            stats.users_classified += 1;

            info!(
                user = %timeline.username,
                posts = texts.len(),
                label = %label,
                "Author classified"
            );
            rows.push(AuthorRow {
                username: timeline.username.clone(),
                partisanship: label,
                explanation,
            });
        }

        let appended = self
            .table
            .append(&rows)
            .context("failed to append author rows")?;
        stats.rows_appended = appended as u32;

        info!("{stats}");
        Ok(stats)
    }
}
