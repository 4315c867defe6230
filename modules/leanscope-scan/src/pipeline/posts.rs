//! Post classification pipeline.
//!
//! One run: snapshot the existing post keys, walk the timelines, classify
//! every unseen post until the global budget is spent, then append the whole
//! batch at once. A fatal error anywhere discards the batch, leaving the
//! table exactly as it was before the run.

use std::path::Path;

use anyhow::{Context, Result};
use leanscope_common::{PoliticalLabel, PostRow};
use tracing::info;

use crate::classifier::PostClassifier;
use crate::pipeline::stats::PostRunStats;
use crate::store::ResultsTable;
use crate::timeline;

pub struct PostPipeline {
    classifier: PostClassifier,
    table: ResultsTable,
    platform: String,
    max_posts: usize,
    max_users: usize,
    force: bool,
}

impl PostPipeline {
    pub fn new(
        classifier: PostClassifier,
        table: ResultsTable,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            table,
            platform: platform.into(),
            max_posts: 1000,
            max_users: 1000,
            force: false,
        }
    }

    /// Budget of newly classified posts per run, across all users.
    pub fn with_max_posts(mut self, max_posts: usize) -> Self {
        self.max_posts = max_posts;
        self
    }

    pub fn with_max_users(mut self, max_users: usize) -> Self {
        self.max_users = max_users;
        self
    }

    /// Reclassify keys already present in the table. Duplicate keys are the
    /// documented result.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub async fn run(&self, input_dir: &Path) -> Result<PostRunStats> {
        let existing = self
            .table
            .existing_keys("post_id")
            .context("failed to load existing post keys")?;
        let timelines = timeline::list_timelines(input_dir, self.max_users)
            .context("failed to list timelines")?;

        info!(
            timelines = timelines.len(),
            existing = existing.len(),
            "Post classification starting"
        );

        let mut stats = PostRunStats::default();
        let mut rows: Vec<PostRow> = Vec::new();

        for timeline in &timelines {
            stats.users_seen += 1;
            let mut new_for_user = 0u32;
            let mut skipped_for_user = 0u32;

            let mut posts = timeline::read_posts(&timeline.path)?;
            // Budget check precedes each decode so capped lines are never
            // parsed.
            while rows.len() < self.max_posts {
                let Some(post) = posts.next() else { break };
                let post = post?;

                if !self.force && existing.contains(&post.post_id) {
                    skipped_for_user += 1;
                    continue;
                }

                let label = self.classifier.classify(&post.text).await?;
                if label == PoliticalLabel::Error {
                    stats.label_coercions += 1;
                }
                new_for_user += 1;
                rows.push(PostRow {
                    group_id: timeline.username.clone(),
                    platform: self.platform.clone(),
                    user_id: timeline.username.clone(),
                    post_id: post.post_id,
                    is_political: label,
                });
            }

            info!(
                user = %timeline.username,
                new = new_for_user,
                skipped = skipped_for_user,
                "Timeline processed"
            );
            stats.posts_classified += new_for_user;
            stats.posts_skipped += skipped_for_user;

            if rows.len() >= self.max_posts {
                info!(max_posts = self.max_posts, "Post budget reached");
                break;
            }
        }

        let appended = self
            .table
            .append(&rows)
            .context("failed to append post rows")?;
        stats.rows_appended = appended as u32;

        info!("{stats}");
        Ok(stats)
    }
}
