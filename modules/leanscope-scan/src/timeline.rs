//! Per-user timeline enumeration and decoding.
//!
//! A timeline is one `.jsonl` file named after its user, one JSON object per
//! line. Decoding is lazy so callers that stop early (global post budget,
//! per-author post cap) never pay for the remaining lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::TimelineError;

/// File extension that marks a per-user timeline file.
const TIMELINE_EXT: &str = "jsonl";

/// One user's timeline file, named `<username>.jsonl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub username: String,
    pub path: PathBuf,
}

/// List the timeline files under `dir`, sorted by username and truncated to
/// `max_users`. Sorting makes the truncation deterministic regardless of
/// directory order.
pub fn list_timelines(dir: &Path, max_users: usize) -> Result<Vec<Timeline>, TimelineError> {
    let entries = std::fs::read_dir(dir).map_err(|source| TimelineError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut timelines = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TimelineError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(TIMELINE_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        timelines.push(Timeline {
            username: stem.to_string(),
            path,
        });
    }

    timelines.sort_by(|a, b| a.username.cmp(&b.username));
    timelines.truncate(max_users);
    Ok(timelines)
}

/// One decoded post for the post pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelinePost {
    /// Post identifier, accepted from JSON as a string or a number.
    /// A line carrying none of the id aliases is malformed.
    #[serde(alias = "tweet_id", alias = "id", deserialize_with = "de_id")]
    pub post_id: String,
    #[serde(default)]
    pub text: String,
}

/// One decoded post for the author pipeline, which needs text only.
#[derive(Debug, Clone, Deserialize)]
pub struct PostText {
    #[serde(default)]
    pub text: String,
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "post id must be a string or number, got {other}"
        ))),
    }
}

/// Lazy line-by-line decoder for one timeline file.
pub struct JsonLines<T> {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonLines<T> {
    fn open(path: &Path) -> Result<Self, TimelineError> {
        let file = File::open(path).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_no: 0,
            _marker: PhantomData,
        })
    }
}

impl<T: DeserializeOwned> Iterator for JsonLines<T> {
    type Item = Result<T, TimelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(TimelineError::Io {
                    path: self.path.clone(),
                    source,
                }))
            }
        };
        self.line_no += 1;
        Some(serde_json::from_str(&line).map_err(|source| TimelineError::Malformed {
            path: self.path.clone(),
            line: self.line_no,
            source,
        }))
    }
}

/// Iterate one timeline's posts for the post pipeline.
pub fn read_posts(path: &Path) -> Result<JsonLines<TimelinePost>, TimelineError> {
    JsonLines::open(path)
}

/// Iterate one timeline's post texts for the author pipeline.
pub fn read_texts(path: &Path) -> Result<JsonLines<PostText>, TimelineError> {
    JsonLines::open(path)
}
