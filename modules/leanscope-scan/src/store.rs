//! Append-only CSV results tables with resume support.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::TableError;

/// One append-only CSV output table.
///
/// The file's existence doubles as the header-already-written signal: the
/// header goes out with the first non-empty append and never again. Rows are
/// never rewritten, so resuming against the table only needs the key column.
pub struct ResultsTable {
    path: PathBuf,
}

impl ResultsTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Distinct values of `column` already present, as text. A missing or
    /// zero-byte table is an empty baseline, not an error; a table that
    /// exists but lacks `column` refuses the run before any classification.
    ///
    /// Called once per pipeline run and never refreshed, so a concurrent
    /// writer appending the same key mid-run goes unnoticed.
    pub fn existing_keys(&self, column: &str) -> Result<HashSet<String>, TableError> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }
        let len = std::fs::metadata(&self.path)
            .map_err(|source| TableError::Io {
                path: self.path.clone(),
                source,
            })?
            .len();
        if len == 0 {
            return Ok(HashSet::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|source| TableError::Csv {
            path: self.path.clone(),
            source,
        })?;

        let headers = reader
            .headers()
            .map_err(|source| TableError::Csv {
                path: self.path.clone(),
                source,
            })?
            .clone();
        let idx = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| TableError::MissingColumn {
                path: self.path.clone(),
                column: column.to_string(),
            })?;

        let mut keys = HashSet::new();
        for record in reader.records() {
            let record = record.map_err(|source| TableError::Csv {
                path: self.path.clone(),
                source,
            })?;
            if let Some(value) = record.get(idx) {
                keys.insert(value.to_string());
            }
        }
        Ok(keys)
    }

    /// Append `rows` in one open-write-close operation, writing the header
    /// only when the file does not already exist. An empty batch performs no
    /// write and creates no file. Returns the number of rows appended.
    pub fn append<R: Serialize>(&self, rows: &[R]) -> Result<usize, TableError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let existed = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| TableError::Io {
                path: self.path.clone(),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!existed)
            .from_writer(file);

        for row in rows {
            writer.serialize(row).map_err(|source| TableError::Csv {
                path: self.path.clone(),
                source,
            })?;
        }
        writer.flush().map_err(|source| TableError::Io {
            path: self.path.clone(),
            source,
        })?;

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use leanscope_common::{PoliticalLabel, PostRow};
    use tempfile::TempDir;

    fn row(post_id: &str, label: PoliticalLabel) -> PostRow {
        PostRow {
            group_id: "alice".to_string(),
            platform: "twitter".to_string(),
            user_id: "alice".to_string(),
            post_id: post_id.to_string(),
            is_political: label,
        }
    }

    #[test]
    fn missing_table_yields_empty_baseline() {
        let dir = TempDir::new().unwrap();
        let table = ResultsTable::new(dir.path().join("posts.csv"));
        assert!(table.existing_keys("post_id").unwrap().is_empty());
    }

    #[test]
    fn append_writes_header_exactly_once() {
        let dir = TempDir::new().unwrap();
        let table = ResultsTable::new(dir.path().join("posts.csv"));

        table.append(&[row("1", PoliticalLabel::Political)]).unwrap();
        table
            .append(&[row("2", PoliticalLabel::NotPolitical)])
            .unwrap();

        let content = std::fs::read_to_string(table.path()).unwrap();
        let header = "group_id,platform,user_id,post_id,is_political";
        assert_eq!(content.lines().filter(|l| *l == header).count(), 1);
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("alice,twitter,alice,2,not political"));
    }

    #[test]
    fn empty_batch_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let table = ResultsTable::new(dir.path().join("posts.csv"));

        let appended = table.append::<PostRow>(&[]).unwrap();
        assert_eq!(appended, 0);
        assert!(!table.path().exists());
    }

    #[test]
    fn existing_keys_reads_back_appended_column() {
        let dir = TempDir::new().unwrap();
        let table = ResultsTable::new(dir.path().join("posts.csv"));
        table
            .append(&[
                row("1", PoliticalLabel::Political),
                row("2", PoliticalLabel::Error),
            ])
            .unwrap();

        let keys = table.existing_keys("post_id").unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("1"));
        assert!(keys.contains("2"));
    }

    #[test]
    fn header_only_table_yields_empty_baseline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(&path, "group_id,platform,user_id,post_id,is_political\n").unwrap();

        let table = ResultsTable::new(&path);
        assert!(table.existing_keys("post_id").unwrap().is_empty());
    }

    #[test]
    fn missing_key_column_is_refused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let table = ResultsTable::new(&path);
        match table.existing_keys("post_id") {
            Err(TableError::MissingColumn { column, .. }) => assert_eq!(column, "post_id"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn ragged_row_is_refused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(
            &path,
            "group_id,platform,user_id,post_id,is_political\nalice,twitter\n",
        )
        .unwrap();

        let table = ResultsTable::new(&path);
        assert!(matches!(
            table.existing_keys("post_id"),
            Err(TableError::Csv { .. })
        ));
    }

    #[test]
    fn zero_byte_table_yields_empty_baseline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.csv");
        std::fs::write(&path, "").unwrap();

        let table = ResultsTable::new(&path);
        assert!(table.existing_keys("post_id").unwrap().is_empty());
    }
}
