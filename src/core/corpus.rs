//! Narrative corpus loading
//!
//! The corpus source is a JSON array of narrative strings, as produced by
//! the intake pipeline. Entries may be null; loading filters nulls and
//! blank strings, drops duplicates keeping the first occurrence, and keeps
//! counts of everything it removed.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// A loaded corpus: cleaned records plus load statistics.
#[derive(Debug, Clone, Serialize)]
pub struct Corpus {
    /// Cleaned narrative records, first-seen order
    pub records: Vec<String>,
    pub stats: LoadStats,
}

/// What the loader dropped on the way in
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LoadStats {
    /// Entries in the raw JSON array, including nulls
    pub raw_entries: usize,
    /// Null entries removed
    pub nulls: usize,
    /// Blank or whitespace-only strings removed
    pub blanks: usize,
    /// Exact duplicates removed (first occurrence kept)
    pub duplicates: usize,
}

impl Corpus {
    /// Load a corpus from a JSON file containing an array of nullable strings.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read corpus file {}", path.display()))?;
        let raw: Vec<Option<String>> = serde_json::from_str(&content)
            .with_context(|| format!("corpus file {} is not a JSON string array", path.display()))?;
        Ok(Self::from_raw(raw))
    }

    /// Build a corpus from raw nullable entries.
    pub fn from_raw(raw: Vec<Option<String>>) -> Self {
        let raw_entries = raw.len();
        let mut nulls = 0;
        let mut blanks = 0;
        let mut duplicates = 0;

        let mut seen: HashSet<String> = HashSet::new();
        let mut records = Vec::new();

        for entry in raw {
            let text = match entry {
                Some(t) => t,
                None => {
                    nulls += 1;
                    continue;
                }
            };
            if text.trim().is_empty() {
                blanks += 1;
                continue;
            }
            if !seen.insert(text.clone()) {
                duplicates += 1;
                continue;
            }
            records.push(text);
        }

        Self {
            records,
            stats: LoadStats {
                raw_entries,
                nulls,
                blanks,
                duplicates,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn raw(entries: &[Option<&str>]) -> Vec<Option<String>> {
        entries.iter().map(|e| e.map(str::to_string)).collect()
    }

    #[test]
    fn test_filters_nulls_and_blanks() {
        let corpus = Corpus::from_raw(raw(&[
            Some("The officer drew his gun"),
            None,
            Some("   "),
            Some(""),
            Some("She filed a complaint"),
        ]));

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.stats.raw_entries, 5);
        assert_eq!(corpus.stats.nulls, 1);
        assert_eq!(corpus.stats.blanks, 2);
        assert_eq!(corpus.stats.duplicates, 0);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let corpus = Corpus::from_raw(raw(&[
            Some("second narrative"),
            Some("first narrative"),
            Some("second narrative"),
        ]));

        assert_eq!(corpus.records, vec!["second narrative", "first narrative"]);
        assert_eq!(corpus.stats.duplicates, 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["one narrative", null, "one narrative", "two"]"#).unwrap();

        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.records, vec!["one narrative", "two"]);
        assert_eq!(corpus.stats.nulls, 1);
        assert_eq!(corpus.stats.duplicates, 1);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();

        assert!(Corpus::load(file.path()).is_err());
    }
}
