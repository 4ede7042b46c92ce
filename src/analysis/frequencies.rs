//! Token and n-gram frequency counting
//!
//! Counts run over stop-word-filtered alphabetic tokens; n-gram windows
//! never span record boundaries.

use std::collections::HashMap;

use serde::Serialize;

use super::tokenizer::content_words;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub term: String,
    pub count: usize,
}

/// A top-N frequency table, count descending with lexical tie order
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyTable {
    /// Column title for rendering ("Word", "Bigram", ...)
    pub title: String,
    pub entries: Vec<FrequencyEntry>,
}

/// Most common content words across the corpus
pub fn word_frequencies(records: &[String], top_n: usize) -> FrequencyTable {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        for token in content_words(record) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    FrequencyTable {
        title: "Word".to_string(),
        entries: top_entries(counts, top_n),
    }
}

/// Most common n-grams of content words across the corpus
pub fn ngram_frequencies(records: &[String], n: usize, top_n: usize) -> FrequencyTable {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        let tokens = content_words(record);
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    let title = match n {
        2 => "Bigram".to_string(),
        3 => "Trigram".to_string(),
        _ => format!("{n}-gram"),
    };
    FrequencyTable {
        title,
        entries: top_entries(counts, top_n),
    }
}

fn top_entries(counts: HashMap<String, usize>, top_n: usize) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(term, count)| FrequencyEntry { term, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    entries.truncate(top_n);
    entries
}
