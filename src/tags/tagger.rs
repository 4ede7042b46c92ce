//! Keyword tagger
//!
//! Scans every record against every taxonomy rule and accumulates, per
//! (category, label), the records that matched. A single pass, no
//! short-circuiting: a record contributes to every category and label it
//! textually matches, since real narratives routinely touch several
//! categories at once.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::TagError;

use super::taxonomy::Taxonomy;

/// Cap on example records carried per report row; counts are never capped.
pub const MAX_EXAMPLES: usize = 100;

/// One (category, label) row of the tag report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub category: String,
    pub label: String,
    /// Total matches accumulated under this label
    pub count: usize,
    /// First matching records, first-seen order, at most [`MAX_EXAMPLES`]
    pub examples: Vec<String>,
}

/// The full tag report, sorted by category ascending then count descending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    pub rows: Vec<ReportRow>,
}

impl TagReport {
    /// Sum of all row counts
    pub fn total_matches(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }
}

/// Tag a corpus of records against a taxonomy.
///
/// Each record is lowercased once and tested against every rule of every
/// category with unanchored match semantics; on a hit the original record
/// is appended to that rule's (category, label) match set. A record that
/// matches several rules mapped to the same label is appended once per
/// matching rule, so a label's count can exceed its number of distinct
/// records.
///
/// The result is a pure function of its inputs: rows are sorted by
/// category name ascending, then count descending, with ties left in rule
/// declaration order.
///
/// Fails with [`TagError::EmptyCorpus`] when there is nothing to scan;
/// malformed patterns are rejected earlier, at taxonomy construction.
pub fn tag(records: &[String], taxonomy: &Taxonomy) -> Result<TagReport, TagError> {
    if records.is_empty() {
        return Err(TagError::EmptyCorpus);
    }

    let categories = taxonomy.categories();

    // Rule index -> label bucket index, one table per category. Buckets are
    // created in rule declaration order, which fixes the tie order of rows
    // with equal counts.
    let mut buckets: Vec<Vec<(String, Vec<String>)>> = Vec::with_capacity(categories.len());
    let mut rule_bucket: Vec<Vec<usize>> = Vec::with_capacity(categories.len());
    for category in categories {
        let mut label_index: HashMap<&str, usize> = HashMap::new();
        let mut category_buckets = Vec::new();
        let mut table = Vec::with_capacity(category.rules.len());
        for rule in &category.rules {
            let idx = *label_index.entry(rule.label.as_str()).or_insert_with(|| {
                category_buckets.push((rule.label.clone(), Vec::new()));
                category_buckets.len() - 1
            });
            table.push(idx);
        }
        buckets.push(category_buckets);
        rule_bucket.push(table);
    }

    // Per-record scans are independent, so they run in parallel; the fold
    // below walks the results in corpus order, keeping the output identical
    // to the serial loop.
    let hits: Vec<Vec<(usize, usize)>> = records
        .par_iter()
        .map(|record| {
            let lowered = record.to_lowercase();
            let mut record_hits = Vec::new();
            for (ci, category) in categories.iter().enumerate() {
                for (ri, rule) in category.rules.iter().enumerate() {
                    if rule.is_match(&lowered) {
                        record_hits.push((ci, ri));
                    }
                }
            }
            record_hits
        })
        .collect();

    for (record, record_hits) in records.iter().zip(&hits) {
        for &(ci, ri) in record_hits {
            let bucket = rule_bucket[ci][ri];
            buckets[ci][bucket].1.push(record.clone());
        }
    }

    // One row per non-empty match set, grouped by category in ascending
    // name order; the per-category sort is stable, so equal counts keep
    // declaration order.
    let mut category_order: Vec<usize> = (0..categories.len()).collect();
    category_order.sort_by(|&a, &b| categories[a].name.cmp(&categories[b].name));

    let mut rows = Vec::new();
    for ci in category_order {
        let mut category_rows: Vec<ReportRow> = buckets[ci]
            .iter()
            .filter(|(_, matched)| !matched.is_empty())
            .map(|(label, matched)| ReportRow {
                category: categories[ci].name.clone(),
                label: label.clone(),
                count: matched.len(),
                examples: matched.iter().take(MAX_EXAMPLES).cloned().collect(),
            })
            .collect();
        category_rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows.extend(category_rows);
    }

    Ok(TagReport { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::taxonomy::{CategoryDef, RuleDef};

    fn taxonomy(entries: &[(&str, &[(&str, &str)])]) -> Taxonomy {
        let defs = entries
            .iter()
            .map(|(name, rules)| CategoryDef {
                name: name.to_string(),
                rules: rules
                    .iter()
                    .map(|(pattern, label)| RuleDef {
                        pattern: pattern.to_string(),
                        label: label.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Taxonomy::new(defs).unwrap()
    }

    fn records(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn row<'a>(report: &'a TagReport, category: &str, label: &str) -> &'a ReportRow {
        report
            .rows
            .iter()
            .find(|r| r.category == category && r.label == label)
            .unwrap_or_else(|| panic!("no row for {category}/{label}"))
    }

    #[test]
    fn test_worked_example() {
        let corpus = records(&[
            "The officer drew his gun and shot the man",
            "She felt terrified and started crying",
        ]);
        let tax = taxonomy(&[
            ("Police Actions", &[(r"shoot\w*|shot", "shoot"), (r"gun\w*", "gun")]),
            ("Emotional Impact", &[(r"terrified", "terrified"), (r"cry\w*", "cry")]),
        ]);

        let report = tag(&corpus, &tax).unwrap();
        assert_eq!(report.rows.len(), 4);

        assert_eq!(row(&report, "Police Actions", "shoot").count, 1);
        assert_eq!(row(&report, "Police Actions", "gun").count, 1);
        assert_eq!(row(&report, "Emotional Impact", "terrified").count, 1);
        assert_eq!(row(&report, "Emotional Impact", "cry").count, 1);

        assert_eq!(
            row(&report, "Police Actions", "shoot").examples,
            vec!["The officer drew his gun and shot the man"]
        );
        assert_eq!(
            row(&report, "Emotional Impact", "cry").examples,
            vec!["She felt terrified and started crying"]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive_and_keeps_original_record() {
        let corpus = records(&["TASERED twice at the SCENE"]);
        let tax = taxonomy(&[("Police Actions", &[(r"taser\w*", "taser")])]);

        let report = tag(&corpus, &tax).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].examples, vec!["TASERED twice at the SCENE"]);
    }

    #[test]
    fn test_record_in_two_categories_appears_in_both_rows() {
        let corpus = records(&["Officers beat him and he was left terrified"]);
        let tax = taxonomy(&[
            ("Police Actions", &[(r"beat\w*", "beat")]),
            ("Emotional Impact", &[(r"terrified", "terrified")]),
        ]);

        let report = tag(&corpus, &tax).unwrap();
        let beat = row(&report, "Police Actions", "beat");
        let terrified = row(&report, "Emotional Impact", "terrified");
        assert_eq!(beat.examples, terrified.examples);
    }

    #[test]
    fn test_zero_match_record_contributes_nothing() {
        let corpus = records(&["nothing relevant here", "the deputy detained her"]);
        let tax = taxonomy(&[("Officer Involved", &[(r"deputy\w*", "deputy")])]);

        let report = tag(&corpus, &tax).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].count, 1);
        assert_eq!(report.rows[0].examples, vec!["the deputy detained her"]);
    }

    #[test]
    fn same_label_rules_accumulate_per_rule() {
        // Two synonymous rules map to one label; a record matching both is
        // appended twice, matching the original pipeline's counts.
        let corpus = records(&["he was handcuffed and cuffed again"]);
        let tax = taxonomy(&[(
            "Police Actions",
            &[(r"handcuff\w*", "handcuff"), (r"cuff\w*", "handcuff")],
        )]);

        let report = tag(&corpus, &tax).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].count, 2);
        assert_eq!(report.rows[0].examples.len(), 2);
    }

    #[test]
    fn test_sort_category_ascending_then_count_descending() {
        let corpus = records(&[
            "the cop and the sheriff shouted",
            "another cop arrived",
            "a scream rang out",
        ]);
        let tax = taxonomy(&[
            ("Officer Involved", &[(r"sheriff\w*", "sheriff"), (r"cop\w*", "cop")]),
            ("Emotional Impact", &[(r"scream\w*", "scream")]),
        ]);

        let report = tag(&corpus, &tax).unwrap();
        let keys: Vec<(&str, &str)> = report
            .rows
            .iter()
            .map(|r| (r.category.as_str(), r.label.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Emotional Impact", "scream"),
                ("Officer Involved", "cop"),
                ("Officer Involved", "sheriff"),
            ]
        );
    }

    #[test]
    fn test_equal_counts_keep_rule_declaration_order() {
        let corpus = records(&["the trooper and the constable watched"]);
        let tax = taxonomy(&[(
            "Officer Involved",
            &[(r"trooper\w*", "trooper"), (r"constable\w*", "constable")],
        )]);

        let report = tag(&corpus, &tax).unwrap();
        let labels: Vec<&str> = report.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["trooper", "constable"]);
    }

    #[test]
    fn test_examples_capped_at_100_but_count_is_not() {
        let corpus: Vec<String> = (0..130).map(|i| format!("protest number {i}")).collect();
        let tax = taxonomy(&[("Location", &[(r"protest\w*", "protest")])]);

        let report = tag(&corpus, &tax).unwrap();
        assert_eq!(report.rows[0].count, 130);
        assert_eq!(report.rows[0].examples.len(), MAX_EXAMPLES);
        assert_eq!(report.rows[0].examples[0], "protest number 0");
    }

    #[test]
    fn test_deterministic_across_calls() {
        let corpus: Vec<String> = (0..200)
            .map(|i| format!("officer {i} pushed and shoved near the station"))
            .collect();
        let tax = Taxonomy::builtin();

        let first = tag(&corpus, &tax).unwrap();
        let second = tag(&corpus, &tax).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_appending_a_record_never_decreases_counts() {
        let mut corpus = records(&["the officer shoved him", "a cop watched"]);
        let tax = Taxonomy::builtin();
        let before = tag(&corpus, &tax).unwrap();

        corpus.push("another officer arrived at the scene".to_string());
        let after = tag(&corpus, &tax).unwrap();

        for old_row in &before.rows {
            let new_row = after
                .rows
                .iter()
                .find(|r| r.category == old_row.category && r.label == old_row.label)
                .expect("row disappeared after appending a record");
            assert!(new_row.count >= old_row.count);
        }
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let tax = Taxonomy::builtin();
        assert!(matches!(tag(&[], &tax), Err(TagError::EmptyCorpus)));
    }
}
