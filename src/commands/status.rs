//! Corpus status command

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use colored::*;
use serde::Serialize;

use blotter::analysis::words;
use blotter::core::corpus::LoadStats;

use super::{load_corpus, resolve_corpus_path};

#[derive(Serialize)]
struct CorpusStatus {
    timestamp: String,
    corpus_file: String,
    stats: LoadStats,
    records: usize,
    total_tokens: usize,
    mean_tokens_per_record: f64,
}

pub fn run(input: Option<&Path>, json: bool) -> Result<()> {
    let corpus = load_corpus(input)?;

    let total_tokens: usize = corpus.records.iter().map(|r| words(r).len()).sum();
    let mean_tokens = if corpus.is_empty() {
        0.0
    } else {
        total_tokens as f64 / corpus.len() as f64
    };

    let status = CorpusStatus {
        timestamp: Local::now().to_rfc3339(),
        corpus_file: resolve_corpus_path(input).display().to_string(),
        stats: corpus.stats,
        records: corpus.len(),
        total_tokens,
        mean_tokens_per_record: mean_tokens,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_status(&status);
    }

    // An empty corpus is an upstream data bug, not a healthy zero.
    if status.records == 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_status(status: &CorpusStatus) {
    println!("{}", "Corpus Status".bold());
    println!("{}", "=".repeat(50));
    println!();
    println!("Timestamp: {}", status.timestamp);
    println!("Corpus file: {}", status.corpus_file);
    println!();
    println!("Raw entries:      {:>6}", status.stats.raw_entries);
    println!("Null entries:     {:>6}", status.stats.nulls);
    println!("Blank entries:    {:>6}", status.stats.blanks);
    println!("Duplicates:       {:>6}", status.stats.duplicates);
    println!("Usable records:   {:>6}", status.records);
    println!();
    println!("Total tokens:     {:>6}", status.total_tokens);
    println!("Tokens/record:    {:>8.1}", status.mean_tokens_per_record);

    if status.records == 0 {
        println!();
        println!(
            "{} corpus contains no usable records",
            "⚠️  Warning:".yellow()
        );
    }

    println!();
    println!("{}", "=".repeat(50));
}
