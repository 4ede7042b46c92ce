//! Frequency tables command
//!
//! Prints the most common words, bigrams, and trigrams of the corpus,
//! one table per unit.

use std::path::Path;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use blotter::analysis::{ngram_frequencies, word_frequencies, FrequencyTable};
use blotter::core::config::{get_data_root, Config};

use super::{ensure_not_empty, load_corpus};

#[derive(Serialize)]
struct FrequenciesResult {
    records: usize,
    top_n: usize,
    words: FrequencyTable,
    bigrams: FrequencyTable,
    trigrams: FrequencyTable,
}

pub fn run(input: Option<&Path>, top: Option<usize>, markdown: bool, json: bool) -> Result<()> {
    let corpus = load_corpus(input)?;
    ensure_not_empty(&corpus, input)?;

    let top_n = top.unwrap_or_else(|| {
        let root = get_data_root();
        Config::load(&root).analysis.top_n
    });

    let result = FrequenciesResult {
        records: corpus.len(),
        top_n,
        words: word_frequencies(&corpus.records, top_n),
        bigrams: ngram_frequencies(&corpus.records, 2, top_n),
        trigrams: ngram_frequencies(&corpus.records, 3, top_n),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if markdown {
        print!("{}", result.words.to_markdown());
        println!();
        print!("{}", result.bigrams.to_markdown());
        println!();
        print!("{}", result.trigrams.to_markdown());
    } else {
        print_frequencies(&result);
    }

    Ok(())
}

fn print_frequencies(result: &FrequenciesResult) {
    println!("{}", "Corpus Frequencies".bold());
    println!("{}", "=".repeat(50));
    println!();
    println!("Records: {}", result.records);
    println!("Top N: {}", result.top_n);

    for table in [&result.words, &result.bigrams, &result.trigrams] {
        println!();
        println!("{}", format!("Most common {}s", table.title.to_lowercase()).cyan().bold());
        println!("{}", "-".repeat(50));
        for entry in &table.entries {
            println!("   {:<32} {:>5}", entry.term, entry.count);
        }
    }

    println!();
    println!("{}", "=".repeat(50));
}
