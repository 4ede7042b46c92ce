//! Keyword tag report command

use std::path::Path;

use anyhow::Result;
use colored::*;

use blotter::tags::{tag, TagReport};

use super::{load_corpus, load_taxonomy};

pub fn run(
    input: Option<&Path>,
    taxonomy_file: Option<&Path>,
    examples: usize,
    markdown: bool,
    json: bool,
) -> Result<()> {
    let taxonomy = load_taxonomy(taxonomy_file)?;
    let corpus = load_corpus(input)?;

    let report = tag(&corpus.records, &taxonomy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if markdown {
        print!("{}", report.to_markdown());
    } else {
        print_report(&report, corpus.len(), examples);
    }

    Ok(())
}

fn print_report(report: &TagReport, record_count: usize, examples: usize) {
    println!("{}", "Keyword Tag Report".bold());
    println!("{}", "=".repeat(60));
    println!();
    println!("Records scanned: {}", record_count);
    println!("Matched rows: {}", report.rows.len());
    println!("Total matches: {}", report.total_matches());
    println!();

    let mut current_category: Option<&str> = None;
    for row in &report.rows {
        if current_category != Some(row.category.as_str()) {
            if current_category.is_some() {
                println!();
            }
            println!("{}", row.category.cyan().bold());
            println!("{}", "-".repeat(60));
            current_category = Some(row.category.as_str());
        }

        println!("   {:<24} {:>5}", row.label, row.count);
        for example in row.examples.iter().take(examples) {
            println!("      {}", format!("\"{}\"", example).dimmed());
        }
    }

    println!();
    println!("{}", "=".repeat(60));
}
