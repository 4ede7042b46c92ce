//! Taxonomy inspection commands

use std::path::Path;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use super::load_taxonomy;

#[derive(Serialize)]
struct TaxonomySummary {
    categories: Vec<CategorySummary>,
    total_rules: usize,
}

#[derive(Serialize)]
struct CategorySummary {
    name: String,
    rules: usize,
    labels: Vec<String>,
}

pub fn run_list(file: Option<&Path>, json: bool) -> Result<()> {
    let taxonomy = load_taxonomy(file)?;

    let categories: Vec<CategorySummary> = taxonomy
        .categories()
        .iter()
        .map(|category| {
            let mut labels: Vec<String> = Vec::new();
            for rule in &category.rules {
                if !labels.contains(&rule.label) {
                    labels.push(rule.label.clone());
                }
            }
            CategorySummary {
                name: category.name.clone(),
                rules: category.rules.len(),
                labels,
            }
        })
        .collect();

    let summary = TaxonomySummary {
        total_rules: taxonomy.rule_count(),
        categories,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

pub fn run_check(file: Option<&Path>) -> Result<()> {
    // Construction compiles every pattern; reaching here means the
    // taxonomy is usable.
    let taxonomy = load_taxonomy(file)?;

    println!(
        "{} {} categories, {} rules, all patterns compile",
        "✓".green(),
        taxonomy.category_count(),
        taxonomy.rule_count()
    );

    Ok(())
}

fn print_summary(summary: &TaxonomySummary) {
    println!("{}", "Taxonomy".bold());
    println!("{}", "=".repeat(60));
    println!();
    println!("Categories: {}", summary.categories.len());
    println!("Rules: {}", summary.total_rules);

    for category in &summary.categories {
        println!();
        println!(
            "{} ({} rules, {} labels)",
            category.name.cyan().bold(),
            category.rules,
            category.labels.len()
        );
        println!("{}", "-".repeat(60));
        println!("   {}", category.labels.join(", "));
    }

    println!();
    println!("{}", "=".repeat(60));
}
