//! Data root initialization commands

use anyhow::Result;
use colored::*;

use blotter::core::config::{get_data_root, Config, CONFIG_FILE_NAME};

pub fn run(config: bool, corpus: Option<String>) -> Result<()> {
    if config || corpus.is_some() {
        return run_config_init(corpus);
    }

    println!("{}", "Blotter Initialization".bold());
    println!("{}", "=".repeat(50));
    println!();
    println!("Usage:");
    println!(
        "  {} - Create config with default corpus path (narratives.json)",
        "blotter init --config".cyan()
    );
    println!(
        "  {} - Create config with custom corpus path",
        "blotter init --corpus <path>".cyan()
    );
    println!();
    println!("Examples:");
    println!("  blotter init --config");
    println!("  blotter init --corpus \"intake/narratives.json\"");
    println!();

    Ok(())
}

fn run_config_init(corpus: Option<String>) -> Result<()> {
    let data_root = get_data_root();
    let config_path = data_root.join(CONFIG_FILE_NAME);
    let existed = config_path.exists();

    println!("{}", "Blotter Configuration Generator".bold());
    println!("{}", "=".repeat(50));
    println!();

    let mut config = if existed {
        println!("{} Loading existing config...", "→".blue());
        Config::load(&data_root)
    } else {
        Config::default()
    };

    if let Some(corpus_path) = &corpus {
        config.corpus.path = corpus_path.clone();
    }

    config.save(&data_root)?;

    if existed {
        println!("{} Updated {}", "✓".green(), config_path.display());
    } else {
        println!("{} Created {}", "✓".green(), config_path.display());
    }

    println!();
    println!("{}", "Configuration:".cyan());
    println!();
    println!("  corpus:");
    println!("    path: \"{}\"", config.corpus.path);
    println!();
    println!("  analysis:");
    println!("    top_n: {}", config.analysis.top_n);
    println!();
    println!("  taxonomy:");
    match &config.taxonomy.path {
        Some(path) => println!("    path: \"{}\"", path),
        None => println!("    path: built-in keyword table"),
    }
    println!();
    println!(
        "{}",
        "Edit .blotter.json to point at your corpus or a custom taxonomy.".dimmed()
    );
    println!();

    Ok(())
}
