mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blotter")]
#[command(about = "Offline batch text analytics for police-misconduct incident narratives", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // ===== Setup =====
    Init {
        #[arg(long, help = "Generate .blotter.json config file")]
        config: bool,
        #[arg(long, help = "Path to corpus file (default: narratives.json)")]
        corpus: Option<String>,
    },

    // ===== Reports =====
    /// Corpus load statistics and token summary
    Status {
        #[arg(long, help = "Corpus JSON file (overrides config)")]
        input: Option<PathBuf>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Tag narratives against the keyword taxonomy
    Tag {
        #[arg(long, help = "Corpus JSON file (overrides config)")]
        input: Option<PathBuf>,
        #[arg(long, help = "Taxonomy JSON/YAML file (overrides built-in)")]
        taxonomy: Option<PathBuf>,
        #[arg(
            short,
            long,
            default_value = "0",
            help = "Example narratives to show per row"
        )]
        examples: usize,
        #[arg(long, help = "Markdown table output")]
        markdown: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Most common words, bigrams, and trigrams
    #[command(alias = "freq")]
    Frequencies {
        #[arg(long, help = "Corpus JSON file (overrides config)")]
        input: Option<PathBuf>,
        #[arg(long, help = "Rows per table (default: config top_n)")]
        top: Option<usize>,
        #[arg(long, help = "Markdown table output")]
        markdown: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Inspect or validate the keyword taxonomy
    Taxonomy {
        #[command(subcommand)]
        action: Option<TaxonomyAction>,
    },
}

/// Taxonomy subcommands
#[derive(Subcommand)]
enum TaxonomyAction {
    /// List categories, rule counts, and labels (default)
    List {
        #[arg(long, help = "Taxonomy JSON/YAML file (overrides built-in)")]
        file: Option<PathBuf>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Validate that every pattern compiles
    Check {
        #[arg(long, help = "Taxonomy JSON/YAML file (overrides built-in)")]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { config, corpus } => commands::init::run(config, corpus),
        Commands::Status { input, json } => commands::status::run(input.as_deref(), json),
        Commands::Tag {
            input,
            taxonomy,
            examples,
            markdown,
            json,
        } => commands::tag::run(
            input.as_deref(),
            taxonomy.as_deref(),
            examples,
            markdown,
            json,
        ),
        Commands::Frequencies {
            input,
            top,
            markdown,
            json,
        } => commands::frequencies::run(input.as_deref(), top, markdown, json),
        Commands::Taxonomy { action } => match action {
            None => commands::taxonomy::run_list(None, false),
            Some(TaxonomyAction::List { file, json }) => {
                commands::taxonomy::run_list(file.as_deref(), json)
            }
            Some(TaxonomyAction::Check { file }) => commands::taxonomy::run_check(file.as_deref()),
        },
    }
}
