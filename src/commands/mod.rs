//! CLI subcommand implementations

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use blotter::core::config::{get_data_root, Config};
use blotter::core::corpus::Corpus;
use blotter::tags::Taxonomy;

pub mod frequencies;
pub mod init;
pub mod status;
pub mod tag;
pub mod taxonomy;

/// Resolve the corpus path: explicit flag, else config, else default.
pub(crate) fn resolve_corpus_path(input: Option<&Path>) -> PathBuf {
    match input {
        Some(path) => path.to_path_buf(),
        None => {
            let root = get_data_root();
            let config = Config::load(&root);
            config.corpus_path(&root)
        }
    }
}

pub(crate) fn load_corpus(input: Option<&Path>) -> Result<Corpus> {
    Corpus::load(&resolve_corpus_path(input))
}

/// Resolve the taxonomy: explicit flag, else config override, else built-in.
pub(crate) fn load_taxonomy(file: Option<&Path>) -> Result<Taxonomy> {
    if let Some(path) = file {
        return Taxonomy::from_file(path);
    }

    let root = get_data_root();
    let config = Config::load(&root);
    match config.taxonomy.path {
        Some(path) => Taxonomy::from_file(&root.join(path)),
        None => Ok(Taxonomy::builtin()),
    }
}

/// Empty corpora are surfaced, not silently reported as zero rows.
pub(crate) fn ensure_not_empty(corpus: &Corpus, path_hint: Option<&Path>) -> Result<()> {
    if corpus.is_empty() {
        let shown = resolve_corpus_path(path_hint);
        bail!(
            "corpus {} contains no usable records (all entries null, blank, or missing)",
            shown.display()
        );
    }
    Ok(())
}
