use thiserror::Error;

/// Error type for taxonomy construction and tagging failures.
///
/// All variants are detected synchronously, before any record is scanned.
/// There is no transient failure mode and nothing is retried.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("invalid pattern '{pattern}' in category '{category}': {source}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("taxonomy has no categories")]
    EmptyTaxonomy,
    #[error("category '{0}' has no rules")]
    EmptyCategory(String),
    #[error("corpus is empty, nothing to tag")]
    EmptyCorpus,
}
