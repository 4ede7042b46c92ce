//! Corpus loading and configuration.

pub mod config;
pub mod corpus;

pub use config::{get_data_root, Config};
pub use corpus::{Corpus, LoadStats};
