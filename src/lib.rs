//! # blotter: batch text analytics for misconduct incident narratives
//!
//! Offline analysis over a corpus of free-text narratives describing
//! police-misconduct incidents. Every operation is a single linear pass:
//! load a static JSON corpus, run the analysis, emit a flat report.
//!
//! The core is the keyword tagger: a category → (pattern, label) taxonomy
//! scanned against every record, producing per-(category, label) match
//! counts with example narratives. Around it sit corpus loading with
//! cleanup statistics and descriptive word/n-gram frequency tables.
//!
//! ## Example
//!
//! ```rust
//! use blotter::tags::{tag, Taxonomy};
//!
//! let corpus = vec![
//!     "The officer drew his gun and shot the man".to_string(),
//!     "She felt terrified and started crying".to_string(),
//! ];
//!
//! let report = tag(&corpus, &Taxonomy::builtin()).unwrap();
//! for row in &report.rows {
//!     println!("{} / {}: {}", row.category, row.label, row.count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: corpus loading and configuration
//! - [`tags`]: taxonomy and the keyword tagger
//! - [`analysis`]: tokenization and frequency tables
//! - [`report`]: Markdown rendering

pub mod analysis;
pub mod core;
pub mod error;
pub mod report;
pub mod tags;

pub use crate::core::corpus::Corpus;
pub use error::TagError;
pub use tags::{tag, TagReport, Taxonomy};
