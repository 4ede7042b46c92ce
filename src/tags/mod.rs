//! Keyword tagging module
//!
//! Scans narrative records against a category → rules taxonomy and builds
//! a per-(category, label) match report.
//!
//! # Components
//!
//! - `seeds`: the built-in keyword taxonomy
//! - `taxonomy`: taxonomy construction, validation, file loading
//! - `tagger`: the scanning pass and report builder

pub mod seeds;
pub mod tagger;
pub mod taxonomy;

pub use seeds::SEED_CATEGORIES;
pub use tagger::{tag, ReportRow, TagReport, MAX_EXAMPLES};
pub use taxonomy::{Category, CategoryDef, Rule, RuleDef, Taxonomy};
