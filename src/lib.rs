//! # CCE Search
//!
//! Searches the scanned *Catalog of Copyright Entries* volumes for every
//! bibliographic entry mentioning a term, grouped by publication year. The
//! volumes are noisy OCR renditions with no structural markers, so entry
//! boundaries are inferred heuristically from a sliding window of lines.
//!
//! ## Architecture
//!
//! - [`extract`]: the entry extraction engine (sliding window, boundary
//!   classifier, per-document dedup); pure, no I/O
//! - [`scrape`]: year index / category / book page resolution and fetching
//! - [`run`]: orchestration of a whole search run
//! - [`models`]: result data structures
//! - [`utils`]: HTTP client, body cache, retry
//! - [`config`]: configuration management
//! - [`ui`]: terminal output rendering

pub mod config;
pub mod extract;
pub mod models;
pub mod run;
pub mod scrape;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use extract::{extract_entries, SearchTerm};
pub use models::{DocumentResult, YearRange};
pub use run::Searcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
