//! Core data structures.

mod result;

pub use result::{sort_results, DocumentResult, InvalidYearRange, YearRange};
