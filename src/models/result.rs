//! Search result models.

use serde::{Deserialize, Serialize};

/// All entries found for one search term in one catalog volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Publication year the volume covers
    pub year: u16,

    /// Source reference for the volume (the plain-text body's URL)
    pub book: String,

    /// Distinct matching entries, in discovery order within the volume
    pub entries: Vec<String>,
}

/// Sort results by `(year, book)` so the final report is reproducible no
/// matter in which order concurrently processed documents finished.
pub fn sort_results(results: &mut [DocumentResult]) {
    results.sort_by(|a, b| (a.year, a.book.as_str()).cmp(&(b.year, b.book.as_str())));
}

/// Inclusive range of catalog years to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: u16,
    pub max: u16,
}

/// The upper year limit was below the lower one.
#[derive(Debug, thiserror::Error)]
#[error("Upper year limit must be greater or equal to lower year limit")]
pub struct InvalidYearRange;

impl YearRange {
    /// Build a validated range; `max` must not be below `min`.
    pub fn new(min: u16, max: u16) -> Result<Self, InvalidYearRange> {
        if max < min {
            return Err(InvalidYearRange);
        }
        Ok(Self { min, max })
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> {
        self.min..=self.max
    }
}
