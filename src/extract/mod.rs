//! The entry extraction engine.
//!
//! Locates every catalog entry mentioning a search term inside a noisy,
//! OCR-derived plain-text volume. A fixed-size [`LineWindow`] slides over
//! the document; for each position the [`classify`] function tests the
//! center line against the term and, on a match, infers the enclosing
//! entry's boundaries from local heuristics ([`classifier`]). The
//! [`extract_entries`] driver feeds the window, deduplicates candidates,
//! and finalizes a per-document result.
//!
//! This layer is pure: no I/O, no shared state. The compiled [`SearchTerm`]
//! is passed in explicitly so documents can be processed concurrently.

mod classifier;
mod engine;
mod window;

pub use classifier::{classify, ends_entry, SearchTerm, TermError};
pub use engine::extract_entries;
pub use window::{LineWindow, CENTER, WINDOW_SIZE};
