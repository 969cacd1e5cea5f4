//! Boundary classification for catalog entries.
//!
//! OCR'd catalog volumes have no reliable structural markers. An entry is
//! delimited only by fragile textual conventions: the registration-number
//! token that conventionally closes an entry, and blank-line run patterns
//! between entries. The classifier infers both boundaries from the local
//! window around a matched line.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use super::window::{LineWindow, CENTER, WINDOW_SIZE};

/// Errors from compiling a search term.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// The term was empty or whitespace-only
    #[error("Search term must not be empty")]
    Empty,

    /// The escaped term failed to compile (should not happen in practice)
    #[error("Failed to compile search term: {0}")]
    Compile(#[from] regex::Error),
}

/// A user-supplied search term compiled into a case-insensitive matcher.
///
/// The term is escaped before compilation, so it always matches as literal
/// text even when it contains regex metacharacters. Immutable for the run;
/// shared read-only across documents.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    raw: String,
    pattern: Regex,
}

impl SearchTerm {
    pub fn new(term: &str) -> Result<Self, TermError> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(TermError::Empty);
        }
        let pattern = RegexBuilder::new(&regex::escape(trimmed))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            raw: trimmed.to_string(),
            pattern,
        })
    }

    /// The original (trimmed) term text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring test.
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Registration-number suffix convention: a trimmed line ending in a class
/// code of 1-3 uppercase letters, 4-7 digits, and a terminal period
/// (e.g. "N18787.", "EU123456.", "R123456.") plausibly closes an entry.
fn entry_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[A-Z]{1,3}[0-9]{4,7}\.$").expect("valid entry-id pattern"))
}

/// Whether a line plausibly ends a catalog entry.
pub fn ends_entry(line: &str) -> bool {
    entry_id_pattern().is_match(line.trim())
}

fn is_blank(window: &LineWindow, index: usize) -> bool {
    window.line(index).trim().is_empty()
}

/// Backward boundary search: nearest preceding boundary signal wins, with
/// the entry-id rule taking precedence over the blank-run rules at any
/// given index. The entry-id test starts one line above the center, since
/// an entry-id at the center closes the current entry rather than a prior
/// one. Falls back to the oldest line in the window.
fn find_start(window: &LineWindow) -> usize {
    for i in (0..CENTER).rev() {
        // A registration number here means a prior entry ends at i.
        if ends_entry(window.line(i)) {
            return i + 1;
        }
        // Two-blank-line run separating entries.
        if CENTER - i >= 2 && is_blank(window, i) && is_blank(window, i + 1) {
            return i + 2;
        }
        // Blank/content/blank sandwich: a short heading preceding the entry.
        if CENTER - i >= 3
            && is_blank(window, i)
            && !is_blank(window, i + 1)
            && is_blank(window, i + 2)
        {
            return i + 1;
        }
    }
    0
}

/// Forward boundary search: the entry ends at the first registration-number
/// line at or after the center, or just before a two-blank-line run. Falls
/// back to the newest line in the window.
fn find_end(window: &LineWindow) -> usize {
    for j in CENTER..WINDOW_SIZE {
        if ends_entry(window.line(j)) {
            return j;
        }
        if j - CENTER >= 2 && is_blank(window, j - 1) && is_blank(window, j) {
            return j - 2;
        }
    }
    WINDOW_SIZE - 1
}

/// Decide whether the window currently centers a term match and, if so,
/// extract the enclosing entry as a trimmed, space-joined string.
pub fn classify(window: &LineWindow, term: &SearchTerm) -> Option<String> {
    if !term.matches(window.center_line()) {
        return None;
    }
    let start = find_start(window);
    let end = find_end(window);
    Some(window.join_span(start, end))
}
