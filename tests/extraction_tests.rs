//! Integration tests for the entry extraction engine.
//!
//! These exercise the engine over realistic OCR-shaped catalog text rather
//! than hand-centered windows.

use cce_search::extract::{extract_entries, SearchTerm};

/// A plausible slice of an OCR'd catalog volume: headings, entries closed
/// by registration numbers, blank-line separators, and noise.
const CATALOG_PAGE: &str = "\
CATALOG OF COPYRIGHT ENTRIES

CURRENT REGISTRATIONS

Good day. Performed by Lighthouse.
Polydor PD-6028. Phonodisc
Appl. au: Polydor, Inc.
Polydor, Inc.; 27Aug71; N18787.

One fine morning. Performed by Lighthouse.
Evolution 1096. Phonodisc.
Appl. au: Stereo Dimension Records.
Stereo Dimension Records; 15Sep71; N24124.

Unrelated song, w and m by Someone Else.
Someone Else Music; 30Oct71; EU287654.


Take it easy. Performed by another band entirely.
Nobody Records; 01Nov71; N30001.
";

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
}

#[test]
fn finds_every_entry_mentioning_the_term() {
    let term = SearchTerm::new("Lighthouse").unwrap();
    let result = extract_entries(lines(CATALOG_PAGE), &term, 1971, "book").unwrap();

    assert_eq!(result.entries.len(), 2);
    assert!(result.entries[0].contains("Good day. Performed by Lighthouse."));
    assert!(result.entries[0].ends_with("N18787."));
    assert!(result.entries[1].contains("One fine morning. Performed by Lighthouse."));
    assert!(result.entries[1].ends_with("N24124."));
}

#[test]
fn entries_do_not_bleed_into_neighbours() {
    let term = SearchTerm::new("Lighthouse").unwrap();
    let result = extract_entries(lines(CATALOG_PAGE), &term, 1971, "book").unwrap();

    for entry in &result.entries {
        assert!(!entry.contains("Unrelated song"), "bled entry: {entry}");
        assert!(!entry.contains("Take it easy"), "bled entry: {entry}");
    }
    // The second entry must not drag the first one's tail along.
    assert!(!result.entries[1].contains("N18787."));
}

#[test]
fn absent_term_yields_no_result() {
    let term = SearchTerm::new("Chick Corea").unwrap();
    assert!(extract_entries(lines(CATALOG_PAGE), &term, 1971, "book").is_none());
}

#[test]
fn matching_is_case_insensitive() {
    let term = SearchTerm::new("LIGHTHOUSE").unwrap();
    let result = extract_entries(lines(CATALOG_PAGE), &term, 1971, "book").unwrap();
    assert_eq!(result.entries.len(), 2);
}

#[test]
fn every_entry_contains_the_term() {
    let term = SearchTerm::new("Lighthouse").unwrap();
    let result = extract_entries(lines(CATALOG_PAGE), &term, 1971, "book").unwrap();
    for entry in &result.entries {
        assert!(entry.to_lowercase().contains("lighthouse"));
    }
}

#[test]
fn extraction_is_deterministic() {
    let term = SearchTerm::new("Lighthouse").unwrap();
    let first = extract_entries(lines(CATALOG_PAGE), &term, 1971, "book");
    let second = extract_entries(lines(CATALOG_PAGE), &term, 1971, "book");
    assert_eq!(first, second);
}

#[test]
fn no_exact_duplicates_recorded() {
    // The same registration printed twice in one volume (it happens in the
    // scans) is reported once.
    let doubled = format!("{}\n\n{}", CATALOG_PAGE, CATALOG_PAGE);
    let term = SearchTerm::new("Lighthouse").unwrap();
    let result = extract_entries(doubled.lines(), &term, 1971, "book").unwrap();

    let mut unique = result.entries.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), result.entries.len());
}

#[test]
fn year_and_book_pass_through_unchanged() {
    let term = SearchTerm::new("Lighthouse").unwrap();
    let result = extract_entries(
        lines(CATALOG_PAGE),
        &term,
        1971,
        "https://archive.org/download/catalogofco1971_djvu.txt",
    )
    .unwrap();
    assert_eq!(result.year, 1971);
    assert_eq!(
        result.book,
        "https://archive.org/download/catalogofco1971_djvu.txt"
    );
}

#[test]
fn trailing_entry_at_end_of_document_is_found() {
    // No lines follow the entry at all; the drain must carry it through
    // the center.
    let tail_only = "\
Good day. Performed by Lighthouse.
Polydor PD-6028. Phonodisc
Appl. au: Polydor, Inc.
Polydor, Inc.; 27Aug71; N18787.";
    let term = SearchTerm::new("Lighthouse").unwrap();
    let result = extract_entries(tail_only.lines(), &term, 1971, "book").unwrap();
    assert_eq!(
        result.entries,
        vec![
            "Good day. Performed by Lighthouse. Polydor PD-6028. Phonodisc \
             Appl. au: Polydor, Inc. Polydor, Inc.; 27Aug71; N18787."
        ]
    );
}
