//! Per-document extraction driver.

use std::collections::HashSet;

use super::classifier::{classify, SearchTerm};
use super::window::{LineWindow, CENTER};
use crate::models::DocumentResult;

/// Run the boundary classifier over a document's lines and collect every
/// distinct entry mentioning the term.
///
/// Lines are consumed strictly in document order, one at a time; memory is
/// bounded by the window regardless of document length. After the stream is
/// exhausted the window is drained with empty lines so trailing lines still
/// pass through the center. Dedup is exact-string only: overlapping spans of
/// the same physical entry produced one line apart are not merged, only
/// byte-identical repeats are suppressed.
///
/// Returns `None` when no entry matched, so callers never aggregate empty
/// documents.
pub fn extract_entries<I>(
    lines: I,
    term: &SearchTerm,
    year: u16,
    book: &str,
) -> Option<DocumentResult>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut window = LineWindow::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries: Vec<String> = Vec::new();

    let mut record = |window: &LineWindow, seen: &mut HashSet<String>, entries: &mut Vec<String>| {
        if let Some(candidate) = classify(window, term) {
            if seen.insert(candidate.clone()) {
                entries.push(candidate);
            }
        }
    };

    for line in lines {
        window.push(line.as_ref());
        record(&window, &mut seen, &mut entries);
    }
    // Drain: trailing lines have not reached the center yet.
    for _ in 0..CENTER {
        window.push("");
        record(&window, &mut seen, &mut entries);
    }

    if entries.is_empty() {
        None
    } else {
        Some(DocumentResult {
            year,
            book: book.to_string(),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLYDOR_ENTRY: [&str; 4] = [
        "Good day. Performed by Lighthouse.",
        "Polydor PD-6028. Phonodisc",
        "Appl. au: Polydor, Inc.",
        "Polydor, Inc.; 27Aug71; N18787.",
    ];

    fn term(s: &str) -> SearchTerm {
        SearchTerm::new(s).unwrap()
    }

    #[test]
    fn test_no_occurrences_yields_none() {
        let lines = ["nothing here", "or here", "", "still nothing"];
        assert!(extract_entries(lines, &term("Lighthouse"), 1971, "book").is_none());
    }

    #[test]
    fn test_short_document_is_fully_extracted() {
        let result = extract_entries(POLYDOR_ENTRY, &term("Lighthouse"), 1971, "book").unwrap();
        assert_eq!(result.year, 1971);
        assert_eq!(result.book, "book");
        assert_eq!(
            result.entries,
            vec![
                "Good day. Performed by Lighthouse. Polydor PD-6028. Phonodisc \
                 Appl. au: Polydor, Inc. Polydor, Inc.; 27Aug71; N18787."
            ]
        );
    }

    #[test]
    fn test_two_separated_entries_in_document_order() {
        let mut lines: Vec<&str> = vec![
            "Lighthouse lullaby; w and m by A. Author.",
            "A. Author; 01Jan70; EU100001.",
        ];
        lines.extend(["", "", "unrelated entry text", "Someone Else; 02Feb70; EU100002.", "", ""]);
        lines.extend([
            "Return of the Lighthouse; arr. B. Brown.",
            "B. Brown; 03Mar70; EU100003.",
        ]);
        let result = extract_entries(lines, &term("Lighthouse"), 1970, "book").unwrap();
        assert_eq!(result.entries.len(), 2);
        assert!(result.entries[0].starts_with("Lighthouse lullaby"));
        assert!(result.entries[1].starts_with("Return of the Lighthouse"));
        assert_ne!(result.entries[0], result.entries[1]);
    }

    #[test]
    fn test_every_entry_contains_the_term() {
        let mut lines: Vec<String> = Vec::new();
        for i in 0..50 {
            if i % 7 == 0 {
                lines.push(format!("Song {} for the lighthouse keeper.", i));
                lines.push(format!("Publisher {}; 01Jan71; EU{:06}.", i, 100000 + i));
            } else {
                lines.push(format!("Filler line {} with no match.", i));
            }
            lines.push(String::new());
            lines.push(String::new());
        }
        let result = extract_entries(&lines, &term("Lighthouse"), 1971, "book").unwrap();
        assert!(!result.entries.is_empty());
        for entry in &result.entries {
            assert!(entry.to_lowercase().contains("lighthouse"), "entry: {entry}");
        }
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let lines: Vec<&str> = POLYDOR_ENTRY.to_vec();
        let first = extract_entries(lines.clone(), &term("Lighthouse"), 1971, "book");
        let second = extract_entries(lines, &term("Lighthouse"), 1971, "book");
        assert_eq!(first, second);
    }

    #[test]
    fn test_identical_repeats_are_suppressed() {
        // The same physical entry appears twice, byte for byte.
        let mut lines: Vec<&str> = POLYDOR_ENTRY.to_vec();
        lines.extend(["", ""]);
        lines.extend(POLYDOR_ENTRY);
        let result = extract_entries(lines, &term("Lighthouse"), 1971, "book").unwrap();
        assert_eq!(result.entries.len(), 1);
    }

    #[test]
    fn test_no_duplicate_strings_in_result() {
        let mut lines: Vec<String> = Vec::new();
        for _ in 0..5 {
            for line in POLYDOR_ENTRY {
                lines.push(line.to_string());
            }
            lines.push(String::new());
            lines.push(String::new());
        }
        let result = extract_entries(&lines, &term("Lighthouse"), 1971, "book").unwrap();
        let mut sorted = result.entries.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), result.entries.len());
    }
}
