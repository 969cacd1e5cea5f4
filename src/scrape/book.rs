//! Book landing pages and text body normalization.
//!
//! The extraction engine only ever sees the normalized body produced
//! here: the volume title on the first line, the source URL on the
//! second, then the OCR text. Cached bodies are stored in exactly this
//! shape, so the engine cannot tell a cache hit from a network fetch.

use scraper::{Html, Selector};

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

/// The plain-text download link on a volume's landing page.
pub fn text_path_from_landing(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    doc.select(&sel(r#".download-pill[href*=".txt"]"#))
        .next()
        .and_then(|a| a.value().attr("href").map(str::to_string))
}

/// Cache filename for a text path: its last segment.
pub fn file_name_from_path(path: &str) -> String {
    path.rsplit('/').next().unwrap_or_default().to_string()
}

/// Build the normalized body from the raw text page: title line, source
/// URL line, then the text of every `pre` block.
pub fn normalize_body(html: &str, source_url: &str) -> String {
    let doc = Html::parse_document(html);
    let title: String = doc
        .select(&sel("title"))
        .next()
        .map(|t| t.text().collect())
        .unwrap_or_default();
    let text: String = doc
        .select(&sel("pre"))
        .map(|p| p.text().collect::<String>())
        .collect();
    format!("{}\n{}\n{}", title.trim(), source_url, text)
}

/// The source URL recorded on a normalized body's second line.
pub fn source_url_from_body(body: &str) -> &str {
    body.lines().nth(1).unwrap_or_default()
}
