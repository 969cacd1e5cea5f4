//! Year index and category link resolution.

use scraper::{ElementRef, Html, Selector};

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

/// Find the per-year landing page link on the year index: the first
/// `ul li a` whose text mentions the year.
pub fn year_file_from_index(html: &str, year: u16) -> Option<String> {
    let doc = Html::parse_document(html);
    let needle = year.to_string();
    doc.select(&sel("ul li a"))
        .find(|a| a.text().collect::<String>().contains(&needle))
        .and_then(|a| a.value().attr("href").map(str::to_string))
}

/// Collect the book landing URLs listed under a year's Music and Sound
/// Recordings headings. Either category may be absent; the Music heading
/// is found as `h2#music` with a fallback to the `h2` enclosing
/// `a[name=music]`, Sound Recordings via `a[name=sound]`.
pub fn category_book_urls(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let mut headings: Vec<ElementRef> = Vec::new();

    if let Some(heading) = doc.select(&sel("h2#music")).next() {
        headings.push(heading);
    } else if let Some(heading) = heading_enclosing_anchor(&doc, "a[name=music]") {
        headings.push(heading);
    }
    if let Some(heading) = heading_enclosing_anchor(&doc, "a[name=sound]") {
        headings.push(heading);
    }

    headings
        .into_iter()
        .flat_map(|heading| books_after_heading(heading))
        .collect()
}

/// The `h2` ancestor of the first element matching `anchor`.
fn heading_enclosing_anchor<'a>(doc: &'a Html, anchor: &str) -> Option<ElementRef<'a>> {
    let element = doc.select(&sel(anchor)).next()?;
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "h2")
}

/// First `a` href of each `li` in the `ul` following a category heading.
fn books_after_heading(heading: ElementRef) -> Vec<String> {
    let Some(list) = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "ul")
    else {
        return Vec::new();
    };

    let anchor = sel("a");
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "li")
        .filter_map(|li| {
            li.select(&anchor)
                .next()
                .and_then(|a| a.value().attr("href").map(str::to_string))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_HTML: &str = r#"
        <html><body>
        <ul>
          <li><a href="1966r.html">1966 registrations</a></li>
          <li><a href="1967r.html">1967 registrations</a></li>
        </ul>
        </body></html>
    "#;

    #[test]
    fn test_year_link_by_text() {
        assert_eq!(
            year_file_from_index(INDEX_HTML, 1967),
            Some("1967r.html".to_string())
        );
        assert_eq!(year_file_from_index(INDEX_HTML, 1980), None);
    }

    #[test]
    fn test_music_heading_by_id() {
        let html = r#"
            <h2 id="music">Music</h2>
            <ul>
              <li><a href="https://archive.org/details/bookA">Part 1</a></li>
              <li><a href="https://archive.org/details/bookB">Part 2</a></li>
            </ul>
        "#;
        assert_eq!(
            category_book_urls(html),
            vec![
                "https://archive.org/details/bookA".to_string(),
                "https://archive.org/details/bookB".to_string(),
            ]
        );
    }

    #[test]
    fn test_music_heading_by_named_anchor_fallback() {
        let html = r#"
            <h2><a name="music"></a>Music</h2>
            <ul>
              <li><a href="https://archive.org/details/bookC">Part 1</a></li>
            </ul>
        "#;
        assert_eq!(
            category_book_urls(html),
            vec!["https://archive.org/details/bookC".to_string()]
        );
    }

    #[test]
    fn test_both_categories_collected_in_order() {
        let html = r#"
            <h2 id="music">Music</h2>
            <ul><li><a href="https://archive.org/details/music1">M</a></li></ul>
            <h2><a name="sound"></a>Sound Recordings</h2>
            <ul><li><a href="https://archive.org/details/sound1">S</a></li></ul>
        "#;
        assert_eq!(
            category_book_urls(html),
            vec![
                "https://archive.org/details/music1".to_string(),
                "https://archive.org/details/sound1".to_string(),
            ]
        );
    }

    #[test]
    fn test_year_without_categories_yields_nothing() {
        let html = "<h2>Dramas</h2><ul><li><a href=\"x\">X</a></li></ul>";
        assert!(category_book_urls(html).is_empty());
    }

    #[test]
    fn test_only_first_anchor_per_item() {
        let html = r#"
            <h2 id="music">Music</h2>
            <ul><li><a href="primary">scan</a> (<a href="secondary">mirror</a>)</li></ul>
        "#;
        assert_eq!(category_book_urls(html), vec!["primary".to_string()]);
    }
}
