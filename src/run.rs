//! End-to-end search orchestration.
//!
//! Resolves the year index to a flat list of (year, book URL) jobs, then
//! fetches and searches the books with bounded concurrency. Each document
//! owns its own window and dedup set; results meet only at the final
//! collect-and-sort step, so arrival order never shows in the output. A
//! book that fails to resolve or fetch is skipped whole and logged, never
//! partially recorded.

use futures_util::stream::{self, StreamExt};

use crate::config::Config;
use crate::extract::{extract_entries, SearchTerm};
use crate::models::{sort_results, DocumentResult, YearRange};
use crate::scrape::{
    category_book_urls, file_name_from_path, normalize_body, source_url_from_body,
    text_path_from_landing, year_file_from_index, CatalogClient, ScrapeError,
};
use crate::utils::{BookCache, HttpClient};

/// Drives one search run over a year range.
#[derive(Debug, Clone)]
pub struct Searcher {
    client: CatalogClient,
    cache: BookCache,
    concurrency: usize,
}

impl Searcher {
    /// Build a searcher from configuration. `use_cache: false` forces
    /// every book to be fetched fresh.
    pub fn from_config(config: &Config, use_cache: bool) -> Result<Self, ScrapeError> {
        let http = HttpClient::with_user_agent(&config.request.user_agent);
        let client = CatalogClient::new(http, &format!("http://{}", config.request.host))?;
        let cache = if use_cache {
            BookCache::from_config(&config.cache)
        } else {
            BookCache::disabled()
        };
        Ok(Self::new(client, cache, config.concurrency.max_concurrent_books))
    }

    pub fn new(client: CatalogClient, cache: BookCache, concurrency: usize) -> Self {
        Self {
            client,
            cache,
            concurrency: concurrency.max(1),
        }
    }

    /// Search every Music / Sound Recordings volume in the year range for
    /// entries mentioning the term. Results come back sorted by
    /// `(year, book)`.
    pub async fn search(
        &self,
        term: &SearchTerm,
        years: YearRange,
    ) -> Result<Vec<DocumentResult>, ScrapeError> {
        self.cache.initialize()?;
        let index = self.client.year_index().await?;

        let mut jobs: Vec<(u16, String)> = Vec::new();
        for year in years.iter() {
            match self.books_for_year(&index, year).await {
                Ok(books) => jobs.extend(books.into_iter().map(|book| (year, book))),
                Err(e) => tracing::warn!("Skipping year {}: {}", year, e),
            }
        }
        tracing::info!(
            "Searching {} books across {}-{} for \"{}\"",
            jobs.len(),
            years.min,
            years.max,
            term.as_str()
        );

        let mut results: Vec<DocumentResult> = stream::iter(jobs)
            .map(|(year, book)| async move {
                match self.process_book(term, year, &book).await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!("Skipping book {} ({}): {}", book, year, e);
                        None
                    }
                }
            })
            .buffer_unordered(self.concurrency)
            .filter_map(|result| async move { result })
            .collect()
            .await;

        sort_results(&mut results);
        Ok(results)
    }

    /// The book landing URLs listed for one year.
    async fn books_for_year(&self, index_html: &str, year: u16) -> Result<Vec<String>, ScrapeError> {
        let file =
            year_file_from_index(index_html, year).ok_or(ScrapeError::MissingYearLink(year))?;
        let landing = self.client.year_landing(&file).await?;
        Ok(category_book_urls(&landing))
    }

    /// Fetch (or load from cache) one book's text body and extract its
    /// matching entries.
    async fn process_book(
        &self,
        term: &SearchTerm,
        year: u16,
        book_url: &str,
    ) -> Result<Option<DocumentResult>, ScrapeError> {
        let (landing_url, landing) = self.client.book_landing(book_url).await?;
        let txt_path = text_path_from_landing(&landing)
            .ok_or_else(|| ScrapeError::MissingTextLink(book_url.to_string()))?;
        let file_name = file_name_from_path(&txt_path);

        let body = match self.cache.get(&file_name) {
            Some(body) => {
                tracing::info!("loading {}, book {} from cache", year, file_name);
                body
            }
            None => {
                tracing::info!("requesting {}, book {}", year, file_name);
                let (text_url, html) = self.client.book_text(&landing_url, &txt_path).await?;
                let body = normalize_body(&html, text_url.as_str());
                self.cache.put(&file_name, &body);
                body
            }
        };

        let source = source_url_from_body(&body).to_string();
        Ok(extract_entries(body.lines(), term, year, &source))
    }
}
