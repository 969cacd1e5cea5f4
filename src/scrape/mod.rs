//! Fetching and resolving catalog pages.
//!
//! The year index at `/cce/` links to one landing page per year; each
//! landing page lists the scanned volumes under its Music and Sound
//! Recordings headings; each volume's landing page links to a plain-text
//! rendition of the OCR'd scan. This module turns that chain into
//! normalized text bodies ready for the extraction engine, going through
//! the [`BookCache`](crate::utils::BookCache) so a volume is only ever
//! downloaded once.

mod book;
mod index;

pub use book::{file_name_from_path, normalize_body, source_url_from_body, text_path_from_landing};
pub use index::{category_book_urls, year_file_from_index};

use url::Url;

use crate::utils::{with_retry, HttpClient, RetryConfig};

/// Errors that can occur while fetching or resolving catalog pages
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Non-success HTTP status
    #[error("HTTP status {status} for {url}")]
    Http { status: u16, url: String },

    /// URL or HTML could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// The year index has no link for the requested year
    #[error("No year link found for {0}")]
    MissingYearLink(u16),

    /// A book landing page has no plain-text download link
    #[error("No plain-text link on landing page: {0}")]
    MissingTextLink(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// Whether a retry could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ScrapeError::Network(_) | ScrapeError::Timeout => true,
            ScrapeError::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScrapeError::Timeout
        } else {
            ScrapeError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ScrapeError {
    fn from(err: url::ParseError) -> Self {
        ScrapeError::Parse(format!("URL: {}", err))
    }
}

/// HTTP access to the catalog index and the volume hosts.
///
/// Every fetch goes through [`with_retry`], so transient failures
/// (timeouts, 429s, 5xx) are absorbed here and callers only see errors
/// worth skipping a document over.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
    base: Url,
    retry: RetryConfig,
}

impl CatalogClient {
    pub fn new(http: HttpClient, base: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            http,
            base: Url::parse(base)?,
            retry: RetryConfig::default(),
        })
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// GET a page, following redirects; returns the final URL and body
    async fn fetch(&self, url: Url) -> Result<(Url, String), ScrapeError> {
        let http = self.http.clone();
        let target = url.clone();
        with_retry(self.retry, move || {
            let http = http.clone();
            let url = target.clone();
            async move {
                let response = http.get(url.as_str()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ScrapeError::Http {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                let final_url = response.url().clone();
                let body = response.text().await?;
                Ok((final_url, body))
            }
        })
        .await
    }

    /// The landing page listing one link per catalog year
    pub async fn year_index(&self) -> Result<String, ScrapeError> {
        let url = self.base.join("/cce/")?;
        let (_, body) = self.fetch(url).await?;
        Ok(body)
    }

    /// A single year's landing page, linked from the index as `file`
    pub async fn year_landing(&self, file: &str) -> Result<String, ScrapeError> {
        let url = self.base.join("/cce/")?.join(file)?;
        let (_, body) = self.fetch(url).await?;
        Ok(body)
    }

    /// A volume's landing page; the final URL is kept so the plain-text
    /// path can be resolved against the host that actually served it
    pub async fn book_landing(&self, url: &str) -> Result<(Url, String), ScrapeError> {
        let url = match Url::parse(url) {
            Ok(absolute) => absolute,
            Err(url::ParseError::RelativeUrlWithoutBase) => self.base.join(url)?,
            Err(e) => return Err(e.into()),
        };
        self.fetch(url).await
    }

    /// The plain-text rendition linked from a volume's landing page
    pub async fn book_text(
        &self,
        landing_url: &Url,
        txt_path: &str,
    ) -> Result<(Url, String), ScrapeError> {
        let url = landing_url.join(txt_path)?;
        self.fetch(url).await
    }
}
