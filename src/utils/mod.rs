//! Utility modules supporting the scrape and search pipeline:
//!
//! - [`BookCache`]: file-based cache of normalized book text bodies
//! - [`HttpClient`]: shared HTTP client with sensible defaults
//! - [`RetryConfig`] / [`with_retry`]: exponential backoff over transient
//!   fetch errors

mod cache;
mod http;
mod retry;

pub use cache::{BookCache, CacheStats};
pub use http::HttpClient;
pub use retry::{with_retry, RetryConfig};
