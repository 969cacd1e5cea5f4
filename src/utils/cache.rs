//! Local caching of book text bodies.
//!
//! Fetched volumes run to several megabytes of OCR text and never change,
//! so each normalized body is kept as one plain-text file keyed by the
//! filename derived from its download path:
//!
//! ```text
//! ~/.cache/cce-search/books/
//!   catalogofco1967321512libr_djvu.txt
//!   1976soundrecordi33014libr_djvu.txt
//! ```
//!
//! The cached body is exactly what the scrape layer hands to the extraction
//! engine (title line, source URL line, then the volume text), so a cache
//! hit and a network fetch are indistinguishable downstream.

use crate::config::CacheConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based cache for normalized book bodies
#[derive(Debug, Clone)]
pub struct BookCache {
    /// Directory holding one file per book
    dir: PathBuf,

    /// Whether caching is enabled
    enabled: bool,
}

impl BookCache {
    /// Create a cache from configuration
    pub fn from_config(config: &CacheConfig) -> Self {
        let dir = config
            .directory
            .clone()
            .unwrap_or_else(crate::config::default_cache_dir);
        Self {
            dir,
            enabled: config.enabled,
        }
    }

    /// Create a disabled cache (every lookup misses, writes are dropped)
    pub fn disabled() -> Self {
        Self {
            dir: PathBuf::new(),
            enabled: false,
        }
    }

    /// Initialize the cache directory
    pub fn initialize(&self) -> std::io::Result<()> {
        if self.enabled {
            fs::create_dir_all(&self.dir)?;
            tracing::info!("Cache initialized at: {}", self.dir.display());
        } else {
            tracing::debug!("Cache is disabled");
        }
        Ok(())
    }

    /// Check if caching is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the cache directory
    pub fn cache_dir(&self) -> &Path {
        &self.dir
    }

    /// Look up a cached body by its derived filename
    pub fn get(&self, file_name: &str) -> Option<String> {
        if !self.enabled || file_name.is_empty() {
            return None;
        }
        match fs::read_to_string(self.dir.join(file_name)) {
            Ok(body) => {
                tracing::debug!("Cache HIT for book: {}", file_name);
                Some(body)
            }
            Err(_) => {
                tracing::debug!("Cache MISS for book: {}", file_name);
                None
            }
        }
    }

    /// Store a normalized body. A failed write is logged, never fatal.
    pub fn put(&self, file_name: &str, body: &str) {
        if !self.enabled || file_name.is_empty() {
            return;
        }
        if let Err(e) = fs::write(self.dir.join(file_name), body) {
            tracing::warn!("Failed to cache book {}: {}", file_name, e);
        } else {
            tracing::debug!("Cached book: {}", file_name);
        }
    }

    /// Remove all cached bodies
    pub fn clear(&self) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let _ = fs::remove_dir_all(&self.dir);
        self.initialize()?;
        tracing::info!("Cache cleared");
        Ok(())
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        if !self.enabled {
            return CacheStats::disabled();
        }

        let mut book_count = 0;
        let mut total_size = 0;
        if let Ok(entries) = self.dir.read_dir() {
            for entry in entries.flatten() {
                book_count += 1;
                total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
            }
        }

        CacheStats {
            enabled: true,
            cache_dir: self.dir.clone(),
            book_count,
            total_size_kb: total_size / 1024,
        }
    }
}

/// Statistics about the cache
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Whether caching is enabled
    pub enabled: bool,

    /// Cache directory path
    pub cache_dir: PathBuf,

    /// Number of cached books
    pub book_count: usize,

    /// Total size in KB
    pub total_size_kb: u64,
}

impl CacheStats {
    /// Return stats indicating cache is disabled
    fn disabled() -> Self {
        Self {
            enabled: false,
            cache_dir: PathBuf::new(),
            book_count: 0,
            total_size_kb: 0,
        }
    }
}
