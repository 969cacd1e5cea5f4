//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Request settings
    #[serde(default)]
    pub request: RequestConfig,

    /// Default year limits
    #[serde(default)]
    pub years: YearsConfig,

    /// Book body cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Concurrency limits
    #[serde(default)]
    pub concurrency: ConcurrencyConfig,
}

/// Request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Host serving the catalog year index
    #[serde(default = "default_host")]
    pub host: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_host() -> String {
    "onlinebooks.library.upenn.edu".to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Year limits applied when the CLI does not override them. The scanned
/// catalogs run from the 1891 series through the 1977 volumes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearsConfig {
    #[serde(default = "default_min_year")]
    pub min: u16,

    #[serde(default = "default_max_year")]
    pub max: u16,
}

impl Default for YearsConfig {
    fn default() -> Self {
        Self {
            min: default_min_year(),
            max: default_max_year(),
        }
    }
}

fn default_min_year() -> u16 {
    1946
}

fn default_max_year() -> u16 {
    1977
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether caching is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Cache directory (platform cache dir by default)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Concurrency configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConcurrencyConfig {
    /// Maximum books fetched and searched at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_books: usize,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            max_concurrent_books: default_max_concurrent(),
        }
    }
}

fn default_max_concurrent() -> usize {
    8
}

/// Default directory for cached book bodies
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cce-search")
        .join("books")
}

/// Locate a configuration file: an explicit path wins, then
/// `./cce-search.toml`, then the platform config directory.
pub fn find_config_file(explicit: Option<&PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.clone());
    }
    let local = PathBuf::from("cce-search.toml");
    if local.exists() {
        return Some(local);
    }
    let global = dirs::config_dir()?.join("cce-search").join("config.toml");
    global.exists().then_some(global)
}

/// Load configuration from a file, with `CCE_SEARCH_`-prefixed environment
/// variables layered on top
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("CCE_SEARCH").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration
pub fn get_config() -> Config {
    Config::default()
}
