use anyhow::{Context, Result};
use cce_search::config::{find_config_file, get_config, load_config, Config};
use cce_search::extract::SearchTerm;
use cce_search::models::{DocumentResult, YearRange};
use cce_search::run::Searcher;
use cce_search::ui;
use cce_search::utils::BookCache;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CCE Search - Find catalog entries mentioning a term in the scanned
/// Catalog of Copyright Entries volumes, grouped by year
#[derive(Parser, Debug)]
#[command(name = "cce-search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search the Catalog of Copyright Entries for a term, grouped by year", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalogs for a term
    #[command(alias = "s")]
    Search {
        /// Search term (matched literally, case-insensitive)
        term: String,

        /// Lowest catalog year to search (config default otherwise)
        #[arg(long)]
        min_year: Option<u16>,

        /// Highest catalog year to search (config default otherwise)
        #[arg(long)]
        max_year: Option<u16>,

        /// Fetch every book fresh instead of using the local cache
        #[arg(long, default_value_t = false)]
        no_cache: bool,
    },

    /// Manage the local book cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand, Debug)]
enum CacheCommands {
    /// Show cache location and size
    Stats,
    /// Delete all cached book bodies
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("cce_search={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match find_config_file(cli.config.as_ref()) {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => get_config(),
    };

    match cli.command {
        Commands::Search {
            term,
            min_year,
            max_year,
            no_cache,
        } => {
            let term = SearchTerm::new(&term)?;
            let years = YearRange::new(
                min_year.unwrap_or(config.years.min),
                max_year.unwrap_or(config.years.max),
            )?;
            let searcher = Searcher::from_config(&config, !no_cache)?;
            let results = searcher.search(&term, years).await?;
            print_results(&results, cli.output)?;
        }
        Commands::Cache { command } => run_cache_command(&config, command)?,
    }

    Ok(())
}

fn run_cache_command(config: &Config, command: CacheCommands) -> Result<()> {
    let cache = BookCache::from_config(&config.cache);
    match command {
        CacheCommands::Stats => {
            let stats = cache.stats();
            if stats.enabled {
                println!("Cache directory: {}", stats.cache_dir.display());
                println!("Cached books:    {}", stats.book_count);
                println!("Total size:      {} KB", stats.total_size_kb);
            } else {
                println!("Cache is disabled");
            }
        }
        CacheCommands::Clear => {
            cache.clear().context("Failed to clear cache")?;
            println!("Cache cleared");
        }
    }
    Ok(())
}

fn print_results(results: &[DocumentResult], format: OutputFormat) -> Result<()> {
    let actual_format = if format == OutputFormat::Auto {
        if ui::is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    };

    if results.is_empty() {
        eprintln!("No entries found");
        return Ok(());
    }

    match actual_format {
        OutputFormat::Table => println!("{}", ui::render_table(results)),
        OutputFormat::Json => println!("{}", ui::render_json(results)?),
        OutputFormat::Plain => print!("{}", ui::render_plain(results, ui::is_terminal())),
        OutputFormat::Auto => unreachable!(),
    }
    Ok(())
}
