use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use redditscrape_core::{ClientConfig, RedditScraper, ScrapeConfig};

#[derive(Parser, Debug)]
#[command(name = "redditscrape")]
#[command(about = "Reddit simple media scraper")]
#[command(version)]
struct Cli {
    /// Reddit user whose submissions are scraped
    username: String,

    /// Output directory (defaults to the directory containing this program)
    directory: Option<PathBuf>,

    /// Print progress and the final count without saving anything
    #[arg(long)]
    dry_run: bool,

    /// Filename prefix. Automatically hyphenates.
    #[arg(short, long)]
    prefix: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Listing endpoint host, for mirrors and local testing
    #[arg(long, default_value = redditscrape_core::url::DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // Keep HTTP plumbing quiet at debug/trace
    fn filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug,hyper=warn,hyper_util=warn,reqwest=warn",
            LogLevel::Trace => "trace,hyper=warn,hyper_util=warn,reqwest=warn",
        }
    }
}

/// Directory the executable lives in, or the working directory as a fallback
fn default_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_logging(level: LogLevel) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.filter()));

    // stdout carries the progress markers
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let directory = cli.directory.unwrap_or_else(default_directory);
    tracing::debug!(
        user = %cli.username,
        directory = %directory.display(),
        dry_run = cli.dry_run,
        "Starting scrape"
    );

    let config = ScrapeConfig {
        username: cli.username,
        directory,
        dry_run: cli.dry_run,
        prefix: cli.prefix,
    };
    let client_config = ClientConfig {
        base_url: cli.base_url,
        ..ClientConfig::default()
    };

    let scraper = RedditScraper::with_client_config(config, client_config)
        .context("failed to set up scraper")?;

    let mut stdout = std::io::stdout().lock();
    scraper
        .run(&mut stdout)
        .await
        .with_context(|| format!("scrape of {} aborted", scraper.listing_url()))?;

    Ok(())
}
