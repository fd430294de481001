//! Main scraper API
//!
//! Walks a user's submission listing page by page and saves every image
//! whose URL has a known direct-image shape.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::client::{ClientConfig, RedditClient, Transport};
use crate::error::{Result, ScrapeError};
use crate::parser::{apply_prefix, extract_filename, has_image_extension, parse_listing};
use crate::types::ScrapeSummary;
use crate::url::{build_listing_url, build_page_url};

/// Marker written to the progress stream for each processed post
const PROGRESS_MARKER: &[u8] = b".";

/// Session configuration, fixed for the lifetime of a scraper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// Reddit username whose submissions are scraped
    pub username: String,
    /// Directory images are saved into
    pub directory: PathBuf,
    /// Report what would be saved without touching the filesystem
    pub dry_run: bool,
    /// Optional filename prefix, joined with a hyphen
    pub prefix: Option<String>,
}

/// What happened to a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// URL is not an image or has an unknown shape; not counted
    Skipped,
    /// Matched, but dry-run mode suppressed the download
    DryRun(String),
    /// Matched, and a file with this name is already present
    AlreadyExists(String),
    /// Matched and saved
    Downloaded(String),
    /// Matched, but the download failed
    Failed(String),
}

impl PostOutcome {
    /// Whether the post counts towards the reported total
    pub fn is_processed(&self) -> bool {
        !matches!(self, PostOutcome::Skipped)
    }
}

/// Main scraper API
///
/// Owns the session configuration and a [`Transport`]. Requests are issued
/// strictly one after another: a listing page is fully processed, image by
/// image, before the next page is requested.
pub struct RedditScraper<T = RedditClient> {
    config: ScrapeConfig,
    listing_url: String,
    transport: T,
}

impl RedditScraper<RedditClient> {
    /// Create a new scraper talking to reddit.com
    ///
    /// # Errors
    /// - `ConfigurationError` if the output path exists but is not a directory
    /// - `Io` if the output directory cannot be created
    /// - `HttpError` if HTTP client initialization fails
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        Self::with_client_config(config, ClientConfig::default())
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Same as [`RedditScraper::new`]
    pub fn with_client_config(config: ScrapeConfig, client_config: ClientConfig) -> Result<Self> {
        let client = RedditClient::with_config(client_config)?;
        let base_url = client.base_url().to_string();
        Self::with_transport(config, &base_url, client)
    }
}

impl<T: Transport> RedditScraper<T> {
    /// Create a scraper over an arbitrary transport
    ///
    /// # Arguments
    /// * `config` - Session configuration
    /// * `base_url` - Scheme and host of the listing endpoint
    /// * `transport` - Performs the listing and image requests
    ///
    /// # Errors
    /// - `ConfigurationError` if the output path exists but is not a directory
    /// - `Io` if the output directory cannot be created
    pub fn with_transport(config: ScrapeConfig, base_url: &str, transport: T) -> Result<Self> {
        prepare_directory(&config.directory)?;
        let listing_url = build_listing_url(base_url, &config.username);

        Ok(Self {
            config,
            listing_url,
            transport,
        })
    }

    /// Session configuration this scraper was built with
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Cursor-less listing URL of the user
    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    /// Scrape every page of the listing
    ///
    /// Writes one `.` to `progress` per processed post, then a newline and
    /// `"<count> saved."` once the listing is exhausted. Failed downloads are
    /// logged and counted but never abort the run.
    ///
    /// # Errors
    /// - `HttpError` if a listing page cannot be fetched
    /// - `ProtocolError` if a listing page has a bad status or body
    /// - `Io` if writing to `progress` fails
    pub async fn run<W: Write>(&self, progress: &mut W) -> Result<ScrapeSummary> {
        let mut summary = ScrapeSummary::default();
        let mut page_url = self.listing_url.clone();

        loop {
            debug!(url = %page_url, page = summary.pages + 1, "Fetching listing page");
            let body = self.transport.fetch_listing(&page_url).await?;
            let listing = parse_listing(&body)?;
            summary.pages += 1;

            for post in &listing.children {
                let Some(url) = post.url() else {
                    continue;
                };

                let outcome = self.process_post(url).await;
                if !outcome.is_processed() {
                    continue;
                }

                match outcome {
                    PostOutcome::Downloaded(_) => summary.downloaded += 1,
                    PostOutcome::AlreadyExists(_) => summary.skipped_existing += 1,
                    PostOutcome::Failed(_) => summary.failed += 1,
                    PostOutcome::DryRun(_) | PostOutcome::Skipped => {}
                }

                progress.write_all(PROGRESS_MARKER)?;
                progress.flush()?;
                summary.processed += 1;
            }

            match listing.next_cursor() {
                Some(cursor) => page_url = build_page_url(&self.listing_url, cursor),
                None => break,
            }
        }

        writeln!(progress)?;
        writeln!(progress, "{} saved.", summary.processed)?;
        progress.flush()?;

        info!(
            user = %self.config.username,
            pages = summary.pages,
            processed = summary.processed,
            downloaded = summary.downloaded,
            existing = summary.skipped_existing,
            failed = summary.failed,
            "Scrape finished"
        );

        Ok(summary)
    }

    /// Handle a single post URL
    ///
    /// Never fails: download errors are logged and reported as
    /// [`PostOutcome::Failed`].
    pub async fn process_post(&self, url: &str) -> PostOutcome {
        let Some(filename) = self.target_filename(url) else {
            return PostOutcome::Skipped;
        };

        if self.config.dry_run {
            return PostOutcome::DryRun(filename);
        }

        let dest = self.config.directory.join(&filename);
        if dest.is_file() {
            debug!(path = %dest.display(), "File already exists, skipping");
            return PostOutcome::AlreadyExists(filename);
        }

        match self.transport.download(url, &dest).await {
            Ok(bytes) => {
                info!(url = %url, path = %dest.display(), bytes, "Saved image");
                PostOutcome::Downloaded(filename)
            }
            Err(e) => {
                error!(url = %url, path = %dest.display(), error = %e, "Download failed");
                PostOutcome::Failed(filename)
            }
        }
    }

    /// Filename a post URL would be saved under, prefix included
    ///
    /// # Returns
    /// `None` if the URL is not an image or has an unknown shape
    pub fn target_filename(&self, url: &str) -> Option<String> {
        if !has_image_extension(url) {
            return None;
        }
        let filename = extract_filename(url)?;
        Some(apply_prefix(&filename, self.config.prefix.as_deref()))
    }
}

/// Ensures the output directory exists
fn prepare_directory(directory: &Path) -> Result<()> {
    if !directory.exists() {
        std::fs::create_dir_all(directory)?;
    }

    if !directory.is_dir() {
        return Err(ScrapeError::ConfigurationError(format!(
            "{} exists but is not a directory",
            directory.display()
        )));
    }

    Ok(())
}
