//! Reddit Image Scraper Core Library
//!
//! Downloads the images a Reddit user has submitted, page by page, into a
//! local directory.
//!
//! # Overview
//!
//! A run is a single sequential loop:
//! - fetch a page of `/user/<name>/submitted.json`
//! - keep posts linking to `i.redd.it` or `i.imgur.com` images
//! - save each image unless a file with that name already exists
//! - follow the `after` cursor until the listing ends
//!
//! # Example
//!
//! ```no_run
//! use redditscrape_core::{RedditScraper, Result, ScrapeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = RedditScraper::new(ScrapeConfig {
//!         username: "some_user".to_string(),
//!         directory: "images".into(),
//!         dry_run: false,
//!         prefix: None,
//!     })?;
//!
//!     let summary = scraper.run(&mut std::io::stdout()).await?;
//!     println!("{} downloaded, {} failed", summary.downloaded, summary.failed);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, RedditClient, Transport};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export parser functions
pub use parser::{apply_prefix, extract_filename, has_image_extension, parse_listing};

// Re-export main scraper API
pub use scraper::{PostOutcome, RedditScraper, ScrapeConfig};

// Re-export data types
pub use types::{Listing, Post, PostData, ScrapeSummary};

// Re-export URL helper functions for convenience
pub use url::{build_listing_url, build_page_url};
