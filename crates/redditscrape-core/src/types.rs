//! Core data types for the Reddit image scraper
//!
//! Contains the listing schema consumed from the endpoint and the summary
//! produced by a run.

use serde::Deserialize;

/// One page of a user's submission listing
///
/// Mirrors the `data` object of the listing response. Only the fields the
/// scraper consumes are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Listing {
    /// Post records in listing order
    pub children: Vec<Post>,

    /// Cursor of the next page, absent on the last page
    #[serde(default)]
    pub after: Option<String>,
}

impl Listing {
    /// Returns the next-page cursor, treating an empty string as absent
    pub fn next_cursor(&self) -> Option<&str> {
        self.after.as_deref().filter(|cursor| !cursor.is_empty())
    }
}

/// A single submission in a listing
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub data: PostData,
}

impl Post {
    /// Source URL of the submission, if it has one
    pub fn url(&self) -> Option<&str> {
        self.data.url.as_deref()
    }
}

/// Fields of a submission the scraper reads
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PostData {
    /// Link target of the submission (e.g., "https://i.redd.it/abc123.jpg")
    #[serde(default)]
    pub url: Option<String>,
}

/// Outcome counters of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrapeSummary {
    /// Posts whose URL matched a known image shape; this is the reported count
    pub processed: usize,

    /// Images written to the output directory
    pub downloaded: usize,

    /// Images skipped because a file with the same name already existed
    pub skipped_existing: usize,

    /// Images whose download failed
    pub failed: usize,

    /// Listing pages fetched
    pub pages: usize,
}
