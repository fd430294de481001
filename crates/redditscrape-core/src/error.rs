//! Error types for the Reddit image scraper
//!
//! Fatal errors (`ConfigurationError`, `ProtocolError`, `HttpError`) abort a
//! run. `DownloadFailed` describes a single image that could not be saved
//! and is only ever logged by the scraper loop.

use thiserror::Error;

/// Error type for all scraper operations
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Output directory is unusable
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// Listing endpoint answered with a bad status or an unexpected body
    #[error("Unexpected listing response: {0}")]
    ProtocolError(String),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A single image could not be downloaded
    #[error("Failed to download {url}: {reason}")]
    DownloadFailed { url: String, reason: String },
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_configuration() {
        let error = ScrapeError::ConfigurationError("not a directory".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: not a directory");
    }

    #[test]
    fn test_error_display_protocol() {
        let error = ScrapeError::ProtocolError("missing data.children".to_string());
        assert_eq!(
            error.to_string(),
            "Unexpected listing response: missing data.children"
        );
    }

    #[test]
    fn test_error_display_download_failed() {
        let error = ScrapeError::DownloadFailed {
            url: "https://i.redd.it/abc.jpg".to_string(),
            reason: "HTTP 404".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to download https://i.redd.it/abc.jpg: HTTP 404"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ScrapeError = io.into();
        assert!(matches!(error, ScrapeError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: denied");
    }
}
