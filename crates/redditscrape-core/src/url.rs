//! URL helper functions for the Reddit listing endpoint
//!
//! Provides functions for building a user's submission listing URL and the
//! URL of each following page.

/// Default host for the listing endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Builds the cursor-less submission listing URL for a user
///
/// # Arguments
/// * `base_url` - Scheme and host of the endpoint (e.g., "https://www.reddit.com")
/// * `username` - Reddit username, percent-encoded into the path
///
/// # Example
/// ```
/// use redditscrape_core::url::build_listing_url;
/// let url = build_listing_url("https://www.reddit.com", "spez");
/// assert_eq!(url, "https://www.reddit.com/user/spez/submitted.json");
/// ```
pub fn build_listing_url(base_url: &str, username: &str) -> String {
    let encoded = urlencoding::encode(username);
    format!(
        "{}/user/{}/submitted.json",
        base_url.trim_end_matches('/'),
        encoded
    )
}

/// Builds the URL of the page following `cursor`
///
/// Always derived from the cursor-less listing URL so that repeated
/// pagination never stacks `after` parameters.
///
/// # Example
/// ```
/// use redditscrape_core::url::build_page_url;
/// let url = build_page_url("https://www.reddit.com/user/spez/submitted.json", "t3_abc");
/// assert_eq!(url, "https://www.reddit.com/user/spez/submitted.json?after=t3_abc");
/// ```
pub fn build_page_url(listing_url: &str, cursor: &str) -> String {
    format!("{}?after={}", listing_url, urlencoding::encode(cursor))
}
