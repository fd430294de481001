//! Image URL matching and filename extraction
//!
//! A submission is downloadable when its URL mentions one of the known image
//! extensions and has one of the known direct-image shapes:
//!
//! 1. `https://i.redd.it/<name>.<ext>`
//! 2. `https://i.imgur.com/<name>.<ext>` (older submissions)
//!
//! The shapes are tried in that order.

use regex::Regex;

/// Direct-image shapes, tried in order
const FILENAME_PATTERNS: [&str; 2] = [
    r"^https://i\.redd\.it/(\w+\.\w+)",
    r"^https://i\.imgur\.com/(\w+\.\w+)",
];

/// Returns true if the URL mentions a known image extension
///
/// This is a case-sensitive substring search, not a suffix check:
/// `https://example.com/pngexample` matches.
pub fn has_image_extension(url: &str) -> bool {
    let Ok(re) = Regex::new(r"jpg|jpeg|png|gif") else {
        return false;
    };
    re.is_match(url)
}

/// Extracts the bare `name.ext` filename from a direct-image URL
///
/// # Returns
/// `Some(filename)` for a recognised host, `None` for any other URL shape
///
/// # Example
/// ```
/// use redditscrape_core::parser::extract_filename;
/// assert_eq!(extract_filename("https://i.redd.it/abc123.jpg"), Some("abc123.jpg".to_string()));
/// assert_eq!(extract_filename("https://example.com/image.jpg"), None);
/// ```
pub fn extract_filename(url: &str) -> Option<String> {
    FILENAME_PATTERNS
        .iter()
        .find_map(|pattern| match_filename(pattern, url))
}

fn match_filename(pattern: &str, url: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let caps = re.captures(url)?;
    caps.get(1).map(|m| m.as_str().to_string())
}

/// Prepends the optional prefix, hyphen-joined
///
/// # Example
/// ```
/// use redditscrape_core::parser::apply_prefix;
/// assert_eq!(apply_prefix("bar.jpg", Some("foo")), "foo-bar.jpg");
/// assert_eq!(apply_prefix("bar.jpg", None), "bar.jpg");
/// ```
pub fn apply_prefix(filename: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}-{}", p, filename),
        _ => filename.to_string(),
    }
}
