//! Listing response parser
//!
//! Validates the JSON body of a submission listing page against the
//! expected `data.children` shape.

use serde::Deserialize;

use crate::error::{Result, ScrapeError};
use crate::types::Listing;

#[derive(Deserialize)]
struct Envelope {
    data: Listing,
}

/// Parses a listing page body
///
/// # Arguments
/// * `body` - Raw response body of `/user/<name>/submitted.json`
///
/// # Returns
/// The typed [`Listing`] with its posts in listing order
///
/// # Errors
/// Returns `ProtocolError` if the body is not JSON or lacks `data.children`
pub fn parse_listing(body: &str) -> Result<Listing> {
    serde_json::from_str::<Envelope>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| {
            if e.is_data() {
                ScrapeError::ProtocolError(format!("listing does not match expected schema: {}", e))
            } else {
                ScrapeError::ProtocolError(format!("listing body is not valid JSON: {}", e))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_single_page() {
        let body = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {"kind": "t3", "data": {"url": "https://i.redd.it/first.jpg"}},
                    {"kind": "t3", "data": {"url": "https://www.reddit.com/r/rust/comments/x"}}
                ],
                "after": null
            }
        }"#;

        let listing = parse_listing(body).unwrap();
        assert_eq!(listing.children.len(), 2);
        assert_eq!(listing.children[0].url(), Some("https://i.redd.it/first.jpg"));
        assert_eq!(
            listing.children[1].url(),
            Some("https://www.reddit.com/r/rust/comments/x")
        );
        assert_eq!(listing.next_cursor(), None);
    }

    #[test]
    fn test_parse_listing_with_cursor() {
        let body = r#"{"data": {"children": [], "after": "t3_abc"}}"#;
        let listing = parse_listing(body).unwrap();
        assert!(listing.children.is_empty());
        assert_eq!(listing.next_cursor(), Some("t3_abc"));
    }

    #[test]
    fn test_parse_listing_invalid_json() {
        let result = parse_listing("<html>Too Many Requests</html>");
        match result {
            Err(ScrapeError::ProtocolError(msg)) => assert!(msg.contains("not valid JSON")),
            _ => panic!("Expected ProtocolError"),
        }
    }

    #[test]
    fn test_parse_listing_truncated_json() {
        let result = parse_listing(r#"{"data": {"children": ["#);
        assert!(matches!(result, Err(ScrapeError::ProtocolError(_))));
    }

    #[test]
    fn test_parse_listing_missing_data() {
        let result = parse_listing(r#"{"error": 404, "message": "Not Found"}"#);
        match result {
            Err(ScrapeError::ProtocolError(msg)) => assert!(msg.contains("schema")),
            _ => panic!("Expected ProtocolError"),
        }
    }

    #[test]
    fn test_parse_listing_missing_children() {
        let result = parse_listing(r#"{"data": {"after": null}}"#);
        match result {
            Err(ScrapeError::ProtocolError(msg)) => assert!(msg.contains("children")),
            _ => panic!("Expected ProtocolError"),
        }
    }

    #[test]
    fn test_parse_listing_children_wrong_type() {
        let result = parse_listing(r#"{"data": {"children": "nope"}}"#);
        assert!(matches!(result, Err(ScrapeError::ProtocolError(_))));
    }
}
