//! Parsers for listing responses and submission URLs
//!
//! Contains modules for the two things the scraper reads from the
//! endpoint: the listing page itself and the image URLs it links to.

pub mod filename;
pub mod listing;

pub use filename::{apply_prefix, extract_filename, has_image_extension};
pub use listing::parse_listing;
