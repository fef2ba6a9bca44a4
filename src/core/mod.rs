//! Machinery shared by the URL and query-string codecs.
//!
//! This module contains:
//! - The single-pass URL grammar matcher
//! - Percent-encoding rule sets and strict decoding
//! - Whitespace trimming

pub mod encoding;
pub mod matcher;
pub mod text;

// Re-export main functionality
pub use encoding::{decode_component, encode_component, encode_path, COMPONENT_SET, PATH_SET};
pub use matcher::{is_valid_protocol, match_url, UrlMatch};
pub use text::trim_whitespace;
