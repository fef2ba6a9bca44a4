//! urlcodec - URL and query-string codecs
//!
//! This crate provides two symmetric codecs over URL-shaped text:
//!
//! - a generic URL parser/builder that splits text into scheme, credentials,
//!   host, path, query and fragment and assembles them back;
//! - a query-string (form-encoded) parser/builder with array-valued keys
//!   and configurable decoding policy.
//!
//! # Quick Start
//!
//! ```
//! use urlcodec::{parse_query_string, parse_url, stringify_query, stringify_url};
//! use urlcodec::{ParseOptions, QueryInput, QueryValue, UrlBuildOptions};
//!
//! // Decompose a URL; components stay percent-encoded
//! let url = parse_url("otpauth://totp/Example?secret=B4PS&digits=6")?;
//! assert_eq!(url.protocol.as_deref(), Some("otpauth:"));
//! assert_eq!(url.hostname.as_deref(), Some("totp"));
//! assert_eq!(url.query.as_deref(), Some("?secret=B4PS&digits=6"));
//!
//! // Decode its query
//! let query = parse_query_string(&url.query.unwrap()[1..], &ParseOptions::default())?;
//! assert_eq!(query["digits"], QueryValue::from("6"));
//!
//! // Build a URL with a structured query
//! let mut params = QueryInput::new();
//! params.insert("a".to_string(), "b".into());
//! params.insert("c".to_string(), "a b".into());
//! params.insert("t".to_string(), 1234.into());
//! let built = stringify_url(
//!     &UrlBuildOptions::new()
//!         .protocol("https:")
//!         .hostname("example.com")
//!         .pathname("/the/path/")
//!         .query(params.clone()),
//! )?;
//! assert_eq!(built, "https://example.com/the/path/?a=b&c=a%20b&t=1234");
//! assert_eq!(stringify_query(&params), "a=b&c=a%20b&t=1234");
//! # Ok::<(), urlcodec::CodecError>(())
//! ```
//!
//! # Percent-encoding
//!
//! | Where | Left unescaped |
//! |-------|----------------|
//! | query keys and values, user, pass | `A-Z a-z 0-9 - _ . ! ~ * ' ( )` |
//! | pathname | the above plus `; , / ? : @ & = + $ #` |
//! | hostname | never encoded |
//!
//! Parsed URL components are never decoded; query-string parsing decodes
//! keys and values strictly.
//!
//! # Error Handling
//!
//! Fallible functions return `Result<T, CodecError>`:
//!
//! - `InvalidUrl` for grammar mismatches, out-of-range ports, malformed
//!   protocols and empty build results
//! - `Decode` for malformed percent-escapes in query strings

// Re-export the four codec operations
pub use querystring::{parse as parse_query_string, stringify as stringify_query};
pub use url::{parse as parse_url, stringify as stringify_url};

// Re-export public types
pub use error::CodecError;
pub use types::{
    BuildQuery, ParseOptions, QueryField, QueryInput, QueryMap, QueryValue, Scalar,
    UrlBuildOptions, UrlComponents,
};

// Module declarations
pub mod core;
pub mod error;
pub mod querystring;
pub mod types;
pub mod url;
