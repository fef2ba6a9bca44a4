//! Error types for URL and query-string codec operations.

use thiserror::Error;

/// Errors that can occur while parsing or building URLs and query strings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The URL does not match the URL grammar, carries an out-of-range port,
    /// has a malformed protocol, or would build to an empty string.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A percent-escape is malformed or decodes to invalid UTF-8.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl CodecError {
    pub(crate) fn invalid_url(detail: impl Into<String>) -> Self {
        CodecError::InvalidUrl(detail.into())
    }

    pub(crate) fn decode(detail: impl Into<String>) -> Self {
        CodecError::Decode(detail.into())
    }

    /// Whether this error was raised by URL validation.
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, CodecError::InvalidUrl(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodecError::invalid_url("port is invalid").to_string(),
            "Invalid URL: port is invalid"
        );

        assert_eq!(
            CodecError::decode("malformed escape \"%zz\"").to_string(),
            "Decode error: malformed escape \"%zz\""
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CodecError::invalid_url("x"), CodecError::invalid_url("x"));
        assert_ne!(CodecError::invalid_url("x"), CodecError::decode("x"));
        assert!(CodecError::invalid_url("x").is_invalid_url());
        assert!(!CodecError::decode("x").is_invalid_url());
    }
}
