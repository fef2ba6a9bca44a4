//! URL grammar matcher.
//!
//! The whole URL is matched in one left-to-right pass by a single anchored
//! expression with named regions:
//!
//! ```text
//! ^
//!   ( (?P<protocol>\w+:)? // )?
//!   (
//!     ( (?P<auth> (?P<user>[^@:]+) (:(?P<pass>[^@]+))? ) @ )?
//!     (?P<host> (?P<hostname>[-.\w]+) (:(?P<port>\d{1,5}))? )
//!   )?
//!   (?P<path> (?P<pathname>/[^?#]*)? (?P<query>\?[^#]*)? )?
//!   (?P<hash>#.*)?
//! $
//! ```
//!
//! `\w` and `\d` are ASCII-only and `.` stops at line terminators, so the
//! expression below spells those classes out explicitly.

use std::sync::LazyLock;

use regex::{Captures, Regex};

const URL_PATTERN: &str = concat!(
    r"^(?:(?P<protocol>[A-Za-z0-9_]+:)?//)?",
    r"(?:(?:(?P<auth>(?P<user>[^@:]+)(?::(?P<pass>[^@]+))?)@)?",
    r"(?P<host>(?P<hostname>[-.A-Za-z0-9_]+)(?::(?P<port>[0-9]{1,5}))?))?",
    r"(?P<path>(?P<pathname>/[^?#]*)?(?P<query>\?[^#]*)?)?",
    r"(?P<hash>#[^\n\r\x{2028}\x{2029}]*)?$",
);

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL grammar is a valid expression"));

static PROTOCOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+:$").expect("protocol shape is a valid expression"));

/// Named regions of a URL as matched by the grammar, borrowed from the input.
///
/// A region is `None` when its group did not take part in the match or
/// matched the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlMatch<'a> {
    pub protocol: Option<&'a str>,
    pub auth: Option<&'a str>,
    pub user: Option<&'a str>,
    pub pass: Option<&'a str>,
    pub host: Option<&'a str>,
    pub hostname: Option<&'a str>,
    pub port: Option<&'a str>,
    pub path: Option<&'a str>,
    pub pathname: Option<&'a str>,
    pub query: Option<&'a str>,
    pub hash: Option<&'a str>,
}

impl UrlMatch<'_> {
    /// Whether none of the regions that make a URL meaningful matched.
    pub fn is_degenerate(&self) -> bool {
        self.protocol.is_none()
            && self.host.is_none()
            && self.pathname.is_none()
            && self.query.is_none()
            && self.hash.is_none()
    }
}

fn region<'a>(caps: &Captures<'a>, name: &str) -> Option<&'a str> {
    caps.name(name).map(|m| m.as_str()).filter(|s| !s.is_empty())
}

/// Match the URL grammar against the whole input.
///
/// Returns `None` when the input does not have the overall URL shape.
pub fn match_url(input: &str) -> Option<UrlMatch<'_>> {
    let caps = URL_REGEX.captures(input)?;

    Some(UrlMatch {
        protocol: region(&caps, "protocol"),
        auth: region(&caps, "auth"),
        user: region(&caps, "user"),
        pass: region(&caps, "pass"),
        host: region(&caps, "host"),
        hostname: region(&caps, "hostname"),
        port: region(&caps, "port"),
        path: region(&caps, "path"),
        pathname: region(&caps, "pathname"),
        query: region(&caps, "query"),
        hash: region(&caps, "hash"),
    })
}

/// Check that a protocol is word characters followed by a single `:`.
pub fn is_valid_protocol(protocol: &str) -> bool {
    PROTOCOL_REGEX.is_match(protocol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_full_url() {
        let m = match_url("HTTPS://user:pw@example.com:1234/a/b?x=1#frag").unwrap();

        assert_eq!(m.protocol, Some("HTTPS:"));
        assert_eq!(m.auth, Some("user:pw"));
        assert_eq!(m.user, Some("user"));
        assert_eq!(m.pass, Some("pw"));
        assert_eq!(m.host, Some("example.com:1234"));
        assert_eq!(m.hostname, Some("example.com"));
        assert_eq!(m.port, Some("1234"));
        assert_eq!(m.path, Some("/a/b?x=1"));
        assert_eq!(m.pathname, Some("/a/b"));
        assert_eq!(m.query, Some("?x=1"));
        assert_eq!(m.hash, Some("#frag"));
    }

    #[test]
    fn test_match_without_scheme() {
        let m = match_url("test@hostname.com:2333").unwrap();
        assert_eq!(m.protocol, None);
        assert_eq!(m.user, Some("test"));
        assert_eq!(m.hostname, Some("hostname.com"));
        assert_eq!(m.port, Some("2333"));
        assert_eq!(m.path, None);
    }

    #[test]
    fn test_match_degenerate() {
        assert!(match_url("").unwrap().is_degenerate());
        assert!(match_url("//").unwrap().is_degenerate());
        assert!(!match_url("/").unwrap().is_degenerate());
    }

    #[test]
    fn test_match_rejects() {
        let invalid = vec![
            "test@",
            "ssh://hostname.com:655372",
            "ssh://hostname.com:aaaa",
            "host name",
            "#line\nbreak",
        ];

        for input in invalid {
            assert!(match_url(input).is_none(), "Should not match: {:?}", input);
        }
    }

    #[test]
    fn test_match_path_query_hash_split() {
        let m = match_url("/p?q=/x#y?z#w").unwrap();
        assert_eq!(m.pathname, Some("/p"));
        assert_eq!(m.query, Some("?q=/x"));
        assert_eq!(m.hash, Some("#y?z#w"));
    }

    #[test]
    fn test_protocol_shape() {
        assert!(is_valid_protocol("https:"));
        assert!(is_valid_protocol("otp_auth2:"));
        assert!(!is_valid_protocol("https"));
        assert!(!is_valid_protocol("https::"));
        assert!(!is_valid_protocol("web+app:"));
        assert!(!is_valid_protocol(":"));
    }
}
