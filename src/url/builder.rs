//! URL assembly.

use tracing::debug;

use crate::core::encoding::{encode_component, encode_path};
use crate::core::matcher::is_valid_protocol;
use crate::core::text::trim_whitespace;
use crate::error::CodecError;
use crate::querystring;
use crate::types::{BuildQuery, UrlBuildOptions};

/// Treat empty strings the same as absent fields.
fn given(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Construct a URL from its components.
///
/// Segments are emitted in order: protocol with `//`, credentials and
/// hostname with port, pathname, query, hash. Credentials are
/// percent-encoded, the hostname is emitted verbatim and the pathname is
/// encoded with the path-safe set. A raw query or hash is trimmed and gets
/// its leading `?`/`#` when missing.
///
/// # Errors
///
/// [`CodecError::InvalidUrl`] when the protocol is not word characters
/// followed by `:`, the port is outside `0..=65535`, or nothing was emitted.
///
/// # Examples
///
/// ```
/// use urlcodec::{stringify_url, UrlBuildOptions};
///
/// let url = stringify_url(
///     &UrlBuildOptions::new()
///         .protocol("https:")
///         .hostname("example.com")
///         .pathname("the/path/")
///         .query("query=string"),
/// )
/// .unwrap();
/// assert_eq!(url, "https://example.com/the/path/?query=string");
///
/// assert!(stringify_url(&UrlBuildOptions::new()).is_err());
/// ```
pub fn stringify(opts: &UrlBuildOptions) -> Result<String, CodecError> {
    let mut segs: Vec<String> = Vec::new();

    if let Some(protocol) = given(&opts.protocol) {
        if !is_valid_protocol(protocol) {
            debug!(protocol, "rejecting malformed protocol");
            return Err(CodecError::invalid_url(format!(
                "protocol \"{}\" is invalid",
                protocol
            )));
        }

        segs.push(protocol.to_lowercase());
        segs.push("//".to_string());
    }

    if let Some(hostname) = given(&opts.hostname) {
        if let Some(user) = given(&opts.user) {
            segs.push(encode_component(user));

            if let Some(pass) = given(&opts.pass) {
                segs.push(":".to_string());
                segs.push(encode_component(pass));
            }

            segs.push("@".to_string());
        }

        segs.push(hostname.to_string());

        if let Some(port) = opts.port {
            if !(0..=65535).contains(&port) {
                debug!(port, "rejecting out-of-range port");
                return Err(CodecError::invalid_url(format!("port \"{}\" is invalid", port)));
            }

            segs.push(":".to_string());
            segs.push(port.to_string());
        }
    }

    if let Some(pathname) = given(&opts.pathname) {
        if !pathname.starts_with('/') {
            segs.push("/".to_string());
        }

        segs.push(encode_path(pathname));
    }

    match &opts.query {
        Some(BuildQuery::Raw(raw)) if !raw.is_empty() => {
            let raw = trim_whitespace(raw);

            if !raw.starts_with('?') {
                segs.push("?".to_string());
            }

            segs.push(raw.to_string());
        }
        Some(BuildQuery::Fields(fields)) if !fields.is_empty() => {
            segs.push("?".to_string());
            segs.push(querystring::stringify(fields));
        }
        _ => {}
    }

    if let Some(hash) = &opts.hash {
        let hash = trim_whitespace(hash);

        if !hash.starts_with('#') {
            segs.push("#".to_string());
        }

        segs.push(hash.to_string());
    }

    if segs.is_empty() {
        debug!("no URL segment was produced");
        return Err(CodecError::invalid_url("no valid segments"));
    }

    Ok(segs.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QueryInput;

    #[test]
    fn test_stringify_empty_fails() {
        assert_eq!(
            stringify(&UrlBuildOptions::new()),
            Err(CodecError::invalid_url("no valid segments"))
        );

        let blank = UrlBuildOptions::new().protocol("").hostname("").pathname("").query("");
        assert!(stringify(&blank).is_err());
    }

    #[test]
    fn test_stringify_port_bounds() {
        let base = UrlBuildOptions::new().hostname("h");

        assert_eq!(stringify(&base.clone().port(0)).unwrap(), "h:0");
        assert_eq!(stringify(&base.clone().port(65535)).unwrap(), "h:65535");
        assert!(stringify(&base.clone().port(65536)).is_err());
        assert!(stringify(&base.port(-1)).is_err());
    }

    #[test]
    fn test_stringify_port_without_hostname_ignored() {
        let opts = UrlBuildOptions::new().pathname("/x").port(70000);
        assert_eq!(stringify(&opts).unwrap(), "/x");
    }

    #[test]
    fn test_stringify_credentials_require_hostname() {
        let opts = UrlBuildOptions::new().user("admin").pass("secret").pathname("p");
        assert_eq!(stringify(&opts).unwrap(), "/p");
    }

    #[test]
    fn test_stringify_empty_hash_is_given() {
        let opts = UrlBuildOptions::new().hash("");
        assert_eq!(stringify(&opts).unwrap(), "#");

        let opts = UrlBuildOptions::new().hostname("h").hash("  #top ");
        assert_eq!(stringify(&opts).unwrap(), "h#top");
    }

    #[test]
    fn test_stringify_trims_web_whitespace() {
        let opts = UrlBuildOptions::new().hash("\u{feff}x");
        assert_eq!(stringify(&opts).unwrap(), "#x");

        let opts = UrlBuildOptions::new().hostname("h").query("\u{feff}a=1\u{85}");
        assert_eq!(stringify(&opts).unwrap(), "h?a=1\u{85}");
    }

    #[test]
    fn test_stringify_query_variants() {
        let opts = UrlBuildOptions::new().hostname("h").query("  a=1 ");
        assert_eq!(stringify(&opts).unwrap(), "h?a=1");

        let opts = UrlBuildOptions::new().hostname("h").query(QueryInput::new());
        assert_eq!(stringify(&opts).unwrap(), "h");

        let opts = UrlBuildOptions::new().hostname("h").query("   ");
        assert_eq!(stringify(&opts).unwrap(), "h?");
    }

    #[test]
    fn test_stringify_protocol_lowercased() {
        let opts = UrlBuildOptions::new().protocol("HTTPS:").hostname("Example.com");
        assert_eq!(stringify(&opts).unwrap(), "https://Example.com");
    }
}
