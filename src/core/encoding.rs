//! Percent-encoding rule sets shared by the URL and query-string codecs.
//!
//! Two sets are used when building text:
//!
//! - the component set, for query keys/values and URL credentials, which
//!   leaves only `A-Z a-z 0-9 - _ . ! ~ * ' ( )` unescaped;
//! - the path set, which additionally keeps the reserved delimiters
//!   `; , / ? : @ & = + $ #` so a pathname keeps its structure.
//!
//! Decoding is strict: a `%` not followed by two hex digits, or escapes that
//! do not form valid UTF-8, fail with [`CodecError::Decode`].

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::trace;

use crate::error::CodecError;

/// Characters escaped inside a single URL component.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters escaped inside a pathname.
pub const PATH_SET: &AsciiSet = &COMPONENT_SET
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Percent-encode a query key, query value, user name or password.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_SET).to_string()
}

/// Percent-encode a pathname, keeping `/` and the other reserved delimiters.
pub fn encode_path(input: &str) -> String {
    utf8_percent_encode(input, PATH_SET).to_string()
}

/// Percent-decode a component, rejecting malformed escapes.
///
/// # Examples
///
/// ```
/// use urlcodec::core::encoding::decode_component;
///
/// assert_eq!(decode_component("I%20%E2%9D%A4%20You").unwrap(), "I ❤ You");
/// assert!(decode_component("100%").is_err());
/// ```
pub fn decode_component(input: &str) -> Result<String, CodecError> {
    if !input.contains('%') {
        return Ok(input.to_string());
    }

    check_escapes(input)?;

    let decoded = percent_decode_str(input).decode_utf8().map_err(|err| {
        trace!(input, "percent-escapes do not form valid UTF-8");
        CodecError::decode(format!("{} in \"{}\"", err, input))
    })?;

    Ok(decoded.into_owned())
}

fn check_escapes(input: &str) -> Result<(), CodecError> {
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();

            if !well_formed {
                trace!(input, offset = i, "malformed percent-escape");
                return Err(CodecError::decode(format!(
                    "malformed percent-escape at offset {} in \"{}\"",
                    i, input
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}
