//! Query-string decoding.

use tracing::debug;

use crate::core::encoding::decode_component;
use crate::core::text::trim_whitespace;
use crate::error::CodecError;
use crate::types::{ParseOptions, QueryMap, QueryValue};

/// A decoded key and whether it names a multi-valued form field (`name[]`).
struct DecodedKey {
    key: String,
    is_array_like: bool,
}

fn decode_key(raw: &str, opts: &ParseOptions) -> Result<DecodedKey, CodecError> {
    let mut key = decode_component(raw)?;

    if opts.trim {
        key = trim_whitespace(&key).to_string();
    }

    let is_array_like = key.ends_with("[]");

    Ok(DecodedKey { key, is_array_like })
}

fn decode_value(raw: &str, opts: &ParseOptions) -> Result<String, CodecError> {
    let value = decode_component(raw)?;

    if opts.trim {
        return Ok(trim_whitespace(&value).to_string());
    }

    Ok(value)
}

/// Decode a query string into an ordered mapping.
///
/// Also works for `application/x-www-form-urlencoded` bodies. The leading
/// `?` is not stripped; pass the text after it.
///
/// # Examples
///
/// ```
/// use urlcodec::{parse_query_string, ParseOptions, QueryValue};
///
/// let query = parse_query_string("a=1&a=b&a&a=&c[]=x", &ParseOptions::default()).unwrap();
/// assert_eq!(query["a"], QueryValue::from(vec!["1", "b", "", ""]));
/// assert_eq!(query["c[]"], QueryValue::from(vec!["x"]));
/// ```
pub fn parse(query: &str, opts: &ParseOptions) -> Result<QueryMap, CodecError> {
    let mut ret = QueryMap::new();

    let query = if opts.plus_as_space {
        query.replace('+', "%20")
    } else {
        query.to_string()
    };

    for segment in query.split('&') {
        if segment.is_empty() {
            continue;
        }

        let (raw_key, raw_value) = match segment.split_once('=') {
            Some((k, v)) => (k, Some(v)),
            None => (segment, None),
        };

        let DecodedKey { key, is_array_like } = decode_key(raw_key, opts).inspect_err(|err| {
            debug!(segment, %err, "failed to decode query key");
        })?;

        let value = match raw_value {
            Some(raw) => decode_value(raw, opts).inspect_err(|err| {
                debug!(segment, %err, "failed to decode query value");
            })?,
            None => String::new(),
        };

        match ret.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                let as_list = opts.always_array || (is_array_like && opts.array_like_as_array_always);
                let entry = if as_list {
                    QueryValue::Multiple(vec![value])
                } else {
                    QueryValue::Single(value)
                };
                ret.insert(key, entry);
            }
        }
    }

    Ok(ret)
}
