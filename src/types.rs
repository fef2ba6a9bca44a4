//! Core data structures for URL and query-string codecs.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A decoded query-string value: a bare scalar or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// A key that appeared once and was not coerced to a list.
    Single(String),
    /// A key that repeated, or was coerced to a list by parse policy.
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The first value, whether single or multiple.
    pub fn first(&self) -> Option<&str> {
        match self {
            QueryValue::Single(v) => Some(v),
            QueryValue::Multiple(vs) => vs.first().map(String::as_str),
        }
    }

    /// All values as a slice-like vector of borrowed strings.
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(v) => vec![v.as_str()],
            QueryValue::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    /// Append a value, promoting a single value to a list.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            QueryValue::Multiple(vs) => vs.push(value),
            QueryValue::Single(prev) => {
                let prev = std::mem::take(prev);
                *self = QueryValue::Multiple(vec![prev, value]);
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Result of decoding a query string, keyed by decoded key in first-seen order.
pub type QueryMap = IndexMap<String, QueryValue>;

/// A single value accepted by the query-string builder.
///
/// Each variant has a fixed textual form; see the [`fmt::Display`] impl.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Rendered as `null`.
    Null,
    /// Rendered as `undefined`; the pair is not omitted.
    Undefined,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => f.write_str(&format_number(*x)),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => f.write_str("null"),
            Scalar::Undefined => f.write_str("undefined"),
        }
    }
}

/// Format a float the way number-to-string conversion does on the web:
/// shortest round-trip digits, `-0` as `0`, exponent form outside
/// `[1e-6, 1e21)` with an explicit `+` on positive exponents.
fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", x);
    }

    let exp = format!("{:e}", x);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<u16> for Scalar {
    fn from(value: u16) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

/// A query-string builder field: one scalar, or a list expanded to repeated pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryField {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

macro_rules! impl_query_field_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for QueryField {
                fn from(value: $ty) -> Self {
                    QueryField::Scalar(value.into())
                }
            }

            impl From<Vec<$ty>> for QueryField {
                fn from(values: Vec<$ty>) -> Self {
                    QueryField::List(values.into_iter().map(Into::into).collect())
                }
            }
        )*
    };
}

impl_query_field_from!(Scalar, &str, String, bool, i32, i64, u16, u32, f64);

/// Input mapping for the query-string builder, serialized in insertion order.
pub type QueryInput = IndexMap<String, QueryField>;

/// Decoding policy for [`crate::querystring::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Decode `+` as a space. Applied before percent-decoding, so `%2B` stays `+`.
    pub plus_as_space: bool,
    /// Store every key as a list.
    pub always_array: bool,
    /// Store keys ending in `[]` as a list even on first occurrence.
    pub array_like_as_array_always: bool,
    /// Strip surrounding whitespace from decoded keys and values.
    pub trim: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            plus_as_space: true,
            always_array: false,
            array_like_as_array_always: true,
            trim: false,
        }
    }
}

impl ParseOptions {
    /// Set whether `+` decodes as a space.
    pub fn with_plus_as_space(mut self, enabled: bool) -> Self {
        self.plus_as_space = enabled;
        self
    }

    /// Set whether every key is stored as a list.
    pub fn with_always_array(mut self, enabled: bool) -> Self {
        self.always_array = enabled;
        self
    }

    /// Set whether `[]`-suffixed keys are always stored as lists.
    pub fn with_array_like_as_array_always(mut self, enabled: bool) -> Self {
        self.array_like_as_array_always = enabled;
        self
    }

    /// Set whether decoded keys and values are trimmed.
    pub fn with_trim(mut self, enabled: bool) -> Self {
        self.trim = enabled;
        self
    }
}

/// Components of a parsed URL, kept exactly as they appear in the input
/// (no percent-decoding), except `protocol` which is lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    /// Scheme including the trailing `:`, lower-cased (`https:`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Raw credentials, `user:pass` or `user`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
    /// Hostname plus `:port` when a port is present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Path including the leading `/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    /// Pathname followed by the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Query including the leading `?`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Fragment including the leading `#`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl UrlComponents {
    /// Whether no component was recognized at all.
    pub fn is_empty(&self) -> bool {
        *self == UrlComponents::default()
    }
}

impl FromStr for UrlComponents {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::url::parse(s)
    }
}

/// Query accepted by the URL builder.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildQuery {
    /// Already-encoded query text, with or without the leading `?`.
    Raw(String),
    /// Raw values, encoded by the query-string builder.
    Fields(QueryInput),
}

impl From<&str> for BuildQuery {
    fn from(value: &str) -> Self {
        BuildQuery::Raw(value.to_string())
    }
}

impl From<String> for BuildQuery {
    fn from(value: String) -> Self {
        BuildQuery::Raw(value)
    }
}

impl From<QueryInput> for BuildQuery {
    fn from(fields: QueryInput) -> Self {
        BuildQuery::Fields(fields)
    }
}

/// Inputs for [`crate::url::stringify`].
///
/// All fields except `query` are given unencoded. Empty strings count as
/// absent, except for `hash`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlBuildOptions {
    /// Scheme including the trailing `:`
    pub protocol: Option<String>,
    pub user: Option<String>,
    /// Dropped unless `user` is also given
    pub pass: Option<String>,
    /// Emitted verbatim
    pub hostname: Option<String>,
    /// Checked against `0..=65535` when `hostname` is given
    pub port: Option<i64>,
    /// Leading `/` is optional
    pub pathname: Option<String>,
    pub query: Option<BuildQuery>,
    /// Leading `#` is optional; `Some("")` emits a bare `#`
    pub hash: Option<String>,
}

impl UrlBuildOptions {
    /// Empty options; building them as-is fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the protocol, e.g. `https:`.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set the user name.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password.
    pub fn pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    /// Set the hostname.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the port.
    pub fn port(mut self, port: i64) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the pathname.
    pub fn pathname(mut self, pathname: impl Into<String>) -> Self {
        self.pathname = Some(pathname.into());
        self
    }

    /// Set the query, raw text or structured fields.
    pub fn query(mut self, query: impl Into<BuildQuery>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the fragment.
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

impl From<&UrlComponents> for UrlBuildOptions {
    /// Carry a parsed URL back into builder inputs. Credentials are taken as
    /// parsed, so already-encoded text is encoded again by the builder.
    fn from(parts: &UrlComponents) -> Self {
        Self {
            protocol: parts.protocol.clone(),
            user: parts.user.clone(),
            pass: parts.pass.clone(),
            hostname: parts.hostname.clone(),
            port: parts.port.map(i64::from),
            pathname: parts.pathname.clone(),
            query: parts.query.clone().map(BuildQuery::Raw),
            hash: parts.hash.clone(),
        }
    }
}
