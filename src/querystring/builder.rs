//! Query-string encoding.

use crate::core::encoding::encode_component;
use crate::types::{QueryField, QueryInput, Scalar};

fn encode_pair(key: &str, value: &Scalar) -> String {
    format!("{}={}", encode_component(key), encode_component(&value.to_string()))
}

/// Encode a mapping into a query string.
///
/// Lists expand to one `key=value` pair per element. Scalars are converted
/// with their fixed textual form, so `Null` and `Undefined` are emitted as
/// `null` and `undefined` rather than omitted.
///
/// # Examples
///
/// ```
/// use urlcodec::{stringify_query, QueryInput};
///
/// let mut query = QueryInput::new();
/// query.insert("a".to_string(), vec!["b c", "d"].into());
/// query.insert("n".to_string(), 1.1.into());
/// assert_eq!(stringify_query(&query), "a=b%20c&a=d&n=1.1");
/// ```
pub fn stringify(query: &QueryInput) -> String {
    query
        .iter()
        .map(|(key, field)| match field {
            QueryField::List(values) => values
                .iter()
                .map(|value| encode_pair(key, value))
                .collect::<Vec<_>>()
                .join("&"),
            QueryField::Scalar(value) => encode_pair(key, value),
        })
        .collect::<Vec<_>>()
        .join("&")
}
