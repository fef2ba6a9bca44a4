//! Query-string (`application/x-www-form-urlencoded`) codec.
//!
//! - [`parse`] decodes `key=value&key=value` text into an ordered mapping,
//!   with repeated and `[]`-suffixed keys collected into lists.
//! - [`stringify`] encodes a mapping of scalars and lists back into text.

pub mod builder;
pub mod parser;

pub use builder::stringify;
pub use parser::parse;
