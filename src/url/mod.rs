//! Generic URL codec.
//!
//! This module contains:
//! - [`parse`]: decompose URL text into [`crate::UrlComponents`]
//! - [`stringify`]: assemble [`crate::UrlBuildOptions`] back into text

pub mod builder;
pub mod parser;

pub use builder::stringify;
pub use parser::parse;
