//! A small recursive-descent JSON parser.
//!
//! [`parse`] reads a whole document from a byte slice and builds an owned
//! [`Value`] tree, or reports the first grammar violation as a [`ParseError`].
//! The parser never emits JSON; it only reads it.
//!
//! ```rust
//! use leptjson::{parse, Value, ValueKind};
//!
//! let mut v = Value::Null;
//! parse(&mut v, r#" { "name" : "G clef 𝄞", "tags" : [ 1, 2.5e3 ] } "#).unwrap();
//! assert_eq!(v.kind(), ValueKind::Object);
//! assert_eq!(v.get_object_value(0).get_string(), "G clef \u{1D11E}");
//! assert_eq!(v.get_object_value(1).get_array_element(1).get_number(), 2500.0);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::{parse, parse_with_options};
pub use value::{Member, Value, ValueKind};
