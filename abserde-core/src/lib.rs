//! # abserde Core
//!
//! Runtime support for code generated by `abserde-codegen`.
//!
//! This crate provides:
//! - The [`Record`] trait implemented by every generated record
//! - The string-keyed accessor helpers used by generated `get`/`set`
//! - Error types shared by all generated modules
//! - Re-exports of `serde` and `serde_json` so generated code needs no
//!   direct dependency on them

pub mod error;
pub mod record;
pub mod value;

pub use error::{AttributeError, Error, JsonParseError, ParseErrorKind, Result};
pub use record::Record;
pub use value::{check_arity, from_value, take_arg, to_value};

pub use serde;
pub use serde_json;
pub use serde_json::Value;
