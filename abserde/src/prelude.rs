//! Prelude module for convenient imports.
//!
//! ```ignore
//! use abserde::prelude::*;
//! ```

// Runtime types
pub use abserde_core::{AttributeError, Error, JsonParseError, ParseErrorKind, Record, Value};

// Compiler types
pub use abserde_codegen::{CodegenError, Config, Generator};
pub use abserde_schema::{Primitive, RecordDef, Schema, SchemaError, TypeRef, UnionDef};
