//! # abserde
//!
//! Schema compiler for plain JSON records.
//!
//! A schema file declares records with typed fields. `abserde` turns it into
//! a Rust module where every record is a struct with JSON encoding and
//! decoding, a string-keyed accessor protocol and structural equality, plus
//! module-level `loads` and `dumps` that dispatch across all records.
//!
//! ## Schema Language
//!
//! ```text
//! record Test {
//!     room: int
//!     floor: int
//! }
//!
//! record Test2 {
//!     name: str
//!     age: int
//!     foo: Test
//!     tags: List[str]
//!     note: Optional[str]
//!     value: Union[int, str]
//!     extra: Any
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     abserde::codegen::build::compile_schema("schemas/multiclass.abs")
//!         .expect("Failed to compile schema");
//! }
//!
//! // src/lib.rs
//! pub mod multiclass {
//!     include!(concat!(env!("OUT_DIR"), "/multiclass.rs"));
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Runtime support linked into generated modules
//! - [`schema`] - IDL parsing and type resolution
//! - [`codegen`] - Rust code generation and build script integration

pub mod prelude;

/// Runtime support for generated modules.
pub mod core {
    pub use abserde_core::*;
}

/// IDL parsing, name gathering and type resolution.
pub mod schema {
    pub use abserde_schema::*;
}

/// Code generation from resolved schemas.
pub mod codegen {
    pub use abserde_codegen::*;
}

// Re-export commonly used items at the crate root
pub use abserde_codegen::{CodegenError, Config, Generator, generate_from_file, generate_from_str};
pub use abserde_core::{AttributeError, Error, JsonParseError, Record};
pub use abserde_schema::{Schema, SchemaError, compile, compile_file};
