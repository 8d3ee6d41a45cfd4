//! # abserde Schema
//!
//! Record IDL parser and schema resolver.
//!
//! This crate provides:
//! - A tokenizer and parser for the record IDL
//! - The class gatherer collecting every record name ahead of resolution
//! - The type resolver turning type expressions into [`TypeRef`]s
//! - The resolved intermediate representation consumed by code generation

pub mod ast;
pub mod error;
pub mod gather;
pub mod indirection;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod resolve;
pub mod types;
pub mod validation;

pub use ast::{FieldDecl, Item, Member, RecordDecl, SourceFile, Span, TypeExpr};
pub use error::{ParseError, SchemaError};
pub use gather::{Gathered, gather};
pub use indirection::Indirections;
pub use ir::{FieldDef, RecordDef, Schema, UnionDef};
pub use parser::parse_source;
pub use resolve::Resolver;
pub use types::{Primitive, TypeRef};

/// Compiles IDL source text into a resolved schema.
///
/// Runs the parser, the gathering pre-pass, validation and type resolution.
///
/// # Arguments
/// * `source` - IDL source text
///
/// # Errors
/// Returns `SchemaError` if parsing, validation or resolution fails.
pub fn compile(source: &str) -> Result<Schema, SchemaError> {
    let file = parse_source(source)?;
    Schema::from_source(&file)
}

/// Compiles an IDL file into a resolved schema.
///
/// # Errors
/// Returns `SchemaError` if reading, parsing or resolution fails.
pub fn compile_file(path: &std::path::Path) -> Result<Schema, SchemaError> {
    let source = std::fs::read_to_string(path).map_err(ParseError::Io)?;
    compile(&source)
}
