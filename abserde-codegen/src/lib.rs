//! # abserde Codegen
//!
//! Code generation from abserde record schemas.
//!
//! This crate provides:
//! - Rust code generation from resolved schemas
//! - Record struct, accessor protocol and JSON entry point generation
//! - Union enum and whole-schema dispatch generation
//! - Build script integration

pub mod build;
pub mod config;
pub mod error;
pub mod generator;
pub mod rust;

pub use config::Config;
pub use error::CodegenError;
pub use generator::Generator;

/// Generates Rust code from IDL source text.
///
/// # Arguments
/// * `source` - IDL source text
/// * `config` - Generation settings
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution or generation fails.
pub fn generate_from_str(source: &str, config: &Config) -> Result<String, CodegenError> {
    let file = abserde_schema::parse_source(source)?;
    let schema = abserde_schema::Schema::from_source(&file)?;
    Generator::new(&schema, config).generate()
}

/// Generates Rust code from an IDL schema file.
///
/// # Arguments
/// * `path` - Path to the schema file
/// * `config` - Generation settings
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, resolution or generation fails.
pub fn generate_from_file(path: &std::path::Path, config: &Config) -> Result<String, CodegenError> {
    let source = std::fs::read_to_string(path)?;
    generate_from_str(&source, config)
}
