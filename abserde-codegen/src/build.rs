//! Build script integration.
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     abserde_codegen::build::compile_schema("schemas/multiclass.abs")
//!         .expect("Failed to compile schema");
//! }
//!
//! // src/lib.rs
//! pub mod multiclass {
//!     include!(concat!(env!("OUT_DIR"), "/multiclass.rs"));
//! }
//! ```

use crate::config::Config;
use crate::error::CodegenError;
use crate::generate_from_file;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Compiles a schema file into `$OUT_DIR/<stem>.rs`.
///
/// The module name is derived from the file stem.
///
/// # Arguments
/// * `path` - Path to the schema file, relative to the package root
///
/// # Returns
/// Path of the written module.
///
/// # Errors
/// Returns `CodegenError` if `OUT_DIR` is unset or compilation fails.
pub fn compile_schema(path: impl AsRef<Path>) -> Result<PathBuf, CodegenError> {
    let path = path.as_ref();
    compile_schema_with(path, &Config::for_path(path))
}

/// Compiles a schema file into `$OUT_DIR/<module_name>.rs` with explicit settings.
///
/// Emits `cargo:rerun-if-changed` for the schema file.
///
/// # Errors
/// Returns `CodegenError` if `OUT_DIR` is unset or compilation fails.
pub fn compile_schema_with(path: &Path, config: &Config) -> Result<PathBuf, CodegenError> {
    let out_dir = std::env::var_os("OUT_DIR").ok_or_else(|| {
        CodegenError::generation("OUT_DIR is not set; call this from a build script")
    })?;
    println!("cargo:rerun-if-changed={}", path.display());
    compile_schema_to(path, Path::new(&out_dir), config)
}

/// Compiles a schema file into `<out_dir>/<module_name>.rs`.
///
/// Nothing is written unless compilation succeeds.
///
/// # Errors
/// Returns `CodegenError` if reading, compilation or writing fails.
pub fn compile_schema_to(
    path: &Path,
    out_dir: &Path,
    config: &Config,
) -> Result<PathBuf, CodegenError> {
    let code = generate_from_file(path, config)?;
    let dest = out_dir.join(format!("{}.rs", config.module_name));
    fs::write(&dest, code)?;
    debug!(schema = %path.display(), dest = %dest.display(), "wrote generated module");
    Ok(dest)
}
