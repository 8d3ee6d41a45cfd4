//! Code generation configuration.

use crate::error::CodegenError;
use std::path::Path;

/// Default path of the runtime crate as seen from generated code.
pub const DEFAULT_CORE_PATH: &str = "::abserde_core";

/// Default module name when none can be derived.
pub const DEFAULT_MODULE_NAME: &str = "schema";

/// Configuration for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Module name recorded in the generated `MODULE_NAME` constant and used
    /// as the output file stem by the build helper.
    pub module_name: String,
    /// Path of the runtime crate, e.g. `::abserde_core` or `::abserde::core`.
    pub core_path: String,
    /// Emit a schema summary comment ahead of the generated items.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            core_path: DEFAULT_CORE_PATH.to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Creates a new config with the specified module name.
    #[must_use]
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Default::default()
        }
    }

    /// Creates a config whose module name is derived from a schema file path.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        Self::new(module_name_from_path(path))
    }

    /// Sets the module name.
    #[must_use]
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Sets the runtime crate path.
    #[must_use]
    pub fn core_path(mut self, path: impl Into<String>) -> Self {
        self.core_path = path.into();
        self
    }

    /// Enables or disables the schema summary comment.
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Checks that the configured names can appear in generated code.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if the runtime path is not a Rust
    /// path or the module name is not an identifier.
    pub fn validate(&self) -> Result<(), CodegenError> {
        let path = self.core_path.strip_prefix("::").unwrap_or(&self.core_path);
        if path.is_empty() || !path.split("::").all(is_identifier) {
            return Err(CodegenError::generation(format!(
                "invalid runtime crate path '{}'",
                self.core_path
            )));
        }
        if !is_identifier(&self.module_name) {
            return Err(CodegenError::generation(format!(
                "invalid module name '{}'",
                self.module_name
            )));
        }
        Ok(())
    }
}

/// Derives a module name from a schema file path.
///
/// Uses the file stem with `-` and `.` replaced by `_`.
#[must_use]
pub fn module_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.replace(['-', '.'], "_"))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
