//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] abserde_schema::ParseError),

    /// Schema validation or resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] abserde_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// A schema name cannot be used in the generated module.
    #[error("'{name}' is reserved and cannot be used as {usage}")]
    ReservedName {
        /// Offending name.
        name: String,
        /// Where the name was used, e.g. "a record name".
        usage: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a reserved name error.
    pub fn reserved(name: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::ReservedName {
            name: name.into(),
            usage: usage.into(),
        }
    }

    /// Returns true if the underlying schema error is an invalid type.
    #[must_use]
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, Self::Schema(err) if err.is_invalid_type())
    }
}
