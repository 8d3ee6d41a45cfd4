//! Error types for generated abserde modules.
//!
//! Generated code distinguishes two runtime error kinds: [`JsonParseError`]
//! for every failure to turn JSON text into a record, and [`AttributeError`]
//! for accessor keys that name no field. [`Error`] is the umbrella type
//! returned by operations that can fail in more than one way.

use thiserror::Error;

/// Category of a JSON decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input is not syntactically valid JSON.
    Syntax,
    /// The input ended in the middle of a JSON value.
    Eof,
    /// The input is valid JSON but does not match the target type.
    Data,
    /// The input is valid JSON but matches none of the candidate records.
    NoMatch,
    /// Reading the input failed.
    Io,
}

/// Error raised when JSON text cannot be decoded into a generated type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct JsonParseError {
    /// Failure category.
    pub kind: ParseErrorKind,
    /// Human-readable description.
    pub message: String,
    /// One-based line of the failure, zero when unknown.
    pub line: usize,
    /// One-based column of the failure, zero when unknown.
    pub column: usize,
}

impl JsonParseError {
    /// Creates an error reporting that no record decoder accepted the input.
    ///
    /// # Arguments
    /// * `candidates` - Record names that were tried, in order
    #[must_use]
    pub fn no_match(candidates: &[&str]) -> Self {
        let message = if candidates.is_empty() {
            "input does not match any record: the module declares no records".to_string()
        } else {
            format!(
                "input does not match any record (tried {})",
                candidates.join(", ")
            )
        };
        Self {
            kind: ParseErrorKind::NoMatch,
            message,
            line: 0,
            column: 0,
        }
    }

    /// Returns true if the input was not well-formed JSON.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Syntax | ParseErrorKind::Eof)
    }
}

impl From<serde_json::Error> for JsonParseError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match err.classify() {
            Category::Syntax => ParseErrorKind::Syntax,
            Category::Eof => ParseErrorKind::Eof,
            Category::Data => ParseErrorKind::Data,
            Category::Io => ParseErrorKind::Io,
        };
        Self {
            kind,
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Error raised by the accessor protocol for a key that names no field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No such item {key}")]
pub struct AttributeError {
    /// The offending key.
    pub key: String,
}

impl AttributeError {
    /// Creates an attribute error for the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Umbrella error type for generated record operations.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON decoding failed.
    #[error(transparent)]
    JsonParse(#[from] JsonParseError),

    /// Accessor key names no field.
    #[error(transparent)]
    Attribute(#[from] AttributeError),

    /// A value does not have the type its field requires.
    #[error("invalid value for '{key}': {message}")]
    TypeMismatch {
        /// Field name.
        key: String,
        /// Description of the mismatch.
        message: String,
    },

    /// Positional construction received the wrong number of arguments.
    #[error("{record}() takes {expected} arguments but {found} were given")]
    Arity {
        /// Record name.
        record: String,
        /// Number of fields.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// Module-level `dumps` received a value that is not one of the module's records.
    #[error("Invalid type for dumps: expected one of {expected}")]
    UnsupportedType {
        /// Comma-separated record names accepted by the module.
        expected: String,
    },

    /// Serialization to JSON failed.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates an unsupported type error listing the accepted records.
    #[must_use]
    pub fn unsupported_type(records: &[&str]) -> Self {
        Self::UnsupportedType {
            expected: records.join(", "),
        }
    }

    /// Returns true if this is an accessor error.
    #[must_use]
    pub const fn is_attribute(&self) -> bool {
        matches!(self, Self::Attribute(_))
    }

    /// Returns true if this is a JSON decoding error.
    #[must_use]
    pub const fn is_json_parse(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}

/// Result type alias for generated record operations.
pub type Result<T> = std::result::Result<T, Error>;
