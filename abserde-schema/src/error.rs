//! Error types for schema parsing and resolution.

use crate::ast::Span;
use thiserror::Error;

/// Error type for tokenizing and parsing IDL source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Character that starts no token.
    #[error("unexpected character '{ch}' at {span}")]
    UnexpectedChar {
        /// Offending character.
        ch: char,
        /// Position.
        span: Span,
    },

    /// String literal without a closing quote.
    #[error("unterminated string literal starting at {span}")]
    UnterminatedString {
        /// Position of the opening quote.
        span: Span,
    },

    /// Token that does not fit the grammar.
    #[error("expected {expected}, found '{found}' at {span}")]
    UnexpectedToken {
        /// Description of what the grammar expected.
        expected: String,
        /// Token text found instead.
        found: String,
        /// Position.
        span: Span,
    },

    /// Input ended in the middle of a construct.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what the grammar expected.
        expected: String,
    },

    /// Record member that is neither a `name: Type` field nor a method.
    #[error(
        "record '{record}' may only contain `name: Type` fields and methods, found '{found}' at {span}"
    )]
    MalformedMember {
        /// Record name.
        record: String,
        /// Token text that starts the malformed member.
        found: String,
        /// Position.
        span: Span,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an unexpected token error.
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    /// Creates an unexpected end of input error.
    pub fn eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }
}

/// Error type for schema gathering, validation and type resolution.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A field's declared type does not resolve.
    #[error(
        "the type {} is not valid (field '{field}' of record '{record}')",
        shown_type(.ty, .container)
    )]
    InvalidType {
        /// The offending type expression.
        ty: String,
        /// The innermost container expression enclosing it, if any.
        container: Option<String>,
        /// Record declaring the field.
        record: String,
        /// Field name.
        field: String,
    },

    /// Two records share a name.
    #[error("duplicate record definition: '{name}' at {second} (first defined at {first})")]
    DuplicateRecord {
        /// Record name.
        name: String,
        /// Position of the first definition.
        first: Span,
        /// Position of the duplicate.
        second: Span,
    },

    /// Two fields of one record share a name.
    #[error("duplicate field '{field}' in record '{record}' at {span}")]
    DuplicateField {
        /// Record name.
        record: String,
        /// Field name.
        field: String,
        /// Position of the duplicate.
        span: Span,
    },
}

impl SchemaError {
    /// Returns true if this is an invalid type error.
    #[must_use]
    pub const fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }
}

fn shown_type<'a>(ty: &'a String, container: &'a Option<String>) -> &'a str {
    container.as_deref().unwrap_or(ty)
}
