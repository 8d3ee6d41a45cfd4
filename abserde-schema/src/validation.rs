//! Schema validation utilities.
//!
//! This module provides structural checks run on the parsed source before
//! types are resolved.

use crate::ast::{RecordDecl, SourceFile};
use crate::error::SchemaError;
use std::collections::HashSet;

/// Validates a parsed source file for correctness.
///
/// # Arguments
/// * `file` - The parsed source to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError::DuplicateField` if a record declares a field twice.
pub fn validate_source(file: &SourceFile) -> Result<(), SchemaError> {
    for record in file.records() {
        validate_record(record)?;
    }
    Ok(())
}

/// Validates a single record declaration.
fn validate_record(record: &RecordDecl) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in record.fields() {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                record: record.name.clone(),
                field: field.name.clone(),
                span: field.span,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::parser::parse_source;

    #[test]
    fn test_validate_valid_source() {
        let file = parse_source(
            "record Test { room: int, floor: int }\n\
             record Test2 { room: str }",
        )
        .expect("Failed to parse");
        assert!(validate_source(&file).is_ok());
    }

    #[test]
    fn test_duplicate_field() {
        let file = parse_source("record Test {\n  room: int\n  room: str\n}")
            .expect("Failed to parse");
        let err = validate_source(&file).unwrap_err();
        match err {
            SchemaError::DuplicateField {
                record,
                field,
                span,
            } => {
                assert_eq!(record, "Test");
                assert_eq!(field, "room");
                assert_eq!(span, Span::new(3, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_method_may_share_field_name() {
        let file = parse_source("record Test { room: int, fn room(self) { } }")
            .expect("Failed to parse");
        assert!(validate_source(&file).is_ok());
    }
}
