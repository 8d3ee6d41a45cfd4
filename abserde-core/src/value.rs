//! Conversions between native field values and dynamic JSON values.
//!
//! Generated accessors call these helpers so that every field, whatever its
//! native type, is exchanged through [`Value`] with uniform error reporting.

use crate::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Converts a field value into a dynamic JSON value.
///
/// # Errors
/// Returns `Error::Serialize` if the value cannot be represented as JSON.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(value).map_err(Error::Serialize)
}

/// Converts a dynamic JSON value into a field's native type.
///
/// No coercion is performed: a string is never accepted for an integer field.
///
/// # Arguments
/// * `key` - Field name, used in the error
/// * `value` - Dynamic value to convert
///
/// # Errors
/// Returns `Error::TypeMismatch` carrying the key if the value has the wrong shape.
pub fn from_value<T>(key: &str, value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| Error::type_mismatch(key, e.to_string()))
}

/// Checks the argument count of a positional construction.
///
/// # Errors
/// Returns `Error::Arity` when `found` differs from `expected`.
pub fn check_arity(record: &str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::Arity {
            record: record.to_string(),
            expected,
            found,
        })
    }
}

/// Takes the next positional argument and converts it to the field type.
///
/// # Errors
/// Returns `Error::TypeMismatch` if the iterator is exhausted or the value
/// has the wrong shape.
pub fn take_arg<T, I>(args: &mut I, key: &str) -> Result<T>
where
    T: DeserializeOwned,
    I: Iterator<Item = Value>,
{
    match args.next() {
        Some(value) => from_value(key, value),
        None => Err(Error::type_mismatch(key, "missing positional argument")),
    }
}
