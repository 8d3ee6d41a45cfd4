//! The trait implemented by every generated record.
//!
//! This module provides the [`Record`] trait: JSON serialization entry points
//! plus the string-keyed mapping accessor protocol.

use crate::error::{Error, JsonParseError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Trait for generated record types.
///
/// Generated code implements the accessor methods as an exhaustive match over
/// the record's field names; the serialization methods come from the default
/// implementations here.
///
/// # Example
/// ```ignore
/// // Generated record usage
/// let mut test = Test::new(5, 2);
/// assert_eq!(test.dumps()?, r#"{"room":5,"floor":2}"#);
/// test.set("floor", serde_json::json!(10))?;
/// assert_eq!(test.get("floor")?, serde_json::json!(10));
/// ```
pub trait Record: Serialize + DeserializeOwned + Clone + std::fmt::Debug {
    /// Record name as declared in the schema.
    const NAME: &'static str;

    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Returns the value of the named field.
    ///
    /// # Errors
    /// Returns `Error::Attribute` if no field has the given name.
    fn get(&self, key: &str) -> Result<Value>;

    /// Replaces the value of the named field.
    ///
    /// # Errors
    /// Returns `Error::Attribute` if no field has the given name, or
    /// `Error::TypeMismatch` if the value does not fit the field's type.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Constructs a record from positional dynamic arguments in field order.
    ///
    /// # Errors
    /// Returns `Error::Arity` for a wrong argument count and
    /// `Error::TypeMismatch` for an argument of the wrong type.
    fn from_args(args: Vec<Value>) -> Result<Self>;

    /// Returns the number of fields.
    #[must_use]
    fn len(&self) -> usize {
        Self::FIELDS.len()
    }

    /// Returns true if the record declares no fields.
    #[must_use]
    fn is_empty(&self) -> bool {
        Self::FIELDS.is_empty()
    }

    /// Returns true if the record has a field with the given name.
    #[must_use]
    fn contains_key(&self, key: &str) -> bool {
        Self::FIELDS.contains(&key)
    }

    /// Returns `(name, value)` pairs in declaration order.
    ///
    /// # Errors
    /// Returns an error if a field value cannot be converted to JSON.
    fn items(&self) -> Result<Vec<(&'static str, Value)>> {
        Self::FIELDS
            .iter()
            .map(|&name| self.get(name).map(|value| (name, value)))
            .collect()
    }

    /// Serializes the record as compact JSON text.
    ///
    /// Keys appear in field declaration order; absent optionals are written as `null`.
    ///
    /// # Errors
    /// Returns `Error::Serialize` if serialization fails.
    fn dumps(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Serialize)
    }

    /// Serializes the record as compact JSON bytes.
    ///
    /// # Errors
    /// Returns `Error::Serialize` if serialization fails.
    fn dumps_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::Serialize)
    }

    /// Parses JSON text or bytes into a record.
    ///
    /// # Errors
    /// Returns `JsonParseError` on malformed JSON or a field/type mismatch.
    fn loads<S>(s: S) -> std::result::Result<Self, JsonParseError>
    where
        S: AsRef<[u8]>,
    {
        serde_json::from_slice(s.as_ref()).map_err(JsonParseError::from)
    }

    /// Decodes a record from an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns `JsonParseError` if the value does not match the record.
    fn from_json(value: &Value) -> std::result::Result<Self, JsonParseError> {
        Self::deserialize(value).map_err(JsonParseError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttributeError;
    use crate::value::{check_arity, from_value, take_arg, to_value};
    use serde::Deserialize;
    use serde_json::json;

    /// Hand-written equivalent of a generated `Room { room: int, floor: int }`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Room {
        room: i64,
        floor: i64,
    }

    impl Record for Room {
        const NAME: &'static str = "Room";
        const FIELDS: &'static [&'static str] = &["room", "floor"];

        fn get(&self, key: &str) -> Result<Value> {
            match key {
                "room" => to_value(&self.room),
                "floor" => to_value(&self.floor),
                _ => Err(AttributeError::new(key).into()),
            }
        }

        fn set(&mut self, key: &str, value: Value) -> Result<()> {
            match key {
                "room" => self.room = from_value(key, value)?,
                "floor" => self.floor = from_value(key, value)?,
                _ => return Err(AttributeError::new(key).into()),
            }
            Ok(())
        }

        fn from_args(args: Vec<Value>) -> Result<Self> {
            check_arity(Self::NAME, Self::FIELDS.len(), args.len())?;
            let mut args = args.into_iter();
            Ok(Self {
                room: take_arg(&mut args, "room")?,
                floor: take_arg(&mut args, "floor")?,
            })
        }
    }

    #[test]
    fn test_dumps_declaration_order() {
        let r = Room { room: 5, floor: 2 };
        assert_eq!(r.dumps().unwrap(), r#"{"room":5,"floor":2}"#);
        assert_eq!(r.dumps_bytes().unwrap(), br#"{"room":5,"floor":2}"#.to_vec());
    }

    #[test]
    fn test_loads_text_and_bytes() {
        let from_text = Room::loads(r#"{"floor": 10, "room": 4}"#).unwrap();
        let from_bytes = Room::loads(br#"{"room": 4, "floor": 10}"#).unwrap();
        assert_eq!(from_text, from_bytes);
        assert_eq!(from_text, Room { room: 4, floor: 10 });
    }

    #[test]
    fn test_loads_errors() {
        assert!(Room::loads(r#"{"invalid":"#).unwrap_err().is_syntax());
        let err = Room::loads(r#"{"room": "invalid", "floor": 5}"#).unwrap_err();
        assert!(!err.is_syntax());
    }

    #[test]
    fn test_accessor_protocol() {
        let mut r = Room { room: 5, floor: 2 };
        assert_eq!(r.get("room").unwrap(), json!(5));
        r.set("floor", json!(10)).unwrap();
        assert_eq!(r.floor, 10);
        assert!(r.get("nope").unwrap_err().is_attribute());
        assert!(r.set("nope", json!(1)).unwrap_err().is_attribute());
        assert!(matches!(
            r.set("room", json!("x")),
            Err(Error::TypeMismatch { .. })
        ));
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert!(r.contains_key("floor"));
    }

    #[test]
    fn test_items_in_order() {
        let r = Room { room: 1, floor: 3 };
        let items = r.items().unwrap();
        assert_eq!(items, vec![("room", json!(1)), ("floor", json!(3))]);
    }

    #[test]
    fn test_from_args() {
        let r = Room::from_args(vec![json!(5), json!(2)]).unwrap();
        assert_eq!(r, Room { room: 5, floor: 2 });
        assert!(matches!(
            Room::from_args(vec![json!("fail!"), json!(5.5)]),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            Room::from_args(vec![json!(1)]),
            Err(Error::Arity { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let value = json!({"room": 7, "floor": 1});
        assert_eq!(Room::from_json(&value).unwrap(), Room { room: 7, floor: 1 });
        assert!(Room::from_json(&json!({"room": 7})).is_err());
    }
}
