//! Whole-schema dispatch code generation.
//!
//! Emits the `Classes` sum type over every record and the module-level
//! `loads`/`dumps` entry points that route by content or by runtime type.

use crate::config::Config;
use abserde_schema::Schema;

/// Generator for the dispatch type and module-level entry points.
pub struct DispatchGenerator<'a> {
    schema: &'a Schema,
    config: &'a Config,
}

impl<'a> DispatchGenerator<'a> {
    /// Creates a new dispatch generator.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self { schema, config }
    }

    /// Generates the dispatch block.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.generate_classes());
        output.push_str(&self.generate_classes_impl());
        output.push_str(&self.generate_loads());
        output.push_str(&self.generate_dumps());
        output
    }

    fn generate_classes(&self) -> String {
        let core = &self.config.core_path;
        let mut output = String::new();

        output.push_str("/// Any record of this module.\n");
        if self.schema.is_empty() {
            output.push_str("#[derive(Debug, Clone, PartialEq)]\n");
            output.push_str("pub enum Classes {}\n\n");
            return output;
        }

        output.push_str(&format!(
            "#[derive(Debug, Clone, PartialEq, {core}::serde::Serialize)]\n"
        ));
        output.push_str(&format!("#[serde(crate = \"{core}::serde\", untagged)]\n"));
        output.push_str("pub enum Classes {\n");
        for name in self.schema.record_names() {
            output.push_str(&format!("    /// A `{name}` record.\n"));
            output.push_str(&format!("    {name}({name}),\n"));
        }
        output.push_str("}\n\n");

        for name in self.schema.record_names() {
            output.push_str(&format!("impl ::core::convert::From<{name}> for Classes {{\n"));
            output.push_str(&format!("    fn from(value: {name}) -> Self {{\n"));
            output.push_str(&format!("        Self::{name}(value)\n"));
            output.push_str("    }\n");
            output.push_str("}\n\n");
        }

        output
    }

    fn generate_classes_impl(&self) -> String {
        let core = &self.config.core_path;
        let empty = self.schema.is_empty();
        let mut output = String::new();

        output.push_str("impl Classes {\n");

        output.push_str("    /// Returns the record name of the wrapped value.\n");
        output.push_str("    #[must_use]\n");
        output.push_str("    pub const fn name(&self) -> &'static str {\n");
        if empty {
            output.push_str("        match *self {}\n");
        } else {
            output.push_str("        match self {\n");
            for name in self.schema.record_names() {
                output.push_str(&format!("            Self::{name}(_) => {name:?},\n"));
            }
            output.push_str("        }\n");
        }
        output.push_str("    }\n\n");

        output.push_str("    /// Serializes the wrapped record as compact JSON text.\n");
        output.push_str("    ///\n");
        output.push_str("    /// # Errors\n");
        output.push_str("    /// Returns `Error::Serialize` if serialization fails.\n");
        output.push_str(&format!(
            "    pub fn dumps(&self) -> Result<String, {core}::Error> {{\n"
        ));
        if empty {
            output.push_str("        match *self {}\n");
        } else {
            output.push_str("        match self {\n");
            for name in self.schema.record_names() {
                output.push_str(&format!("            Self::{name}(record) => record.dumps(),\n"));
            }
            output.push_str("        }\n");
        }
        output.push_str("    }\n\n");

        output.push_str("    /// Parses JSON text or bytes into the first record that fits.\n");
        output.push_str("    ///\n");
        output.push_str("    /// # Errors\n");
        output.push_str(
            "    /// Returns `JsonParseError` on malformed JSON or when no record matches.\n",
        );
        output.push_str(&format!(
            "    pub fn loads(s: impl ::core::convert::AsRef<[u8]>) -> Result<Self, {core}::JsonParseError> {{\n"
        ));
        output.push_str("        loads(s)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str("impl fmt::Display for Classes {\n");
        output.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
        if empty {
            output.push_str("        let _ = f;\n");
            output.push_str("        match *self {}\n");
        } else {
            output.push_str("        match self {\n");
            for name in self.schema.record_names() {
                output.push_str(&format!(
                    "            Self::{name}(record) => fmt::Display::fmt(record, f),\n"
                ));
            }
            output.push_str("        }\n");
        }
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    fn generate_loads(&self) -> String {
        let core = &self.config.core_path;
        let mut output = String::new();

        output.push_str("/// Parses JSON text or bytes into whichever record matches first.\n");
        output.push_str("///\n");
        output.push_str("/// Records are tried in declaration order.\n");
        output.push_str("///\n");
        output.push_str("/// # Errors\n");
        output.push_str(
            "/// Returns `JsonParseError` on malformed JSON or when no record matches.\n",
        );
        output.push_str(&format!(
            "pub fn loads(s: impl ::core::convert::AsRef<[u8]>) -> Result<Classes, {core}::JsonParseError> {{\n"
        ));
        if self.schema.is_empty() {
            output.push_str(&format!(
                "    let _value: {core}::Value = {core}::serde_json::from_slice(s.as_ref())?;\n"
            ));
        } else {
            output.push_str(&format!(
                "    let value: {core}::Value = {core}::serde_json::from_slice(s.as_ref())?;\n"
            ));
            for name in self.schema.record_names() {
                output.push_str(&format!(
                    "    if let Ok(record) = <{name} as {core}::serde::Deserialize>::deserialize(&value) {{\n"
                ));
                output.push_str(&format!("        return Ok(Classes::{name}(record));\n"));
                output.push_str("    }\n");
            }
        }
        output.push_str(&format!("    Err({core}::JsonParseError::no_match(RECORDS))\n"));
        output.push_str("}\n\n");

        output
    }

    fn generate_dumps(&self) -> String {
        let core = &self.config.core_path;
        let mut output = String::new();

        output.push_str("/// Serializes any record of this module, or a `Classes` value.\n");
        output.push_str("///\n");
        output.push_str("/// # Errors\n");
        output.push_str(
            "/// Returns `Error::UnsupportedType` if the value is not one of this module's records.\n",
        );
        output.push_str(&format!(
            "pub fn dumps(value: &dyn ::std::any::Any) -> Result<String, {core}::Error> {{\n"
        ));
        for name in self.schema.record_names() {
            output.push_str(&format!(
                "    if let Some(record) = value.downcast_ref::<{name}>() {{\n"
            ));
            output.push_str("        return record.dumps();\n");
            output.push_str("    }\n");
        }
        output.push_str("    if let Some(classes) = value.downcast_ref::<Classes>() {\n");
        output.push_str("        return classes.dumps();\n");
        output.push_str("    }\n");
        output.push_str(&format!("    Err({core}::Error::unsupported_type(RECORDS))\n"));
        output.push_str("}\n\n");

        output
    }
}
