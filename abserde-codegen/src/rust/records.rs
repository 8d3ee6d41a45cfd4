//! Record struct code generation.
//!
//! Each record becomes a plain struct with serde derives, a typed constructor,
//! inherent JSON entry points, the string-keyed `Record` accessor protocol
//! from `abserde-core`, and `Display`/`Debug` implementations.

use super::types::{TypeMapper, field_ident, param_idents};
use crate::config::Config;
use abserde_schema::{RecordDef, Schema};

/// Generator for record structs.
pub struct RecordGenerator<'a> {
    config: &'a Config,
    mapper: TypeMapper<'a>,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self {
            config,
            mapper: TypeMapper::new(schema, &config.core_path),
        }
    }

    /// Generates every item for one record.
    #[must_use]
    pub fn generate(&self, record: &RecordDef) -> String {
        let mut output = String::new();
        output.push_str(&self.generate_struct(record));
        output.push_str(&self.generate_inherent(record));
        output.push_str(&self.generate_record_impl(record));
        output.push_str(&self.generate_display(record));
        output.push_str(&self.generate_debug(record));
        output
    }

    fn field_types(&self, record: &RecordDef) -> Vec<(String, String)> {
        record
            .fields
            .iter()
            .map(|f| (field_ident(&f.name), self.mapper.rust_type(&f.ty, &record.name)))
            .collect()
    }

    /// Generates the struct definition.
    fn generate_struct(&self, record: &RecordDef) -> String {
        let core = &self.config.core_path;
        let mut output = String::new();

        output.push_str(&format!("/// Record `{}`.\n", record.name));
        output.push_str(&format!(
            "#[derive(Clone, PartialEq, {core}::serde::Serialize, {core}::serde::Deserialize)]\n"
        ));
        output.push_str(&format!("#[serde(crate = \"{core}::serde\")]\n"));
        if has_mixed_case_field(record) {
            output.push_str("#[allow(non_snake_case)]\n");
        }
        output.push_str(&format!("pub struct {} {{\n", record.name));
        for (field, (ident, ty)) in record.fields.iter().zip(self.field_types(record)) {
            output.push_str(&format!("    /// Field `{}: {}`.\n", field.name, field.ty));
            output.push_str(&format!("    pub {ident}: {ty},\n"));
        }
        output.push_str("}\n\n");

        output
    }

    /// Generates the constructor and inherent JSON entry points.
    fn generate_inherent(&self, record: &RecordDef) -> String {
        let core = &self.config.core_path;
        let fields = self.field_types(record);
        let mut output = String::new();

        output.push_str(&format!("impl {} {{\n", record.name));

        let names: Vec<&str> = record.fields.iter().map(|f| f.name.as_str()).collect();
        let bindings = param_idents(&names);
        let params: Vec<String> = bindings
            .iter()
            .zip(&fields)
            .map(|(p, (_, t))| format!("{p}: {t}"))
            .collect();
        let idents: Vec<String> = bindings
            .iter()
            .zip(&fields)
            .map(|(p, (i, _))| if p == i { i.clone() } else { format!("{i}: {p}") })
            .collect();
        output.push_str(&format!(
            "    /// Creates a new `{}` from its fields in declaration order.\n",
            record.name
        ));
        if fields.len() > 7 {
            output.push_str("    #[allow(clippy::too_many_arguments)]\n");
        }
        if has_mixed_case_field(record) {
            output.push_str("    #[allow(non_snake_case)]\n");
        }
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn new({}) -> Self {{\n",
            params.join(", ")
        ));
        if idents.is_empty() {
            output.push_str("        Self {}\n");
        } else {
            output.push_str(&format!("        Self {{ {} }}\n", idents.join(", ")));
        }
        output.push_str("    }\n\n");

        output.push_str(&format!(
            "    /// Parses JSON text or bytes into a `{}`.\n",
            record.name
        ));
        output.push_str("    ///\n");
        output.push_str("    /// # Errors\n");
        output.push_str(
            "    /// Returns `JsonParseError` on malformed JSON or a field/type mismatch.\n",
        );
        output.push_str(&format!(
            "    pub fn loads(s: impl ::core::convert::AsRef<[u8]>) -> Result<Self, {core}::JsonParseError> {{\n"
        ));
        output.push_str(&format!(
            "        <Self as {core}::Record>::loads(s)\n"
        ));
        output.push_str("    }\n\n");

        output.push_str("    /// Serializes as compact JSON text in field declaration order.\n");
        output.push_str("    ///\n");
        output.push_str("    /// # Errors\n");
        output.push_str("    /// Returns `Error::Serialize` if serialization fails.\n");
        output.push_str(&format!(
            "    pub fn dumps(&self) -> Result<String, {core}::Error> {{\n"
        ));
        output.push_str(&format!("        <Self as {core}::Record>::dumps(self)\n"));
        output.push_str("    }\n\n");

        output.push_str("    /// Serializes as compact JSON bytes.\n");
        output.push_str("    ///\n");
        output.push_str("    /// # Errors\n");
        output.push_str("    /// Returns `Error::Serialize` if serialization fails.\n");
        output.push_str(&format!(
            "    pub fn dumps_bytes(&self) -> Result<Vec<u8>, {core}::Error> {{\n"
        ));
        output.push_str(&format!(
            "        <Self as {core}::Record>::dumps_bytes(self)\n"
        ));
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates the accessor protocol implementation.
    fn generate_record_impl(&self, record: &RecordDef) -> String {
        let core = &self.config.core_path;
        let mut output = String::new();

        output.push_str(&format!("impl {core}::Record for {} {{\n", record.name));
        output.push_str(&format!(
            "    const NAME: &'static str = {:?};\n",
            record.name
        ));
        let names: Vec<String> = record.fields.iter().map(|f| format!("{:?}", f.name)).collect();
        output.push_str(&format!(
            "    const FIELDS: &'static [&'static str] = &[{}];\n\n",
            names.join(", ")
        ));

        // get
        output.push_str(&format!(
            "    fn get(&self, key: &str) -> {core}::Result<{core}::Value> {{\n"
        ));
        if record.fields.is_empty() {
            output.push_str(&format!(
                "        Err({core}::AttributeError::new(key).into())\n"
            ));
        } else {
            output.push_str("        match key {\n");
            for field in &record.fields {
                output.push_str(&format!(
                    "            {:?} => {core}::to_value(&self.{}),\n",
                    field.name,
                    field_ident(&field.name)
                ));
            }
            output.push_str(&format!(
                "            _ => Err({core}::AttributeError::new(key).into()),\n"
            ));
            output.push_str("        }\n");
        }
        output.push_str("    }\n\n");

        // set
        if record.fields.is_empty() {
            output.push_str(&format!(
                "    fn set(&mut self, key: &str, _value: {core}::Value) -> {core}::Result<()> {{\n"
            ));
            output.push_str(&format!(
                "        Err({core}::AttributeError::new(key).into())\n"
            ));
        } else {
            output.push_str(&format!(
                "    fn set(&mut self, key: &str, value: {core}::Value) -> {core}::Result<()> {{\n"
            ));
            output.push_str("        match key {\n");
            for field in &record.fields {
                output.push_str(&format!(
                    "            {:?} => self.{} = {core}::from_value(key, value)?,\n",
                    field.name,
                    field_ident(&field.name)
                ));
            }
            output.push_str(&format!(
                "            _ => return Err({core}::AttributeError::new(key).into()),\n"
            ));
            output.push_str("        }\n");
            output.push_str("        Ok(())\n");
        }
        output.push_str("    }\n\n");

        // from_args
        output.push_str(&format!(
            "    fn from_args(args: Vec<{core}::Value>) -> {core}::Result<Self> {{\n"
        ));
        output.push_str(&format!(
            "        {core}::check_arity(Self::NAME, Self::FIELDS.len(), args.len())?;\n"
        ));
        if record.fields.is_empty() {
            output.push_str("        Ok(Self {})\n");
        } else {
            output.push_str("        let mut args = args.into_iter();\n");
            output.push_str("        Ok(Self {\n");
            for field in &record.fields {
                output.push_str(&format!(
                    "            {}: {core}::take_arg(&mut args, {:?})?,\n",
                    field_ident(&field.name),
                    field.name
                ));
            }
            output.push_str("        })\n");
        }
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates `Display`, which writes the same text as `dumps`.
    fn generate_display(&self, record: &RecordDef) -> String {
        let core = &self.config.core_path;
        let mut output = String::new();

        output.push_str(&format!("impl fmt::Display for {} {{\n", record.name));
        output.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
        output.push_str(&format!(
            "        let text = <Self as {core}::Record>::dumps(self).map_err(|_| fmt::Error)?;\n"
        ));
        output.push_str("        f.write_str(&text)\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates `Debug` as `Name(field=value, ...)`.
    fn generate_debug(&self, record: &RecordDef) -> String {
        let mut output = String::new();

        output.push_str(&format!("impl fmt::Debug for {} {{\n", record.name));
        output.push_str("    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {\n");
        if record.fields.is_empty() {
            output.push_str(&format!("        f.write_str(\"{}()\")\n", record.name));
        } else {
            let pattern: Vec<String> = record
                .fields
                .iter()
                .map(|f| format!("{}={{:?}}", f.name))
                .collect();
            let args: Vec<String> = record
                .fields
                .iter()
                .map(|f| format!("self.{}", field_ident(&f.name)))
                .collect();
            output.push_str(&format!(
                "        write!(f, \"{}({})\", {})\n",
                record.name,
                pattern.join(", "),
                args.join(", ")
            ));
        }
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output
    }
}

/// JSON keys such as `retweetCount` become fields verbatim.
fn has_mixed_case_field(record: &RecordDef) -> bool {
    record
        .fields
        .iter()
        .any(|f| f.name.chars().any(|c| c.is_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use abserde_schema::compile;

    fn generate(source: &str, name: &str) -> String {
        let schema = compile(source).expect("Failed to compile");
        let config = Config::default();
        let generator = RecordGenerator::new(&schema, &config);
        generator.generate(schema.record(name).expect("record"))
    }

    #[test]
    fn test_generate_struct() {
        let output = generate("record Test { room: int, floor: int }", "Test");

        assert!(output.contains("pub struct Test {"));
        assert!(output.contains("    pub room: i64,"));
        assert!(output.contains("    pub floor: i64,"));
        assert!(output.contains("#[serde(crate = \"::abserde_core::serde\")]"));
        assert!(output.contains("pub fn new(room: i64, floor: i64) -> Self"));
        assert!(output.contains("Self { room, floor }"));
    }

    #[test]
    fn test_generate_accessors_in_declaration_order() {
        let output = generate("record Test { room: int, floor: int }", "Test");

        assert!(output.contains("const FIELDS: &'static [&'static str] = &[\"room\", \"floor\"];"));
        let room = output.find("\"room\" => ::abserde_core::to_value").expect("room getter");
        let floor = output.find("\"floor\" => ::abserde_core::to_value").expect("floor getter");
        assert!(room < floor);
        assert!(output.contains("_ => Err(::abserde_core::AttributeError::new(key).into())"));
        assert!(output.contains("take_arg(&mut args, \"floor\")?"));
    }

    #[test]
    fn test_generate_debug_format() {
        let output = generate("record Test { room: int, floor: int }", "Test");
        assert!(output.contains("write!(f, \"Test(room={:?}, floor={:?})\", self.room, self.floor)"));
    }

    #[test]
    fn test_prelude_variant_fields_bound_positionally() {
        let output = generate("record T { None: int, Some: str, RECORDS: bool }", "T");
        assert!(output.contains("pub fn new(arg0: i64, arg1: String, arg2: bool) -> Self"));
        assert!(output.contains("Self { None: arg0, Some: arg1, RECORDS: arg2 }"));
        assert!(output.contains("    pub None: i64,"));
        assert!(output.contains("#[allow(non_snake_case)]\npub struct T {"));
    }

    #[test]
    fn test_keyword_fields_are_raw() {
        let output = generate("record Token { type: str, value: int }", "Token");
        assert!(output.contains("pub r#type: String,"));
        assert!(output.contains("\"type\" => self.r#type = "));
        assert!(output.contains("const FIELDS: &'static [&'static str] = &[\"type\", \"value\"];"));
    }

    #[test]
    fn test_empty_record() {
        let output = generate("record Empty { }", "Empty");
        assert!(output.contains("pub struct Empty {\n}"));
        assert!(output.contains("pub fn new() -> Self"));
        assert!(output.contains("_value: ::abserde_core::Value"));
        assert!(output.contains("f.write_str(\"Empty()\")"));
    }

    #[test]
    fn test_recursive_field_boxed() {
        let output = generate("record Node { value: int, next: Optional[Node] }", "Node");
        assert!(output.contains("pub next: Option<Box<Node>>,"));
    }

    #[test]
    fn test_custom_core_path() {
        let schema = compile("record Test { data: Any }").expect("Failed to compile");
        let config = Config::default().core_path("::abserde::core");
        let output = RecordGenerator::new(&schema, &config).generate(&schema.records[0]);
        assert!(output.contains("pub data: ::abserde::core::Value,"));
        assert!(output.contains("impl ::abserde::core::Record for Test"));
    }
}
