//! Module assembly.
//!
//! The [`Generator`] checks that every schema name can be emitted, then
//! concatenates the prologue, each record followed by the unions it first
//! declared, the dispatch block and the epilogue.

use crate::config::Config;
use crate::error::CodegenError;
use crate::rust::types::{check_field_name, check_record_name};
use crate::rust::{DispatchGenerator, RecordGenerator, UnionGenerator};
use abserde_schema::Schema;
use tracing::{debug, info};

/// Main code generator.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: &'a Config,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given schema.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self { schema, config }
    }

    /// Generates the complete module source.
    ///
    /// # Returns
    /// Generated Rust source, suitable for `include!` or as a crate root.
    ///
    /// # Errors
    /// Returns `CodegenError` if the configuration is invalid or a record or
    /// field name cannot be used in Rust.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.config.validate()?;
        self.check_names()?;

        let mut output = String::new();
        output.push_str(&self.generate_header());

        let records = RecordGenerator::new(self.schema, self.config);
        let unions = UnionGenerator::new(self.schema, self.config);
        for record in &self.schema.records {
            output.push_str(&records.generate(record));
            for union in self.schema.unions_declared_by(&record.name) {
                debug!(union = %union.name, record = %record.name, "emitting union");
                output.push_str(&unions.generate(union));
            }
        }

        output.push_str(&DispatchGenerator::new(self.schema, self.config).generate());
        output.push_str(&self.generate_epilogue());

        info!(
            module = %self.config.module_name,
            records = self.schema.records.len(),
            unions = self.schema.unions.len(),
            bytes = output.len(),
            "generated module"
        );
        Ok(output)
    }

    fn check_names(&self) -> Result<(), CodegenError> {
        for record in &self.schema.records {
            check_record_name(&record.name)?;
            for field in &record.fields {
                check_field_name(&record.name, &field.name)?;
            }
        }
        Ok(())
    }

    /// Generates the file header and imports.
    fn generate_header(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "// Generated by abserde from module `{}`. Do not edit.\n",
            self.config.module_name
        ));

        if self.config.debug {
            output.push_str("//\n");
            for record in &self.schema.records {
                let fields: Vec<String> = record
                    .fields
                    .iter()
                    .map(|f| format!("{}: {}", f.name, f.ty))
                    .collect();
                output.push_str(&format!("// record {}({})\n", record.name, fields.join(", ")));
            }
            for union in &self.schema.unions {
                let members: Vec<String> =
                    union.members.iter().map(ToString::to_string).collect();
                output.push_str(&format!(
                    "// union {} = {}\n",
                    union.name,
                    members.join(" | ")
                ));
            }
            for (owner, target) in self.schema.indirections.iter() {
                output.push_str(&format!("// boxed {owner} -> {target}\n"));
            }
        }

        output.push('\n');
        output.push_str("use ::std::fmt;\n\n");

        output
    }

    /// Generates error re-exports and module registration constants.
    fn generate_epilogue(&self) -> String {
        let core = &self.config.core_path;
        let mut output = String::new();

        output.push_str(&format!(
            "pub use {core}::{{AttributeError, Error, JsonParseError, Record}};\n\n"
        ));

        output.push_str("/// Name of this module.\n");
        output.push_str(&format!(
            "pub const MODULE_NAME: &str = {:?};\n\n",
            self.config.module_name
        ));

        let names: Vec<String> = self
            .schema
            .record_names()
            .map(|n| format!("{n:?}"))
            .collect();
        output.push_str("/// Record names in declaration order.\n");
        output.push_str(&format!(
            "pub const RECORDS: &[&str] = &[{}];\n\n",
            names.join(", ")
        ));

        output.push_str("/// Module-level functions.\n");
        output.push_str("pub const FUNCTIONS: &[&str] = &[\"loads\", \"dumps\"];\n");

        output
    }
}
