//! Union enum code generation.

use super::types::{TypeMapper, variant_labels};
use crate::config::Config;
use abserde_schema::{Schema, UnionDef};

/// Generator for synthesized union enums.
///
/// Unions are emitted as `#[serde(untagged)]` enums: decoding tries the
/// variants in declared order and the first one that fits wins.
pub struct UnionGenerator<'a> {
    config: &'a Config,
    mapper: TypeMapper<'a>,
}

impl<'a> UnionGenerator<'a> {
    /// Creates a new union generator.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a Config) -> Self {
        Self {
            config,
            mapper: TypeMapper::new(schema, &config.core_path),
        }
    }

    /// Generates the enum and its conversions for one union.
    #[must_use]
    pub fn generate(&self, union: &UnionDef) -> String {
        let core = &self.config.core_path;
        let labels = variant_labels(&union.members);
        let types: Vec<String> = union
            .members
            .iter()
            .map(|m| self.mapper.rust_type(m, &union.name))
            .collect();
        let mut output = String::new();

        let shown: Vec<String> = union.members.iter().map(ToString::to_string).collect();
        output.push_str(&format!(
            "/// Union of `{}`, declared by `{}`.\n",
            shown.join("`, `"),
            union.declared_by
        ));
        output.push_str(&format!(
            "#[derive(Debug, Clone, PartialEq, {core}::serde::Serialize, {core}::serde::Deserialize)]\n"
        ));
        output.push_str(&format!("#[serde(crate = \"{core}::serde\", untagged)]\n"));
        output.push_str(&format!("pub enum {} {{\n", union.name));
        for ((label, ty), member) in labels.iter().zip(&types).zip(&union.members) {
            output.push_str(&format!("    /// `{member}` member.\n"));
            output.push_str(&format!("    {label}({ty}),\n"));
        }
        output.push_str("}\n\n");

        for (label, ty) in labels.iter().zip(&types) {
            output.push_str(&format!(
                "impl ::core::convert::From<{ty}> for {} {{\n",
                union.name
            ));
            output.push_str(&format!("    fn from(value: {ty}) -> Self {{\n"));
            output.push_str(&format!("        Self::{label}(value)\n"));
            output.push_str("    }\n");
            output.push_str("}\n\n");
        }

        output
    }
}
