//! Intermediate representation for code generation.
//!
//! This module provides the resolved representation of a schema: records in
//! declaration order with fully resolved field types, the synthesized unions,
//! and the table of references that must be boxed.

use crate::ast::SourceFile;
use crate::error::SchemaError;
use crate::gather::gather;
use crate::indirection::Indirections;
use crate::resolve::Resolver;
use crate::types::TypeRef;
use crate::validation::validate_source;
use tracing::{debug, info};

/// Resolved schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Records in declaration order.
    pub records: Vec<RecordDef>,
    /// Synthesized unions in first-encountered order.
    pub unions: Vec<UnionDef>,
    /// References that must be stored behind a `Box`.
    pub indirections: Indirections,
}

impl Schema {
    /// Builds a resolved schema from a parsed source file.
    ///
    /// Gathers every record name first so that references resolve regardless
    /// of declaration order, then validates and resolves each record.
    ///
    /// # Arguments
    /// * `file` - Parsed source file
    ///
    /// # Errors
    /// Returns `SchemaError` on duplicate names or unresolvable types.
    pub fn from_source(file: &SourceFile) -> Result<Self, SchemaError> {
        let gathered = gather(file)?;
        validate_source(file)?;

        let mut resolver = Resolver::new(&gathered);
        let mut records = Vec::with_capacity(gathered.len());

        for decl in file.records() {
            let mut fields = Vec::new();
            for field in decl.fields() {
                let ty = resolver.resolve_field(&decl.name, field)?;
                fields.push(FieldDef {
                    name: field.name.clone(),
                    ty,
                });
            }
            debug!(record = %decl.name, fields = fields.len(), "resolved record");
            records.push(RecordDef {
                name: decl.name.clone(),
                fields,
            });
        }

        let unions = resolver.into_unions();
        let indirections = Indirections::compute(&records, &unions);
        info!(
            records = records.len(),
            unions = unions.len(),
            boxed = indirections.len(),
            "schema resolved"
        );

        Ok(Self {
            records,
            unions,
            indirections,
        })
    }

    /// Gets a record by name.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&RecordDef> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Gets a synthesized union by name.
    #[must_use]
    pub fn union(&self, name: &str) -> Option<&UnionDef> {
        self.unions.iter().find(|u| u.name == name)
    }

    /// Returns the unions first synthesized by a record's fields, in order.
    pub fn unions_declared_by<'a>(
        &'a self,
        record: &'a str,
    ) -> impl Iterator<Item = &'a UnionDef> + 'a {
        self.unions.iter().filter(move |u| u.declared_by == record)
    }

    /// Returns true if `target` must be boxed where `owner` stores it inline.
    #[must_use]
    pub fn needs_box(&self, owner: &str, target: &str) -> bool {
        self.indirections.needs_box(owner, target)
    }

    /// Returns the record names in declaration order.
    pub fn record_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Returns true if the schema declares no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolved record definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    /// Record name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl RecordDef {
    /// Gets a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Resolved field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Resolved type.
    pub ty: TypeRef,
}

/// Synthesized union definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDef {
    /// Synthesized name, e.g. `Union1`.
    pub name: String,
    /// Distinct members in declared order.
    pub members: Vec<TypeRef>,
    /// Record whose field first synthesized this union.
    pub declared_by: String,
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
