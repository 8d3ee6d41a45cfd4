//! Class gathering pre-pass.
//!
//! Collects every marked record name and every inline union member list
//! before any type is resolved, so that forward references and mutually
//! recursive records resolve regardless of declaration order.

use crate::ast::{Item, SourceFile, Span, TypeExpr};
use crate::error::SchemaError;
use std::collections::HashMap;
use tracing::debug;

/// Symbol tables produced by the gathering pass.
#[derive(Debug, Clone, Default)]
pub struct Gathered {
    /// Record names with the position of their declaration.
    records: HashMap<String, Span>,
    /// Record names in declaration order.
    order: Vec<String>,
    /// Raw member lists of every `Union[...]` expression, in encounter order.
    pub union_shapes: Vec<Vec<TypeExpr>>,
}

impl Gathered {
    /// Returns true if a record with this name was declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Returns the record names in declaration order.
    #[must_use]
    pub fn record_names(&self) -> &[String] {
        &self.order
    }

    /// Returns the number of declared records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no record was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Walks every marked record and collects its name and inline union shapes.
///
/// No type is resolved here.
///
/// # Arguments
/// * `file` - Parsed source file
///
/// # Errors
/// Returns `SchemaError::DuplicateRecord` if two records share a name.
pub fn gather(file: &SourceFile) -> Result<Gathered, SchemaError> {
    let mut gathered = Gathered::default();

    for item in &file.items {
        let record = match item {
            Item::Record(record) => record,
            Item::Declaration(decl) => {
                debug!(keyword = %decl.keyword, name = %decl.name, "skipping unmarked declaration");
                continue;
            }
            Item::Statement(stmt) => {
                debug!(keyword = %stmt.keyword, "skipping top-level statement");
                continue;
            }
        };

        if let Some(first) = gathered.records.get(&record.name) {
            return Err(SchemaError::DuplicateRecord {
                name: record.name.clone(),
                first: *first,
                second: record.span,
            });
        }
        gathered.records.insert(record.name.clone(), record.span);
        gathered.order.push(record.name.clone());

        for field in record.fields() {
            collect_unions(&field.ty, &mut gathered.union_shapes);
        }
    }

    debug!(
        records = gathered.order.len(),
        unions = gathered.union_shapes.len(),
        "gathered schema symbols"
    );
    Ok(gathered)
}

fn collect_unions(expr: &TypeExpr, out: &mut Vec<Vec<TypeExpr>>) {
    if expr.is_union() {
        out.push(expr.args().to_vec());
    }
    for arg in expr.args() {
        collect_unions(arg, out);
    }
}
