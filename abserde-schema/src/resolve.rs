//! Type resolution.
//!
//! Converts the type expressions of record fields into [`TypeRef`]s,
//! consulting the record names collected by [`crate::gather`], and
//! synthesizes a named sum type for every distinct inline union.

use crate::ast::{FieldDecl, TypeExpr};
use crate::error::SchemaError;
use crate::gather::Gathered;
use crate::ir::UnionDef;
use crate::types::{Primitive, TypeRef};
use std::collections::HashMap;
use tracing::debug;

/// Keyword for the opaque JSON value type.
pub const DYNAMIC_KEYWORD: &str = "Any";

/// Keyword for synthesized sum types.
pub const UNION_KEYWORD: &str = "Union";

/// Container keywords accepted for sequences.
pub const SEQUENCE_KEYWORDS: [&str; 2] = ["List", "Sequence"];

/// Container keyword for optional values.
pub const OPTIONAL_KEYWORD: &str = "Optional";

/// Resolves field type expressions against the gathered record names.
///
/// One resolver is used for a whole schema so that identical unions declared
/// by different fields share one synthesized type.
#[derive(Debug)]
pub struct Resolver<'a> {
    records: &'a Gathered,
    unions: Vec<UnionDef>,
    union_index: HashMap<Vec<TypeRef>, usize>,
    counter: usize,
    record: String,
    field: String,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the gathered record names.
    #[must_use]
    pub fn new(records: &'a Gathered) -> Self {
        Self {
            records,
            unions: Vec::new(),
            union_index: HashMap::new(),
            counter: 0,
            record: String::new(),
            field: String::new(),
        }
    }

    /// Resolves the declared type of a field of `record`.
    ///
    /// Errors raised while resolving are attributed to this record and field.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidType` if the type does not resolve.
    pub fn resolve_field(
        &mut self,
        record: &str,
        field: &FieldDecl,
    ) -> Result<TypeRef, SchemaError> {
        record.clone_into(&mut self.record);
        field.name.clone_into(&mut self.field);
        self.resolve(&field.ty)
    }

    /// Resolves a type expression.
    ///
    /// Bare identifiers are looked up as record names first, then as
    /// primitive keywords or `Any`.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidType` if a name is unknown, a container
    /// does not have exactly one argument, a union has fewer than two
    /// distinct members, or a generic names something other than a container
    /// or `Union`.
    pub fn resolve(&mut self, expr: &TypeExpr) -> Result<TypeRef, SchemaError> {
        self.resolve_in(expr, None)
    }

    /// Consumes the resolver and returns the synthesized unions.
    #[must_use]
    pub fn into_unions(self) -> Vec<UnionDef> {
        self.unions
    }

    fn resolve_in(
        &mut self,
        expr: &TypeExpr,
        container: Option<&TypeExpr>,
    ) -> Result<TypeRef, SchemaError> {
        match expr {
            TypeExpr::Name { name, .. } => {
                if self.records.contains(name) {
                    Ok(TypeRef::Record(name.clone()))
                } else if name == DYNAMIC_KEYWORD {
                    Ok(TypeRef::Dynamic)
                } else if let Some(primitive) = Primitive::from_keyword(name) {
                    Ok(TypeRef::Primitive(primitive))
                } else {
                    Err(self.invalid(expr, container))
                }
            }
            TypeExpr::Generic { name, args, .. } => {
                if name == UNION_KEYWORD {
                    return self.resolve_union(expr, args, container);
                }

                let [inner] = args.as_slice() else {
                    return Err(self.invalid(expr, container));
                };
                if SEQUENCE_KEYWORDS.contains(&name.as_str()) {
                    let inner = self.resolve_in(inner, Some(expr))?;
                    Ok(TypeRef::Sequence(Box::new(inner)))
                } else if name == OPTIONAL_KEYWORD {
                    let inner = self.resolve_in(inner, Some(expr))?;
                    Ok(TypeRef::Optional(Box::new(inner)))
                } else {
                    Err(self.invalid(expr, container))
                }
            }
        }
    }

    fn resolve_union(
        &mut self,
        expr: &TypeExpr,
        args: &[TypeExpr],
        container: Option<&TypeExpr>,
    ) -> Result<TypeRef, SchemaError> {
        let mut members: Vec<TypeRef> = Vec::with_capacity(args.len());
        for arg in args {
            let member = self.resolve_in(arg, Some(expr))?;
            if !members.contains(&member) {
                members.push(member);
            }
        }

        if members.len() < 2 {
            return Err(self.invalid(expr, container));
        }

        if let Some(&index) = self.union_index.get(&members) {
            let existing = &self.unions[index];
            return Ok(TypeRef::Union {
                name: existing.name.clone(),
                members,
            });
        }

        let name = self.next_union_name();
        debug!(
            union = %name,
            record = %self.record,
            field = %self.field,
            members = members.len(),
            "synthesized union"
        );
        self.union_index.insert(members.clone(), self.unions.len());
        self.unions.push(UnionDef {
            name: name.clone(),
            members: members.clone(),
            declared_by: self.record.clone(),
        });
        Ok(TypeRef::Union { name, members })
    }

    fn next_union_name(&mut self) -> String {
        loop {
            self.counter += 1;
            let name = format!("{UNION_KEYWORD}{}", self.counter);
            if !self.records.contains(&name) {
                return name;
            }
        }
    }

    fn invalid(&self, expr: &TypeExpr, container: Option<&TypeExpr>) -> SchemaError {
        SchemaError::InvalidType {
            ty: expr.to_string(),
            container: container.map(ToString::to_string),
            record: self.record.clone(),
            field: self.field.clone(),
        }
    }
}
