//! Resolved field types.
//!
//! This module contains [`TypeRef`], the closed set of type shapes a record
//! field can have once its type expression has been resolved.

use std::fmt;

/// Primitive field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// UTF-8 string (`str`).
    Str,
    /// 64-bit signed integer (`int`).
    Int,
    /// Boolean (`bool`).
    Bool,
    /// 64-bit float (`float`).
    Float,
}

impl Primitive {
    /// Looks up a primitive by its IDL keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "bool" => Some(Self::Bool),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    /// Returns the IDL keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Float => "float",
        }
    }

    /// Returns the corresponding Rust type.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Str => "String",
            Self::Int => "i64",
            Self::Bool => "bool",
            Self::Float => "f64",
        }
    }
}

/// Resolved type of a record field.
///
/// Equality is structural; two unions are equal when they have the same
/// name and members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Primitive value.
    Primitive(Primitive),
    /// Arbitrary JSON value passed through opaquely (`Any`).
    Dynamic,
    /// Homogeneous ordered list.
    Sequence(Box<TypeRef>),
    /// Present-or-absent wrapper.
    Optional(Box<TypeRef>),
    /// Reference to another record, by name.
    Record(String),
    /// Synthesized sum type over distinct members, in declared order.
    Union {
        /// Synthesized name.
        name: String,
        /// Members in declared order.
        members: Vec<TypeRef>,
    },
}

impl TypeRef {
    /// Returns the names of records and unions this type stores inline.
    ///
    /// Walks through `Optional` but stops at `Sequence` and at union
    /// boundaries, since a sequence is heap-allocated and a union's members
    /// belong to the union itself.
    #[must_use]
    pub fn inline_targets(&self) -> Vec<&str> {
        let mut targets = Vec::new();
        self.collect_inline(&mut targets);
        targets
    }

    fn collect_inline<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Primitive(_) | Self::Dynamic | Self::Sequence(_) => {}
            Self::Optional(inner) => inner.collect_inline(out),
            Self::Record(name) | Self::Union { name, .. } => out.push(name),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.keyword()),
            Self::Dynamic => f.write_str("Any"),
            Self::Sequence(inner) => write!(f, "List[{inner}]"),
            Self::Optional(inner) => write!(f, "Optional[{inner}]"),
            Self::Record(name) => f.write_str(name),
            Self::Union { members, .. } => {
                f.write_str("Union[")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str("]")
            }
        }
    }
}
