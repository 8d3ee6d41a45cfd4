//! Syntax tree for the record IDL.
//!
//! The tree is a faithful, unresolved image of the source: type expressions
//! are kept as written and nothing here knows which names are primitives,
//! containers or records.

use std::fmt;

/// Position of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// One-based line number.
    pub line: usize,
    /// One-based column number.
    pub column: usize,
}

impl Span {
    /// Creates a span at the given position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A parsed source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFile {
    /// Top-level items in source order.
    pub items: Vec<Item>,
}

impl SourceFile {
    /// Returns the marked record declarations in source order.
    pub fn records(&self) -> impl Iterator<Item = &RecordDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Record(record) => Some(record),
            _ => None,
        })
    }
}

/// Top-level item.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Declaration carrying the `record` marker.
    Record(RecordDecl),
    /// Any other braced declaration, e.g. `class Helper { ... }`.
    Declaration(OpaqueDecl),
    /// Any other statement terminated by `;`, e.g. `import foo;`.
    Statement(Statement),
}

/// Marked record declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDecl {
    /// Record name.
    pub name: String,
    /// Members in source order.
    pub members: Vec<Member>,
    /// Position of the record name.
    pub span: Span,
}

impl RecordDecl {
    /// Returns the field declarations in source order, skipping methods.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Field(field) => Some(field),
            Member::Method(_) => None,
        })
    }
}

/// Unmarked braced declaration. Its body is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueDecl {
    /// Leading keyword, e.g. `class`.
    pub keyword: String,
    /// Declared name.
    pub name: String,
    /// Position of the keyword.
    pub span: Span,
}

/// Unmarked top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Leading identifier.
    pub keyword: String,
    /// Position of the leading identifier.
    pub span: Span,
}

/// Member of a record body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// `name: Type` field declaration.
    Field(FieldDecl),
    /// `fn name ...` method, ignored by the compiler.
    Method(MethodDecl),
}

/// Field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type expression.
    pub ty: TypeExpr,
    /// Position of the field name.
    pub span: Span,
}

/// Method declaration. Only its name is retained.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Position of the `fn` keyword.
    pub span: Span,
}

/// Unresolved type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// Bare identifier, e.g. `int` or `Test`.
    Name {
        /// Identifier.
        name: String,
        /// Position.
        span: Span,
    },
    /// Subscripted identifier, e.g. `List[int]` or `Union[int, str]`.
    Generic {
        /// Identifier before the brackets.
        name: String,
        /// Bracketed arguments.
        args: Vec<TypeExpr>,
        /// Position.
        span: Span,
    },
}

impl TypeExpr {
    /// Returns the leading identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name { name, .. } | Self::Generic { name, .. } => name,
        }
    }

    /// Returns the bracketed arguments; empty for a bare name.
    #[must_use]
    pub fn args(&self) -> &[TypeExpr] {
        match self {
            Self::Name { .. } => &[],
            Self::Generic { args, .. } => args,
        }
    }

    /// Returns the source position.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Name { span, .. } | Self::Generic { span, .. } => *span,
        }
    }

    /// Returns true if this is a `Union[...]` expression.
    #[must_use]
    pub fn is_union(&self) -> bool {
        matches!(self, Self::Generic { name, .. } if name == "Union")
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { name, .. } => f.write_str(name),
            Self::Generic { name, args, .. } => {
                write!(f, "{name}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str("]")
            }
        }
    }
}
