//! Rust type mapping and identifier handling.

use crate::error::CodegenError;
use abserde_schema::ir::to_pascal_case;
use abserde_schema::{Schema, TypeRef};

/// Rust keywords, strict and reserved, as of the 2024 edition.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Value-namespace names in scope of the generated module that a binding
/// pattern cannot shadow.
const PATTERN_RESERVED: &[&str] = &[
    "None", "Some", "Ok", "Err", "MODULE_NAME", "RECORDS", "FUNCTIONS",
];

/// Names a record may not take because the generated module already uses them.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "str", "bool", "i64", "f64", "usize", "String", "Vec", "Option", "Box", "Result", "Value",
    "Record", "Error", "JsonParseError", "AttributeError", "Classes", "Serialize",
    "Deserialize", "fmt", "std", "core", "serde", "serde_json",
];

/// Returns true if `name` is a Rust keyword.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Returns the identifier to use for a field, raw-escaping keywords.
#[must_use]
pub fn field_ident(name: &str) -> String {
    if is_keyword(name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Returns the constructor parameter name for each field, in order.
///
/// Fields whose name would resolve to a variant or constant in pattern
/// position are bound positionally as `argN`, skipping any name a field
/// already uses.
#[must_use]
pub fn param_idents(fields: &[&str]) -> Vec<String> {
    fields
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if !PATTERN_RESERVED.contains(name) {
                return field_ident(name);
            }
            let mut param = format!("arg{index}");
            while fields.contains(&param.as_str()) {
                param.insert(0, '_');
            }
            param
        })
        .collect()
}

/// Checks that a record name can be used as a generated type name.
///
/// # Errors
/// Returns `CodegenError::ReservedName` for keywords and names the generated
/// module already defines or imports.
pub fn check_record_name(name: &str) -> Result<(), CodegenError> {
    if is_keyword(name) || NON_RAW.contains(&name) || RESERVED_TYPE_NAMES.contains(&name) {
        return Err(CodegenError::reserved(name, "a record name"));
    }
    Ok(())
}

/// Checks that a field name can be used as a struct field.
///
/// Keywords are accepted and emitted as raw identifiers, except the few that
/// Rust does not allow in raw form.
///
/// # Errors
/// Returns `CodegenError::ReservedName` for `self`, `Self`, `super`, `crate`
/// and `_`.
pub fn check_field_name(record: &str, name: &str) -> Result<(), CodegenError> {
    if NON_RAW.contains(&name) {
        return Err(CodegenError::reserved(
            name,
            format!("a field name (record '{record}')"),
        ));
    }
    Ok(())
}

/// Maps resolved types to Rust type syntax.
pub struct TypeMapper<'a> {
    schema: &'a Schema,
    core: &'a str,
}

impl<'a> TypeMapper<'a> {
    /// Creates a new type mapper.
    #[must_use]
    pub fn new(schema: &'a Schema, core: &'a str) -> Self {
        Self { schema, core }
    }

    /// Returns the Rust type of `ty` stored inside `owner`.
    ///
    /// Records and unions that would make `owner` infinitely sized are boxed.
    #[must_use]
    pub fn rust_type(&self, ty: &TypeRef, owner: &str) -> String {
        self.map(ty, owner, true)
    }

    fn map(&self, ty: &TypeRef, owner: &str, inline: bool) -> String {
        match ty {
            TypeRef::Primitive(p) => p.rust_type().to_string(),
            TypeRef::Dynamic => format!("{}::Value", self.core),
            // Vec already stores its elements on the heap.
            TypeRef::Sequence(inner) => format!("Vec<{}>", self.map(inner, owner, false)),
            TypeRef::Optional(inner) => format!("Option<{}>", self.map(inner, owner, inline)),
            TypeRef::Record(name) | TypeRef::Union { name, .. } => {
                if inline && self.schema.needs_box(owner, name) {
                    format!("Box<{name}>")
                } else {
                    name.clone()
                }
            }
        }
    }
}

/// Returns the enum variant label for a union member.
#[must_use]
pub fn variant_label(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(p) => to_pascal_case(p.keyword()),
        TypeRef::Dynamic => "Any".to_string(),
        TypeRef::Sequence(inner) => format!("List{}", variant_label(inner)),
        TypeRef::Optional(inner) => format!("Optional{}", variant_label(inner)),
        TypeRef::Record(name) => to_pascal_case(name),
        TypeRef::Union { name, .. } => name.clone(),
    }
}

/// Returns distinct variant labels for a list of union members.
///
/// A label already taken, or one that is a keyword, gets a numeric suffix.
#[must_use]
pub fn variant_labels(members: &[TypeRef]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::with_capacity(members.len());
    for member in members {
        let base = variant_label(member);
        let mut label = base.clone();
        let mut suffix = 1;
        while is_keyword(&label) || labels.contains(&label) {
            label = format!("{base}{suffix}");
            suffix += 1;
        }
        labels.push(label);
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use abserde_schema::{Primitive, compile};

    #[test]
    fn test_field_ident() {
        assert_eq!(field_ident("room"), "room");
        assert_eq!(field_ident("type"), "r#type");
        assert_eq!(field_ident("gen"), "r#gen");
    }

    #[test]
    fn test_param_idents() {
        assert_eq!(param_idents(&["room", "type"]), vec!["room", "r#type"]);
        assert_eq!(
            param_idents(&["None", "Some", "RECORDS"]),
            vec!["arg0", "arg1", "arg2"]
        );
        assert_eq!(param_idents(&["Ok", "arg0"]), vec!["_arg0", "arg0"]);
    }

    #[test]
    fn test_record_name_checks() {
        assert!(check_record_name("Test").is_ok());
        assert!(check_record_name("Classes").is_err());
        assert!(check_record_name("struct").is_err());
        assert!(check_record_name("Self").is_err());
        assert!(check_record_name("Value").is_err());
    }

    #[test]
    fn test_field_name_checks() {
        assert!(check_field_name("T", "type").is_ok());
        assert!(check_field_name("T", "self").is_err());
        assert!(check_field_name("T", "_").is_err());
    }

    #[test]
    fn test_rust_type_mapping() {
        let schema = compile(
            "record Test { room: int }\n\
             record Node { a: List[Optional[str]], b: Optional[Node], c: List[Node], d: Any, e: Test }",
        )
        .expect("Failed to compile");
        let mapper = TypeMapper::new(&schema, "::abserde_core");
        let node = schema.record("Node").expect("Node");
        let types: Vec<_> = node
            .fields
            .iter()
            .map(|f| mapper.rust_type(&f.ty, "Node"))
            .collect();
        assert_eq!(
            types,
            vec![
                "Vec<Option<String>>",
                "Option<Box<Node>>",
                "Vec<Node>",
                "::abserde_core::Value",
                "Test",
            ]
        );
    }

    #[test]
    fn test_variant_labels() {
        let members = vec![
            TypeRef::Primitive(Primitive::Int),
            TypeRef::Primitive(Primitive::Str),
            TypeRef::Sequence(Box::new(TypeRef::Primitive(Primitive::Float))),
            TypeRef::Optional(Box::new(TypeRef::Record("my_rec".into()))),
            TypeRef::Dynamic,
        ];
        assert_eq!(
            variant_labels(&members),
            vec!["Int", "Str", "ListFloat", "OptionalMyRec", "Any"]
        );
    }

    #[test]
    fn test_variant_labels_deduplicated() {
        let members = vec![
            TypeRef::Record("my_rec".into()),
            TypeRef::Record("MyRec".into()),
            TypeRef::Record("self_".into()),
        ];
        assert_eq!(variant_labels(&members), vec!["MyRec", "MyRec1", "Self1"]);
    }
}
