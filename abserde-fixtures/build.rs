//! Compiles the bundled schemas into `OUT_DIR`.

const SCHEMAS: &[&str] = &[
    "schemas/multiclass.abs",
    "schemas/shapes.abs",
    "schemas/feed.abs",
    "schemas/prelude_names.abs",
];

fn main() {
    for schema in SCHEMAS {
        if let Err(err) = abserde_codegen::build::compile_schema(schema) {
            panic!("failed to compile {schema}: {err}");
        }
    }
}
