//! Rust code generation modules.

pub mod dispatch;
pub mod records;
pub mod types;
pub mod unions;

pub use dispatch::DispatchGenerator;
pub use records::RecordGenerator;
pub use types::TypeMapper;
pub use unions::UnionGenerator;
