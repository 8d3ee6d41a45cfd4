//! # abserde Fixtures
//!
//! Modules generated at build time from the schemas under `schemas/`.
//!
//! - [`multiclass`]: two records, the second embedding the first
//! - [`shapes`]: every field shape, unions, recursion and keyword fields
//! - [`feed`]: a timeline payload used by the benchmarks
//! - [`prelude_names`]: records and fields named after prelude items

/// Generated from `schemas/multiclass.abs`.
pub mod multiclass {
    include!(concat!(env!("OUT_DIR"), "/multiclass.rs"));
}

/// Generated from `schemas/shapes.abs`.
pub mod shapes {
    include!(concat!(env!("OUT_DIR"), "/shapes.rs"));
}

/// Generated from `schemas/feed.abs`.
pub mod feed {
    include!(concat!(env!("OUT_DIR"), "/feed.rs"));
}

/// Generated from `schemas/prelude_names.abs`.
pub mod prelude_names {
    include!(concat!(env!("OUT_DIR"), "/prelude_names.rs"));
}
