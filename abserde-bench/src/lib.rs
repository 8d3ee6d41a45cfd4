//! # abserde Bench
//!
//! Benchmarking utilities for abserde performance testing.

pub mod payloads;
pub mod schemas;
