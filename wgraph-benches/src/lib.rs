//! Benchmark support crate for wgraph.
//!
//! Provides seeded random graph generation and parameter types used by the
//! Criterion benchmarks for spanning tree computation and edge churn.

pub mod error;
pub mod params;
pub mod source;
