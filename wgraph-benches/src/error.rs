//! Benchmark setup error type.

use wgraph_core::GraphError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building or mutating the graph failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// Edge density was outside `(0, 1]`.
    #[error("edge density {density} must lie in (0, 1]")]
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },
    /// The maximum weight was not a positive finite number.
    #[error("maximum weight {max_weight} must be positive and finite")]
    InvalidMaxWeight {
        /// The rejected maximum weight.
        max_weight: f64,
    },
}
