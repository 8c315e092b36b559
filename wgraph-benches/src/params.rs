//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Debug)]
pub struct SpanningBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges stored before the run.
    pub edge_count: usize,
}

impl fmt::Display for SpanningBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Parameters for an insert/erase churn benchmark run.
#[derive(Clone, Debug)]
pub struct ChurnBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Ordered index backing the graph.
    pub index: &'static str,
}

impl fmt::Display for ChurnBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.index, self.vertex_count)
    }
}
