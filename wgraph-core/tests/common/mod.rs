//! Fixtures shared by the integration tests.

use rstest::fixture;
use wgraph_core::{GraphBuilder, WeightedGraph};

/// Path 0-1-2-3 with weights 1, 2, 3 plus a heavy closing edge 0-3.
#[fixture]
pub fn square() -> WeightedGraph {
    GraphBuilder::new()
        .with_vertex_count(4)
        .with_edges([(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (0, 3, 10.0)])
        .build()
        .expect("square configuration is valid")
}

/// Two disjoint edges over four vertices.
#[fixture]
pub fn split_pairs() -> WeightedGraph {
    GraphBuilder::new()
        .with_vertex_count(4)
        .with_edges([(0, 1, 1.0), (2, 3, 2.0)])
        .build()
        .expect("split configuration is valid")
}
