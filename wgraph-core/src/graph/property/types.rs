//! Fixture and operation types for graph property tests.

use test_strategy::Arbitrary;

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// Random spanning tree plus a handful of extra edges.
    #[weight(3)]
    Sparse,
    /// Most vertex pairs joined.
    #[weight(2)]
    Dense,
    /// Several blocks with no edges between them, plus isolated vertices.
    #[weight(2)]
    Disconnected,
    /// Weights drawn from a tiny set so ties dominate.
    #[weight(2)]
    ManyIdentical,
}

/// A generated graph: vertex count plus `(left, right, weight)` triples.
///
/// Triples may repeat a pair; later triples replace earlier weights.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    pub topology: Topology,
}

/// One step of a mutation sequence. Vertex indices may fall one past the
/// end of the graph and weights may be negative so rejected calls are
/// exercised too.
#[derive(Clone, Copy, Debug, Arbitrary)]
pub(super) enum GraphOp {
    #[weight(5)]
    Insert(
        #[strategy(0usize..=MAX_VERTICES)] usize,
        #[strategy(0usize..=MAX_VERTICES)] usize,
        #[strategy(-1i8..6)] i8,
    ),
    #[weight(3)]
    Erase(
        #[strategy(0usize..=MAX_VERTICES)] usize,
        #[strategy(0usize..=MAX_VERTICES)] usize,
    ),
    #[weight(1)]
    Degree(#[strategy(0usize..=MAX_VERTICES)] usize),
    #[weight(1)]
    Clear,
}

/// Vertex count used by the mutation property.
pub(super) const MAX_VERTICES: usize = 6;
