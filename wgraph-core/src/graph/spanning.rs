//! Kruskal minimum spanning tree/forest over a [`WeightedGraph`].
//!
//! Edges are taken from the ordered index in ascending weight order and
//! offered to a [`DisjointSets`] implementation, which decides whether each
//! one merges two components. The walk stops as soon as a single set remains.
//! Otherwise it visits every stored edge and reports a spanning forest.

use tracing::{debug, instrument, trace};

use crate::{DisjointSets, Edge, OrderedIndex, WeightedUnionFind, metrics};

use super::WeightedGraph;

/// Result of a minimum spanning tree computation.
///
/// When the graph is connected the accepted edges form a minimum spanning
/// tree; otherwise they form a minimum spanning forest with one tree per
/// component.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    total_weight: f64,
    edges_tested: usize,
    component_count: usize,
    edges: Vec<Edge>,
}

impl SpanningForest {
    /// Returns the summed weight of the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns how many edges the traversal visited before stopping.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_tested(&self) -> usize { self.edges_tested }

    /// Returns the number of components left after the traversal.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the accepted edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns `true` when the forest spans a single component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns `(total weight, edges examined)`.
    #[must_use]
    pub fn into_pair(self) -> (f64, usize) {
        (self.total_weight, self.edges_tested)
    }
}

impl From<SpanningForest> for (f64, usize) {
    fn from(forest: SpanningForest) -> Self {
        forest.into_pair()
    }
}

impl<I: OrderedIndex> WeightedGraph<I> {
    /// Computes a minimum spanning tree, or a minimum spanning forest when
    /// the graph is disconnected, with Kruskal's algorithm.
    ///
    /// Each call recomputes from scratch and leaves the graph untouched.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(4)?;
    /// graph.insert_edge(0, 1, 1.0)?;
    /// graph.insert_edge(2, 3, 2.0)?;
    ///
    /// let forest = graph.minimum_spanning_tree();
    /// assert!(!forest.is_tree());
    /// assert_eq!(forest.component_count(), 2);
    /// assert_eq!(forest.into_pair(), (3.0, 2));
    /// # Ok::<(), wgraph_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn minimum_spanning_tree(&self) -> SpanningForest {
        self.minimum_spanning_tree_with::<WeightedUnionFind>()
    }

    /// Runs [`Self::minimum_spanning_tree`] with a caller-chosen disjoint-set
    /// implementation.
    #[must_use]
    #[instrument(
        name = "graph.minimum_spanning_tree",
        skip(self),
        fields(vertex_count = self.vertex_count, edge_count = self.edge_count),
    )]
    pub fn minimum_spanning_tree_with<U: DisjointSets>(&self) -> SpanningForest {
        let mut sets = U::with_singletons(self.vertex_count);
        let mut accepted = Vec::with_capacity(self.vertex_count.saturating_sub(1));
        let mut edges_tested = 0;

        for key in self.ordered.ascending() {
            edges_tested += 1;
            let (source, target) = key.endpoints();
            let merged = sets.union(source, target, key.weight());
            if merged {
                accepted.push(Edge::from(key));
            }
            trace!(source, target, weight = key.weight(), merged, "edge examined");

            if sets.set_count() == 1 {
                debug!(edges_tested, "spanning tree complete");
                return finish(&sets, edges_tested, accepted);
            }
        }

        debug!(
            edges_tested,
            components = sets.set_count(),
            "edges exhausted; returning spanning forest"
        );
        finish(&sets, edges_tested, accepted)
    }
}

fn finish<U: DisjointSets>(sets: &U, edges_tested: usize, edges: Vec<Edge>) -> SpanningForest {
    metrics::record_spanning_run(edges_tested);
    SpanningForest {
        total_weight: sets.total_weight(),
        edges_tested,
        component_count: sets.set_count(),
        edges,
    }
}
