//! Undirected weighted graph over a fixed dense vertex set.
//!
//! A [`WeightedGraph`] keeps two indices over the same edge set. The point
//! index owns every [`Edge`] and answers pair lookups in constant time; the
//! ordered index holds only [`crate::EdgeKey`] identifiers sorted by weight
//! and feeds the minimum spanning tree computation. Every mutating call
//! validates its arguments first and then updates both indices before
//! returning, so callers never observe the two disagreeing.

mod spanning;

use std::fmt;

use tracing::debug;

use crate::{
    Edge, OrderedIndex, SortedEdgeIndex,
    edge::canonical_pair,
    error::{GraphError, Result},
    metrics,
    point_index::PointIndex,
};

pub use self::spanning::SpanningForest;

/// Vertex count used by [`WeightedGraph::default`] and
/// [`crate::GraphBuilder::new`].
pub const DEFAULT_VERTEX_COUNT: usize = 10;

/// Undirected weighted graph with at most one edge per vertex pair.
///
/// The graph is deliberately neither `Clone` nor `Copy`.
///
/// # Examples
/// ```
/// use wgraph_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(4)?;
/// graph.insert_edge(0, 1, 1.0)?;
/// graph.insert_edge(1, 2, 2.0)?;
/// graph.insert_edge(2, 3, 3.0)?;
/// graph.insert_edge(0, 3, 10.0)?;
///
/// let forest = graph.minimum_spanning_tree();
/// assert_eq!(forest.into_pair(), (6.0, 3));
/// # Ok::<(), wgraph_core::GraphError>(())
/// ```
#[derive(Debug)]
pub struct WeightedGraph<I = SortedEdgeIndex> {
    vertex_count: usize,
    edge_count: usize,
    points: PointIndex,
    ordered: I,
}

impl WeightedGraph {
    /// Creates an empty graph over `vertex_count` vertices using the default
    /// ordered index.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero and
    /// [`GraphError::TooManyVertices`] when edge storage cannot be allocated.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_vertices(vertex_count)
    }
}

impl<I: OrderedIndex> Default for WeightedGraph<I> {
    fn default() -> Self {
        Self::from_points(DEFAULT_VERTEX_COUNT, PointIndex::new(DEFAULT_VERTEX_COUNT))
    }
}

impl<I: OrderedIndex> WeightedGraph<I> {
    /// Creates an empty graph backed by the ordered index `I`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero and
    /// [`GraphError::TooManyVertices`] when the point index for
    /// `vertex_count` vertices cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::{TreeEdgeIndex, WeightedGraph};
    ///
    /// let graph = WeightedGraph::<TreeEdgeIndex>::with_vertices(3)?;
    /// assert_eq!(graph.vertex_count(), 3);
    /// # Ok::<(), wgraph_core::GraphError>(())
    /// ```
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(rejected(GraphError::EmptyGraph));
        }
        let points = PointIndex::try_new(vertex_count).map_err(rejected)?;
        Ok(Self::from_points(vertex_count, points))
    }

    fn from_points(vertex_count: usize, points: PointIndex) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            points,
            ordered: I::default(),
        }
    }

    /// Returns the number of vertices fixed at construction.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges currently stored.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Counts the edges incident to `vertex`.
    ///
    /// Runs in `O(vertex_count)`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of this graph.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.points.degree(vertex))
    }

    /// Looks up the edge joining `left` and `right` in either order.
    ///
    /// A self-pair has no edge and yields `None`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either index is out of
    /// range.
    pub fn edge(&self, left: usize, right: usize) -> Result<Option<Edge>> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;
        if left == right {
            return Ok(None);
        }
        let (source, target) = canonical_pair(left, right);
        Ok(self.points.get(source, target))
    }

    /// Iterates over the stored edges in ascending weight order.
    ///
    /// Ties are broken by the canonical endpoints.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.ordered.ascending().filter_map(move |key| {
            let (source, target) = key.endpoints();
            self.points.get(source, target)
        })
    }

    /// Inserts an edge of `weight` between `left` and `right`.
    ///
    /// Returns `Ok(true)` when the pair holds an edge of `weight` after the
    /// call: either it was inserted, its weight was replaced, or it already
    /// carried that weight. Self-loops are not errors; they return
    /// `Ok(false)` and leave the graph untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either index is out of
    /// range and [`GraphError::InvalidWeight`] when `weight` is negative or
    /// NaN. The graph is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(3)?;
    /// assert!(graph.insert_edge(2, 0, 1.5)?);
    /// assert!(!graph.insert_edge(1, 1, 1.0)?);
    /// assert_eq!(graph.edge(0, 2)?.map(|edge| edge.weight()), Some(1.5));
    /// assert!(graph.insert_edge(0, 1, -1.0).is_err());
    /// # Ok::<(), wgraph_core::GraphError>(())
    /// ```
    pub fn insert_edge(&mut self, left: usize, right: usize, weight: f64) -> Result<bool> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;
        if weight.is_nan() || weight < 0.0 {
            return Err(rejected(GraphError::InvalidWeight { weight }));
        }
        // Folds -0.0 into +0.0 so zero-weight ties order by endpoints.
        let weight = weight + 0.0;
        if left == right {
            debug!(vertex = left, weight, "self-loop ignored");
            return Ok(false);
        }

        let (source, target) = canonical_pair(left, right);
        if let Some(existing) = self.points.get(source, target) {
            if same_weight(existing.weight(), weight) {
                return Ok(true);
            }
            debug!(
                source,
                target,
                from = existing.weight(),
                to = weight,
                "replacing edge weight"
            );
            self.detach(existing);
        }

        let edge = Edge::new(source, target, weight);
        self.points.set(edge);
        self.ordered.insert(edge.key());
        self.edge_count += 1;
        metrics::record_edge_mutation();
        debug!(source, target, weight, "edge inserted");
        Ok(true)
    }

    /// Removes the edge joining `left` and `right`.
    ///
    /// Returns `Ok(false)` when no such edge exists.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either index is out of
    /// range. The graph is unchanged on error.
    pub fn erase_edge(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;
        if left == right {
            return Ok(false);
        }
        let (source, target) = canonical_pair(left, right);
        let Some(existing) = self.points.get(source, target) else {
            return Ok(false);
        };
        self.detach(existing);
        debug!(source, target, "edge erased");
        Ok(true)
    }

    /// Removes every edge from both indices.
    pub fn clear_edges(&mut self) {
        let removed = self.edge_count;
        self.points.clear_all();
        self.ordered.clear();
        self.edge_count = 0;
        debug!(removed, "edges cleared");
    }

    fn detach(&mut self, edge: Edge) {
        self.points.clear(edge.source(), edge.target());
        self.ordered.erase(&edge.key());
        self.edge_count -= 1;
        metrics::record_edge_mutation();
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(rejected(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            }))
        }
    }
}

/// Renders one `source target weight` line per edge in ascending weight
/// order.
impl<I: OrderedIndex> fmt::Display for WeightedGraph<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges() {
            writeln!(f, "{} {} {}", edge.source(), edge.target(), edge.weight())?;
        }
        Ok(())
    }
}

#[expect(clippy::float_cmp, reason = "stored weights are compared exactly")]
fn same_weight(stored: f64, requested: f64) -> bool {
    stored == requested
}

fn rejected(error: GraphError) -> GraphError {
    debug!(code = %error.code(), %error, "graph argument rejected");
    error
}


#[cfg(test)]
mod property;
