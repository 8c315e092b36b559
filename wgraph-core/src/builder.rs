//! Builder for configuring and populating [`WeightedGraph`] instances.
//!
//! The builder stages a vertex count and a list of edges, then validates and
//! replays them through [`WeightedGraph::insert_edge`] on [`GraphBuilder::build`].

use tracing::instrument;

use crate::{
    OrderedIndex, Result,
    graph::{DEFAULT_VERTEX_COUNT, WeightedGraph},
};

/// Configures and constructs [`WeightedGraph`] instances.
///
/// # Examples
/// ```
/// use wgraph_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_vertex_count(4)
///     .with_edge(0, 1, 1.0)
///     .with_edges([(1, 2, 2.0), (2, 3, 3.0)])
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.minimum_spanning_tree().is_tree());
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            edges: Vec::new(),
        }
    }
}

impl GraphBuilder {
    /// Creates a builder for a graph of [`DEFAULT_VERTEX_COUNT`] vertices and
    /// no edges.
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::{DEFAULT_VERTEX_COUNT, GraphBuilder};
    ///
    /// assert_eq!(GraphBuilder::new().vertex_count(), DEFAULT_VERTEX_COUNT);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Stages one edge. Later stagings of the same pair win.
    #[must_use]
    pub fn with_edge(mut self, left: usize, right: usize, weight: f64) -> Self {
        self.edges.push((left, right, weight));
        self
    }

    /// Stages every `(left, right, weight)` triple from `edges`.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (usize, usize, f64)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Validates the configuration and builds a graph with the default
    /// ordered index.
    ///
    /// Staged self-loops are skipped exactly as
    /// [`WeightedGraph::insert_edge`] skips them.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::EmptyGraph`] for a zero vertex count and
    /// the first error any staged edge produces.
    pub fn build(self) -> Result<WeightedGraph> {
        self.build_with_index()
    }

    /// Like [`Self::build`], backed by the ordered index `I`.
    ///
    /// # Errors
    /// See [`Self::build`].
    ///
    /// # Examples
    /// ```
    /// use wgraph_core::{GraphBuilder, TreeEdgeIndex};
    ///
    /// let graph = GraphBuilder::new()
    ///     .with_vertex_count(2)
    ///     .with_edge(1, 0, 4.0)
    ///     .build_with_index::<TreeEdgeIndex>()
    ///     .expect("builder configuration is valid");
    /// assert_eq!(graph.minimum_spanning_tree().total_weight(), 4.0);
    /// ```
    #[instrument(
        name = "builder.build",
        err,
        skip(self),
        fields(vertex_count = self.vertex_count, staged_edges = self.edges.len()),
    )]
    pub fn build_with_index<I: OrderedIndex>(self) -> Result<WeightedGraph<I>> {
        let mut graph = WeightedGraph::<I>::with_vertices(self.vertex_count)?;
        for (left, right, weight) in self.edges {
            graph.insert_edge(left, right, weight)?;
        }
        Ok(graph)
    }
}
