//! Dense undirected weighted graph with Kruskal minimum spanning trees.
//!
//! A [`WeightedGraph`] covers a fixed vertex set `0..vertex_count` and stores
//! at most one weighted edge per vertex pair. Edges live in a dense point
//! index for constant-time lookup and are mirrored by an [`OrderedIndex`] of
//! keys sorted by weight. [`WeightedGraph::minimum_spanning_tree`] walks that
//! index in ascending order and drives a [`DisjointSets`] structure, stopping
//! early once every vertex is connected and otherwise returning a minimum
//! spanning forest.
//!
//! # Metrics
//!
//! With the `metrics` feature enabled the crate emits:
//!
//! - `graph_edge_mutations` (counter)
//! - `graph_mst_runs` (counter)
//! - `graph_mst_edges_tested` (histogram)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod edge;
mod error;
mod graph;
mod metrics;
mod ordered_index;
mod point_index;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GraphBuilder,
    edge::{Edge, EdgeKey},
    error::{GraphError, GraphErrorCode, Result},
    graph::{DEFAULT_VERTEX_COUNT, SpanningForest, WeightedGraph},
    ordered_index::{InOrder, OrderedIndex, SortedEdgeIndex, TreeEdgeIndex},
    union_find::{DisjointSets, WeightedUnionFind},
};
