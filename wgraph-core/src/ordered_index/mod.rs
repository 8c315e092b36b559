//! Weight-ordered indices over the edges currently stored in a graph.
//!
//! The graph owns every [`crate::Edge`] through its point index. An ordered
//! index only records [`EdgeKey`] identifiers so it can hand the minimum
//! spanning tree computation a lazy ascending traversal without a full sort on
//! every call.

mod sorted;
mod tree;

pub use self::{
    sorted::SortedEdgeIndex,
    tree::{InOrder, TreeEdgeIndex},
};

use crate::EdgeKey;

/// An index of edge keys that can be traversed in ascending order.
///
/// Implementations must keep traversal lazy: a consumer that stops early must
/// not pay for the keys it never visits.
///
/// # Examples
/// ```
/// use wgraph_core::{Edge, OrderedIndex, SortedEdgeIndex};
///
/// let mut index = SortedEdgeIndex::default();
/// index.insert(Edge::new(0, 1, 3.0).key());
/// index.insert(Edge::new(1, 2, 1.0).key());
/// let weights: Vec<f64> = index.ascending().map(|key| key.weight()).collect();
/// assert_eq!(weights, vec![1.0, 3.0]);
/// ```
pub trait OrderedIndex: Default {
    /// Ascending iterator over the stored keys.
    type Ascending<'a>: Iterator<Item = EdgeKey>
    where
        Self: 'a;

    /// Inserts `key`, returning `false` when it was already present.
    fn insert(&mut self, key: EdgeKey) -> bool;

    /// Removes `key`, returning `false` when it was absent.
    fn erase(&mut self, key: &EdgeKey) -> bool;

    /// Removes every key.
    fn clear(&mut self);

    /// Number of stored keys.
    fn len(&self) -> usize;

    /// Returns `true` when no keys are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a fresh ascending traversal over the current contents.
    fn ascending(&self) -> Self::Ascending<'_>;
}
