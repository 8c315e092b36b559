//! Edge values and the keys the ordered index stores for them.

use std::cmp::Ordering;

/// An undirected weighted edge in canonical form (`source < target`).
///
/// # Examples
/// ```
/// use wgraph_core::Edge;
///
/// let edge = Edge::new(3, 1, 2.5);
/// assert_eq!(edge.endpoints(), (1, 3));
/// assert_eq!(edge.weight(), 2.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge, swapping the endpoints when needed so the smaller
    /// index comes first.
    #[must_use]
    pub const fn new(left: usize, right: usize, weight: f64) -> Self {
        let (source, target) = canonical_pair(left, right);
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `(source, target)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns the ordered-index key identifying this edge.
    #[must_use]
    pub const fn key(&self) -> EdgeKey {
        EdgeKey {
            weight: self.weight,
            source: self.source,
            target: self.target,
        }
    }
}

impl From<EdgeKey> for Edge {
    fn from(key: EdgeKey) -> Self {
        Self {
            source: key.source,
            target: key.target,
            weight: key.weight,
        }
    }
}

/// Identifier held by an [`crate::OrderedIndex`] in place of the edge itself.
///
/// Keys order by weight first (using [`f64::total_cmp`]), then by the
/// canonical endpoints, so two distinct pairs never compare equal even when
/// their weights tie.
#[derive(Clone, Copy, Debug)]
pub struct EdgeKey {
    weight: f64,
    source: usize,
    target: usize,
}

impl EdgeKey {
    /// Returns the weight component of the key.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the canonical `(source, target)` pair.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EdgeKey {}

impl Ord for EdgeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for EdgeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) const fn canonical_pair(left: usize, right: usize) -> (usize, usize) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}
