//! Disjoint sets used for cycle detection during Kruskal's algorithm.
//!
//! The minimum spanning tree computation never inspects set membership
//! itself: it offers every edge to [`DisjointSets::union`] and lets the
//! structure decide whether the edge merges two components. The structure
//! also accumulates the weight of every merging edge.

/// Capability interface the spanning tree computation drives.
///
/// # Examples
/// ```
/// use wgraph_core::{DisjointSets, WeightedUnionFind};
///
/// let mut sets = WeightedUnionFind::with_singletons(3);
/// assert!(sets.union(0, 1, 2.0));
/// assert!(!sets.union(1, 0, 9.0));
/// assert_eq!(sets.set_count(), 2);
/// assert_eq!(sets.total_weight(), 2.0);
/// ```
pub trait DisjointSets {
    /// Creates `count` singleton sets labelled `0..count`.
    fn with_singletons(count: usize) -> Self;

    /// Merges the sets containing `left` and `right`.
    ///
    /// Both nodes must lie in `0..count` for the `count` passed to
    /// [`Self::with_singletons`]; implementations may panic otherwise.
    ///
    /// Returns `true` when the two were in different sets; `weight` is then
    /// added to the running total and the set count drops by one. Returns
    /// `false` and changes nothing when they already share a set.
    fn union(&mut self, left: usize, right: usize, weight: f64) -> bool;

    /// Number of disjoint sets remaining.
    fn set_count(&self) -> usize;

    /// Sum of the weights passed to merging [`Self::union`] calls.
    fn total_weight(&self) -> f64;
}

/// Union by rank with path compression.
///
/// # Panics
/// [`DisjointSets::union`] panics when either node is outside
/// `0..count`.
#[derive(Clone, Debug)]
pub struct WeightedUnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
    total_weight: f64,
}

impl WeightedUnionFind {
    /// Returns the representative of the set containing `node`, compressing
    /// the path on the way.
    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}

impl DisjointSets for WeightedUnionFind {
    fn with_singletons(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
            set_count: count,
            total_weight: 0.0,
        }
    }

    fn union(&mut self, left: usize, right: usize, weight: f64) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        let (parent, child) = choose_parent_child(left, right, left_rank, right_rank);
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.set_count -= 1;
        self.total_weight += weight;
        true
    }

    fn set_count(&self) -> usize {
        self.set_count
    }

    fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

fn choose_parent_child(left: usize, right: usize, left_rank: u8, right_rank: u8) -> (usize, usize) {
    if left_rank > right_rank {
        return (left, right);
    }
    if right_rank > left_rank {
        return (right, left);
    }

    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}
