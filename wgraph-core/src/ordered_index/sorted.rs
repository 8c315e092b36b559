//! Ordered index backed by a balanced search tree from the standard library.

use std::collections::{BTreeSet, btree_set};

use crate::EdgeKey;

use super::OrderedIndex;

/// Default [`OrderedIndex`], a [`BTreeSet`] of edge keys.
#[derive(Debug, Default)]
pub struct SortedEdgeIndex {
    keys: BTreeSet<EdgeKey>,
}

impl OrderedIndex for SortedEdgeIndex {
    type Ascending<'a> = std::iter::Copied<btree_set::Iter<'a, EdgeKey>>;

    fn insert(&mut self, key: EdgeKey) -> bool {
        self.keys.insert(key)
    }

    fn erase(&mut self, key: &EdgeKey) -> bool {
        self.keys.remove(key)
    }

    fn clear(&mut self) {
        self.keys.clear();
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn ascending(&self) -> Self::Ascending<'_> {
        self.keys.iter().copied()
    }
}
