//! Dense constant-time lookup from a canonical vertex pair to its edge.
//!
//! Only pairs with `source < target` can hold an edge, so the table is the
//! strict lower triangle of the adjacency matrix flattened row by row: the
//! pair `(source, target)` lives at `target * (target - 1) / 2 + source`.
//! Callers validate the pair before reaching this module, so lookups here
//! never fail.

use crate::{Edge, GraphError, Result};

#[derive(Debug)]
pub(crate) struct PointIndex {
    vertex_count: usize,
    slots: Vec<Option<Edge>>,
}

impl PointIndex {
    /// Builds the table for a small vertex count known to fit in memory.
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            slots: vec![None; pair_count(vertex_count).unwrap_or(0)],
        }
    }

    /// Builds the table, reporting [`GraphError::TooManyVertices`] instead
    /// of aborting when the slot count overflows or cannot be allocated.
    pub(crate) fn try_new(vertex_count: usize) -> Result<Self> {
        let too_many = || GraphError::TooManyVertices { vertex_count };
        let slot_count = pair_count(vertex_count).ok_or_else(too_many)?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(slot_count)
            .map_err(|_| too_many())?;
        slots.resize(slot_count, None);
        Ok(Self {
            vertex_count,
            slots,
        })
    }

    pub(crate) fn get(&self, source: usize, target: usize) -> Option<Edge> {
        self.slots.get(slot(source, target)).copied().flatten()
    }

    pub(crate) fn set(&mut self, edge: Edge) {
        if let Some(entry) = self.slots.get_mut(slot(edge.source(), edge.target())) {
            *entry = Some(edge);
        }
    }

    pub(crate) fn clear(&mut self, source: usize, target: usize) -> Option<Edge> {
        self.slots
            .get_mut(slot(source, target))
            .and_then(Option::take)
    }

    pub(crate) fn clear_all(&mut self) {
        self.slots.fill(None);
    }

    /// Counts the edges incident to `vertex` by probing every other vertex.
    pub(crate) fn degree(&self, vertex: usize) -> usize {
        (0..self.vertex_count)
            .filter(|&other| other != vertex)
            .filter(|&other| {
                let (source, target) = crate::edge::canonical_pair(vertex, other);
                self.get(source, target).is_some()
            })
            .count()
    }
}

/// Number of unordered vertex pairs, or `None` on overflow.
fn pair_count(vertex_count: usize) -> Option<usize> {
    let half = vertex_count / 2;
    let rest = vertex_count.saturating_sub(1);
    if vertex_count % 2 == 0 {
        half.checked_mul(rest)
    } else {
        (rest / 2).checked_mul(vertex_count)
    }
}

/// Slot of the canonical pair; requires `source < target`.
const fn slot(source: usize, target: usize) -> usize {
    target * (target - 1) / 2 + source
}
