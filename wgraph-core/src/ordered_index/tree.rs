//! Arena-backed binary search tree with an explicit-stack in-order walk.
//!
//! Nodes live in a `Vec` and refer to their children by index. Erased slots
//! go on a free list and are reused by later insertions. The tree is not
//! rebalanced, so edges inserted in weight order degrade it to a list; every
//! operation is therefore iterative to keep deep trees off the call stack.

use std::cmp::Ordering;

use crate::EdgeKey;

use super::OrderedIndex;

#[derive(Clone, Copy, Debug)]
struct Node {
    key: EdgeKey,
    left: Option<usize>,
    right: Option<usize>,
}

/// Where a node hangs from: the root slot or one side of a parent.
#[derive(Clone, Copy, Debug)]
enum Link {
    Root,
    Left(usize),
    Right(usize),
}

/// [`OrderedIndex`] built on an unbalanced binary search tree.
///
/// # Examples
/// ```
/// use wgraph_core::{Edge, OrderedIndex, TreeEdgeIndex};
///
/// let mut index = TreeEdgeIndex::default();
/// for (source, target, weight) in [(0, 1, 4.0), (1, 2, 2.0), (2, 3, 3.0)] {
///     index.insert(Edge::new(source, target, weight).key());
/// }
/// let first = index.ascending().next().map(|key| key.endpoints());
/// assert_eq!(first, Some((1, 2)));
/// ```
#[derive(Debug, Default)]
pub struct TreeEdgeIndex {
    nodes: Vec<Node>,
    free: Vec<usize>,
    root: Option<usize>,
    len: usize,
}

impl TreeEdgeIndex {
    fn locate(&self, key: &EdgeKey) -> Option<(Link, usize)> {
        let mut link = Link::Root;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match key.cmp(&node.key) {
                Ordering::Equal => return Some((link, id)),
                Ordering::Less => {
                    link = Link::Left(id);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(id);
                    cursor = node.right;
                }
            }
        }
        None
    }

    fn set_link(&mut self, link: Link, child: Option<usize>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.nodes[parent].left = child,
            Link::Right(parent) => self.nodes[parent].right = child,
        }
    }

    fn allocate(&mut self, key: EdgeKey) -> usize {
        let node = Node {
            key,
            left: None,
            right: None,
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id] = node;
            id
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Unhooks the leftmost node of `right` and gives it both of the erased
    /// node's subtrees.
    fn splice_successor(&mut self, erased: usize, left: usize, right: usize) -> usize {
        let mut parent = erased;
        let mut successor = right;
        while let Some(next) = self.nodes[successor].left {
            parent = successor;
            successor = next;
        }
        if parent != erased {
            self.nodes[parent].left = self.nodes[successor].right;
            self.nodes[successor].right = Some(right);
        }
        self.nodes[successor].left = Some(left);
        successor
    }
}

impl OrderedIndex for TreeEdgeIndex {
    type Ascending<'a> = InOrder<'a>;

    fn insert(&mut self, key: EdgeKey) -> bool {
        let mut link = Link::Root;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match key.cmp(&node.key) {
                Ordering::Equal => return false,
                Ordering::Less => {
                    link = Link::Left(id);
                    cursor = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(id);
                    cursor = node.right;
                }
            }
        }
        let id = self.allocate(key);
        self.set_link(link, Some(id));
        self.len += 1;
        true
    }

    fn erase(&mut self, key: &EdgeKey) -> bool {
        let Some((link, id)) = self.locate(key) else {
            return false;
        };
        let node = self.nodes[id];
        let replacement = match (node.left, node.right) {
            (None, child) | (child, None) => child,
            (Some(left), Some(right)) => Some(self.splice_successor(id, left, right)),
        };
        self.set_link(link, replacement);
        self.free.push(id);
        self.len -= 1;
        true
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn ascending(&self) -> Self::Ascending<'_> {
        InOrder {
            nodes: &self.nodes,
            pending: Vec::new(),
            cursor: self.root,
        }
    }
}

/// Ascending traversal of a [`TreeEdgeIndex`].
///
/// `pending` holds nodes whose left subtree is being visited; each pop yields
/// the node and moves the cursor into its right subtree.
#[derive(Debug)]
pub struct InOrder<'a> {
    nodes: &'a [Node],
    pending: Vec<usize>,
    cursor: Option<usize>,
}

impl Iterator for InOrder<'_> {
    type Item = EdgeKey;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.pending.push(id);
            self.cursor = self.nodes[id].left;
        }
        let id = self.pending.pop()?;
        let node = &self.nodes[id];
        self.cursor = node.right;
        Some(node.key)
    }
}
