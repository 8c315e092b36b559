//! Property-based tests for graph mutation and the Kruskal traversal.
//!
//! Checks the graph against a `BTreeMap` model across random mutation
//! sequences and compares `minimum_spanning_tree` with a sort-based Kruskal
//! oracle over generated topologies.

mod oracle;
mod strategies;
mod types;
