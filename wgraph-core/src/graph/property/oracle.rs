//! Sort-based Kruskal oracle.
//!
//! Sorts a plain edge list with the same `(weight, source, target)` order
//! the ordered indices use, then runs a textbook union-find. Matching the
//! order makes `edges_tested` comparable, not just the total weight.

use std::collections::BTreeMap;

/// What the oracle reports for a graph.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: f64,
    pub edges_tested: usize,
    pub component_count: usize,
}

/// Runs Kruskal over `edges`, keyed by canonical pair.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &BTreeMap<(usize, usize), f64>,
) -> OracleForest {
    let mut sorted: Vec<(f64, usize, usize)> = edges
        .iter()
        .map(|(&(source, target), &weight)| (weight, source, target))
        .collect();
    sorted.sort_by(|left, right| {
        left.0
            .total_cmp(&right.0)
            .then_with(|| left.1.cmp(&right.1))
            .then_with(|| left.2.cmp(&right.2))
    });

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    let mut total_weight = 0.0;
    let mut edges_tested = 0;

    for (weight, source, target) in sorted {
        edges_tested += 1;
        let source_root = find_root(&mut parent, source);
        let target_root = find_root(&mut parent, target);
        if source_root != target_root {
            parent[target_root] = source_root;
            components -= 1;
            total_weight += weight;
        }
        if components == 1 {
            break;
        }
    }

    OracleForest {
        total_weight,
        edges_tested,
        component_count: components,
    }
}

/// Path-halving find.
fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Collapses fixture triples into the final canonical edge map, dropping
/// self-loops the way the graph does.
pub(super) fn final_edges(edges: &[(usize, usize, f64)]) -> BTreeMap<(usize, usize), f64> {
    let mut map = BTreeMap::new();
    for &(left, right, weight) in edges {
        if left != right {
            map.insert((left.min(right), left.max(right)), weight);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_matches_hand_computed_tree() {
        let edges = final_edges(&[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 10.0)]);
        let forest = sequential_kruskal(4, &edges);
        assert_eq!(
            forest,
            OracleForest {
                total_weight: 6.0,
                edges_tested: 3,
                component_count: 1,
            }
        );
    }

    #[test]
    fn oracle_reports_forest_components() {
        let edges = final_edges(&[(0, 1, 1.0), (2, 3, 2.0), (4, 4, 0.0)]);
        let forest = sequential_kruskal(5, &edges);
        assert_eq!(forest.component_count, 3);
        assert_eq!(forest.edges_tested, 2);
        assert_eq!(forest.total_weight, 3.0);
    }
}
