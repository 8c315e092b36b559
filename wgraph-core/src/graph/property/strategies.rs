//! Graph generators for the property suites.
//!
//! Each generator is driven by a seeded [`SmallRng`] so failing cases can be
//! replayed from the seed proptest reports.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, Topology};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 40;
/// Dense graphs stay smaller to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 20;

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let (vertex_count, mut edges) = match topology {
        Topology::Sparse => generate_sparse(rng),
        Topology::Dense => generate_dense(rng),
        Topology::Disconnected => generate_disconnected(rng),
        Topology::ManyIdentical => generate_identical(rng),
    };
    add_weight_updates(rng, &mut edges);
    GraphFixture {
        vertex_count,
        edges,
        topology,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.0..100.0)
}

/// Joins every vertex to a random earlier one, guaranteeing connectivity.
fn spanning_tree(
    rng: &mut SmallRng,
    vertices: std::ops::Range<usize>,
    weight: fn(&mut SmallRng) -> f64,
    edges: &mut Vec<(usize, usize, f64)>,
) {
    let start = vertices.start;
    for vertex in vertices.skip(1) {
        let parent = rng.gen_range(start..vertex);
        edges.push((vertex, parent, weight(rng)));
    }
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();
    spanning_tree(rng, 0..vertex_count, continuous_weight, &mut edges);
    let extras = rng.gen_range(0..=vertex_count);
    for _ in 0..extras {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        edges.push((left, right, continuous_weight(rng)));
    }
    (vertex_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.7..=0.95);
    let mut edges = Vec::new();
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((right, left, continuous_weight(rng)));
            }
        }
    }
    (vertex_count, edges)
}

fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    let blocks = rng.gen_range(2..=4);
    let isolated = rng.gen_range(0..=2);
    let mut edges = Vec::new();
    let mut next = 0;
    for _ in 0..blocks {
        let size = rng.gen_range(1..=8);
        spanning_tree(rng, next..next + size, continuous_weight, &mut edges);
        next += size;
    }
    (next + isolated, edges)
}

fn generate_identical(rng: &mut SmallRng) -> (usize, Vec<(usize, usize, f64)>) {
    fn tied_weight(rng: &mut SmallRng) -> f64 {
        f64::from(rng.gen_range(0u8..3))
    }

    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();
    spanning_tree(rng, 0..vertex_count, tied_weight, &mut edges);
    for _ in 0..vertex_count {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        edges.push((left, right, tied_weight(rng)));
    }
    (vertex_count, edges)
}

/// Re-issues a few existing pairs with new weights to exercise replacement.
fn add_weight_updates(rng: &mut SmallRng, edges: &mut Vec<(usize, usize, f64)>) {
    if edges.is_empty() {
        return;
    }
    let updates = rng.gen_range(0..=edges.len().min(5));
    for _ in 0..updates {
        let (left, right, _) = edges[rng.gen_range(0..edges.len())];
        edges.push((right, left, continuous_weight(rng)));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Topology::Sparse)]
    #[case(Topology::Dense)]
    #[case(Topology::Disconnected)]
    #[case(Topology::ManyIdentical)]
    fn fixtures_stay_in_range(#[case] topology: Topology) {
        let mut rng = SmallRng::seed_from_u64(7);
        let fixture = generate_fixture(topology, &mut rng);
        assert!(fixture.vertex_count >= 1);
        assert!(fixture.edges.iter().all(|&(left, right, weight)| {
            left < fixture.vertex_count && right < fixture.vertex_count && weight >= 0.0
        }));
    }
}
