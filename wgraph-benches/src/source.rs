//! Seeded random graphs for benchmarks.
//!
//! Every vertex pair is kept independently with probability `density`, so a
//! density of `1.0` yields a complete graph. Generation is deterministic for
//! a given seed.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use wgraph_core::{OrderedIndex, WeightedGraph};

use crate::error::BenchSetupError;

/// Configuration for [`RandomGraph::generate`].
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability that any given pair carries an edge.
    pub density: f64,
    /// Exclusive upper bound on edge weights.
    pub max_weight: f64,
    /// Seed for the generator.
    pub seed: u64,
}

/// A generated edge list ready to be replayed into a graph.
#[derive(Clone, Debug)]
pub struct RandomGraph {
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
}

impl RandomGraph {
    /// Generates edges according to `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::InvalidDensity`] or
    /// [`BenchSetupError::InvalidMaxWeight`] for out-of-range parameters.
    pub fn generate(config: &RandomGraphConfig) -> Result<Self, BenchSetupError> {
        if !(config.density > 0.0 && config.density <= 1.0) {
            return Err(BenchSetupError::InvalidDensity {
                density: config.density,
            });
        }
        if !(config.max_weight.is_finite() && config.max_weight > 0.0) {
            return Err(BenchSetupError::InvalidMaxWeight {
                max_weight: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::new();
        for source in 0..config.vertex_count {
            for target in (source + 1)..config.vertex_count {
                if rng.gen_bool(config.density) {
                    edges.push((source, target, rng.gen_range(0.0..config.max_weight)));
                }
            }
        }
        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Returns the vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated `(source, target, weight)` triples.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }

    /// Replays the edges into a fresh graph backed by `I`.
    ///
    /// # Errors
    /// Propagates any [`wgraph_core::GraphError`] raised while building.
    pub fn build<I: OrderedIndex>(&self) -> Result<WeightedGraph<I>, BenchSetupError> {
        let mut graph = WeightedGraph::<I>::with_vertices(self.vertex_count)?;
        for &(source, target, weight) in &self.edges {
            graph.insert_edge(source, target, weight)?;
        }
        Ok(graph)
    }
}
