//! Generator option types.

use crate::graph::error::{GraphError, GraphResult};

/// How many edges a generated graph carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GraphDensity {
    /// Many edges: a complete graph for edge-list workloads, edge
    /// probability 0.6 for adjacency-list workloads.
    Dense,
    /// Few edges: edge probability 0.2, or a bounded random neighbour
    /// count for list-based edge lists.
    #[default]
    Sparse,
}

impl GraphDensity {
    /// Probability that a given vertex pair is joined.
    pub fn edge_probability(self) -> f64 {
        match self {
            Self::Dense => 0.6,
            Self::Sparse => 0.2,
        }
    }
}

/// Storage the generator builds the graph in before it is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Representation {
    /// Dense `n x n` weight matrix.
    Matrix,
    /// Per-vertex adjacency list.
    #[default]
    List,
}

/// Options for random graph generation.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Number of vertices.
    pub num_vertices: usize,
    /// Edge density.
    pub density: GraphDensity,
    /// Intermediate storage.
    pub representation: Representation,
    /// Weights are drawn uniformly from `[0, max_weight)`.
    pub max_weight: u32,
    /// Upper bound on random neighbours per vertex for sparse list edge lists.
    pub max_neighbors: usize,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            num_vertices: 10,
            density: GraphDensity::default(),
            representation: Representation::default(),
            max_weight: 100,
            max_neighbors: 5,
            seed: None,
        }
    }
}

impl GeneratorOptions {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            ..Default::default()
        }
    }

    pub fn with_density(mut self, density: GraphDensity) -> Self {
        self.density = density;
        self
    }

    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_max_neighbors(mut self, max_neighbors: usize) -> Self {
        self.max_neighbors = max_neighbors;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check option values.
    ///
    /// `max_weight` must leave room for the heaviest possible tree so that
    /// a generated graph's tree weight never saturates.
    pub fn validate(&self) -> GraphResult<()> {
        if self.max_weight == 0 {
            return Err(GraphError::InvalidArgument {
                arg: "max_weight",
                reason: "weight range [0, max_weight) must be non-empty".to_string(),
            });
        }
        // Heaviest possible tree: n-1 edges of weight max_weight-1.
        let tree_edges = self.num_vertices.saturating_sub(1);
        let fits = u32::try_from(tree_edges)
            .ok()
            .and_then(|e| e.checked_mul(self.max_weight - 1))
            .is_some();
        if !fits {
            return Err(GraphError::InvalidArgument {
                arg: "max_weight",
                reason: format!(
                    "a tree of {tree_edges} edges with weights below {} can exceed u32::MAX",
                    self.max_weight
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_builders() {
        let opts = GeneratorOptions::new(25)
            .with_density(GraphDensity::Dense)
            .with_representation(Representation::Matrix)
            .with_max_weight(10)
            .with_max_neighbors(2)
            .with_seed(7);

        assert_eq!(opts.num_vertices, 25);
        assert_eq!(opts.density, GraphDensity::Dense);
        assert_eq!(opts.representation, Representation::Matrix);
        assert_eq!(opts.max_weight, 10);
        assert_eq!(opts.max_neighbors, 2);
        assert_eq!(opts.seed, Some(7));
        assert!(opts.validate().is_ok());

        let defaults = GeneratorOptions::default();
        assert_eq!(defaults.max_weight, 100);
        assert_eq!(defaults.max_neighbors, 5);
        assert_eq!(defaults.seed, None);
    }

    #[test]
    fn test_zero_max_weight_rejected() {
        let err = GeneratorOptions::new(3).with_max_weight(0).validate().unwrap_err();
        assert!(matches!(err, GraphError::InvalidArgument { arg: "max_weight", .. }));
    }

    #[test]
    fn test_max_weight_bounded_by_tree_total() {
        let err = GeneratorOptions::new(10).with_max_weight(u32::MAX).validate().unwrap_err();
        assert!(matches!(err, GraphError::InvalidArgument { arg: "max_weight", .. }));

        // 9 edges of weight at most 477_218_588 still fit.
        let limit = u32::MAX / 9 + 1;
        assert!(GeneratorOptions::new(10).with_max_weight(limit).validate().is_ok());
        assert!(GeneratorOptions::new(10).with_max_weight(limit + 1).validate().is_err());

        assert!(GeneratorOptions::new(1).with_max_weight(u32::MAX).validate().is_ok());
    }
}
