//! Seeded random graph generator.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::error::GraphResult;
use crate::graph::traits::types::{AdjacencyList, AdjacencyMatrix, Edge};

use super::types::{GraphDensity, GeneratorOptions, Representation};

/// Random weighted graph generator with integer weights.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    options: GeneratorOptions,
    rng: StdRng,
}

impl GraphGenerator {
    pub fn new(options: GeneratorOptions) -> GraphResult<Self> {
        options.validate()?;
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { options, rng })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn weight(&mut self) -> u32 {
        self.rng.gen_range(0..self.options.max_weight)
    }

    /// Edge list workload for Kruskal.
    ///
    /// - dense + matrix: every pair `i < j` once (complete graph)
    /// - dense + list: every pair in both directions
    /// - sparse + matrix: each pair with probability 0.2, both directions
    /// - sparse + list: each vertex gets `0..=max_neighbors` random
    ///   neighbours; self-loops and repeats are kept
    pub fn generate_edge_list(&mut self) -> Vec<Edge<u32>> {
        let n = self.options.num_vertices;
        let mut edges = Vec::new();

        match (self.options.density, self.options.representation) {
            (GraphDensity::Dense, Representation::Matrix) => {
                for i in 0..n {
                    for j in (i + 1)..n {
                        let w = self.weight();
                        edges.push(Edge::new(i, j, w));
                    }
                }
            }
            (GraphDensity::Dense, Representation::List) => {
                for i in 0..n {
                    for j in (i + 1)..n {
                        let w = self.weight();
                        edges.push(Edge::new(i, j, w));
                        edges.push(Edge::new(j, i, w));
                    }
                }
            }
            (GraphDensity::Sparse, Representation::Matrix) => {
                let p = self.options.density.edge_probability();
                for i in 0..n {
                    for j in (i + 1)..n {
                        if self.rng.gen_bool(p) {
                            let w = self.weight();
                            edges.push(Edge::new(i, j, w));
                            edges.push(Edge::new(j, i, w));
                        }
                    }
                }
            }
            (GraphDensity::Sparse, Representation::List) => {
                edges = self.random_neighbor_lists().to_edge_list();
            }
        }

        debug!(
            "generated edge list: {} edges over {} vertices ({:?}, {:?})",
            edges.len(),
            n,
            self.options.density,
            self.options.representation
        );
        edges
    }

    /// Adjacency list workload for Prim.
    ///
    /// Each pair `i < j` is joined with the density's edge probability and
    /// stored in both directions. The matrix representation is filled first
    /// and then converted.
    pub fn generate_adjacency_list(&mut self) -> AdjacencyList<u32> {
        let graph = match self.options.representation {
            Representation::Matrix => self.generate_adjacency_matrix().to_adjacency_list(),
            Representation::List => {
                let n = self.options.num_vertices;
                let p = self.options.density.edge_probability();
                let mut graph = AdjacencyList::new(n);
                for i in 0..n {
                    for j in (i + 1)..n {
                        if self.rng.gen_bool(p) {
                            let w = self.weight();
                            graph.add_undirected_edge(i, j, w);
                        }
                    }
                }
                graph
            }
        };

        debug!(
            "generated adjacency list: {} entries over {} vertices ({:?}, {:?})",
            graph.num_entries(),
            graph.num_vertices(),
            self.options.density,
            self.options.representation
        );
        graph
    }

    /// Random symmetric weight matrix; each pair `i < j` is present with
    /// the density's edge probability.
    pub fn generate_adjacency_matrix(&mut self) -> AdjacencyMatrix<u32> {
        let n = self.options.num_vertices;
        let p = self.options.density.edge_probability();
        let mut matrix = AdjacencyMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rng.gen_bool(p) {
                    let w = self.weight();
                    matrix.set_undirected(i, j, w);
                }
            }
        }
        matrix
    }

    fn random_neighbor_lists(&mut self) -> AdjacencyList<u32> {
        let n = self.options.num_vertices;
        let mut graph = AdjacencyList::new(n);
        for i in 0..n {
            let count = self.rng.gen_range(0..=self.options.max_neighbors);
            for _ in 0..count {
                let neighbor = self.rng.gen_range(0..n);
                let w = self.weight();
                graph.add_edge(i, neighbor, w);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::impl_generic::{validate_adjacency, validate_edges};

    fn generator(density: GraphDensity, representation: Representation) -> GraphGenerator {
        let opts = GeneratorOptions::new(12)
            .with_density(density)
            .with_representation(representation)
            .with_seed(42);
        GraphGenerator::new(opts).unwrap()
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = generator(GraphDensity::Sparse, Representation::List).generate_edge_list();
        let b = generator(GraphDensity::Sparse, Representation::List).generate_edge_list();
        assert_eq!(a, b);

        let a = generator(GraphDensity::Dense, Representation::List).generate_adjacency_list();
        let b = generator(GraphDensity::Dense, Representation::List).generate_adjacency_list();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dense_matrix_edge_list_is_complete() {
        let mut g = generator(GraphDensity::Dense, Representation::Matrix);
        assert_eq!(g.options().num_vertices, 12);
        let edges = g.generate_edge_list();
        assert_eq!(edges.len(), 12 * 11 / 2);
        assert!(edges.iter().all(|e| e.src < e.dest && e.weight < 100));
    }

    #[test]
    fn test_dense_list_edge_list_has_both_directions() {
        let edges = generator(GraphDensity::Dense, Representation::List).generate_edge_list();
        assert_eq!(edges.len(), 12 * 11);
        for pair in edges.chunks(2) {
            assert_eq!(pair[0].reversed(), pair[1]);
        }
    }

    #[test]
    fn test_sparse_edge_lists_in_range() {
        for representation in [Representation::Matrix, Representation::List] {
            let edges = generator(GraphDensity::Sparse, representation).generate_edge_list();
            assert!(validate_edges(&edges, 12, "test").is_ok());
        }

        let edges = generator(GraphDensity::Sparse, Representation::List).generate_edge_list();
        assert!(edges.len() <= 12 * 5);
    }

    #[test]
    fn test_adjacency_lists_are_symmetric() {
        for density in [GraphDensity::Dense, GraphDensity::Sparse] {
            for representation in [Representation::Matrix, Representation::List] {
                let graph = generator(density, representation).generate_adjacency_list();
                assert_eq!(graph.num_vertices(), 12);
                assert!(validate_adjacency(&graph, "test").is_ok());
                for (v, edges) in graph.iter() {
                    for e in edges {
                        assert!(graph.neighbors(e.dest).contains(&Edge::new(e.dest, v, e.weight)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_graph() {
        let mut g = GraphGenerator::new(GeneratorOptions::new(0).with_seed(1)).unwrap();
        assert!(g.generate_edge_list().is_empty());
        assert_eq!(g.generate_adjacency_list().num_vertices(), 0);
    }

    #[test]
    fn test_invalid_options_rejected() {
        assert!(GraphGenerator::new(GeneratorOptions::new(3).with_max_weight(0)).is_err());
    }
}
