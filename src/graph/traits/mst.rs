//! Minimum spanning tree algorithm traits.

use crate::graph::error::GraphResult;

use super::types::{AdjacencyList, Edge, MSTMethod, MSTResult, Weight};

/// Minimum spanning tree algorithms.
///
/// Finds the subset of edges that connects all vertices with minimum total
/// weight. Only meaningful for undirected graphs; an edge and its reverse
/// are treated as the same edge.
///
/// Disconnected input is not an error. Check [`MSTResult::is_spanning`] to
/// tell a full tree from a partial result.
pub trait MSTAlgorithms {
    /// Compute the minimum spanning tree using Kruskal's algorithm.
    ///
    /// Sorts edges by weight and greedily adds edges that don't form cycles
    /// (using union-find). Returns a minimum spanning forest when the graph
    /// is disconnected.
    ///
    /// # Complexity
    /// O(E log E) for sorting + O(E α(V)) for union-find.
    ///
    /// # Errors
    /// Returns `VertexOutOfRange` if an endpoint is `>= num_vertices`.
    fn kruskal_mst<W: Weight>(
        &self,
        edges: &[Edge<W>],
        num_vertices: usize,
    ) -> GraphResult<MSTResult<W>>;

    /// Compute the minimum spanning tree using eager Prim's algorithm from
    /// vertex 0.
    ///
    /// # Errors
    /// Returns an error if the adjacency list is malformed.
    fn prim_mst<W: Weight>(&self, graph: &AdjacencyList<W>) -> GraphResult<MSTResult<W>> {
        self.prim_mst_from(graph, 0)
    }

    /// Compute the minimum spanning tree of `start`'s component using eager
    /// Prim's algorithm.
    ///
    /// Vertices in other components are never reached; run once per
    /// component to build a full forest.
    ///
    /// # Complexity
    /// O(E log E) with lazy deletion.
    ///
    /// # Errors
    /// Returns an error if `start` is out of range or the adjacency list is
    /// malformed.
    fn prim_mst_from<W: Weight>(
        &self,
        graph: &AdjacencyList<W>,
        start: usize,
    ) -> GraphResult<MSTResult<W>>;

    /// Compute the minimum spanning tree with the selected method.
    ///
    /// Kruskal runs on the flattened edge list of `graph`.
    fn minimum_spanning_tree<W: Weight>(
        &self,
        graph: &AdjacencyList<W>,
        method: MSTMethod,
    ) -> GraphResult<MSTResult<W>> {
        match method {
            MSTMethod::Kruskal => self.kruskal_mst(&graph.to_edge_list(), graph.num_vertices()),
            MSTMethod::Prim => self.prim_mst(graph),
        }
    }
}
