//! CPU implementation of minimum spanning tree algorithms.

use crate::graph::error::GraphResult;
use crate::graph::impl_generic::{kruskal_impl, prim_impl};
use crate::graph::traits::mst::MSTAlgorithms;
use crate::graph::traits::types::{AdjacencyList, Edge, MSTResult, Weight};

use super::CpuClient;

impl MSTAlgorithms for CpuClient {
    fn kruskal_mst<W: Weight>(
        &self,
        edges: &[Edge<W>],
        num_vertices: usize,
    ) -> GraphResult<MSTResult<W>> {
        kruskal_impl(edges, num_vertices)
    }

    fn prim_mst_from<W: Weight>(
        &self,
        graph: &AdjacencyList<W>,
        start: usize,
    ) -> GraphResult<MSTResult<W>> {
        prim_impl(graph, start)
    }
}
