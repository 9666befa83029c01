//! Minimum spanning tree via eager Prim's algorithm (undirected graphs).
//!
//! Grows one tree from a start vertex. Candidate edges crossing the tree
//! boundary go into a binary heap; entries whose far endpoint joined the
//! tree in the meantime are skipped when popped (lazy deletion), so no
//! decrease-key is needed.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::graph::error::GraphResult;
use crate::graph::traits::types::{AdjacencyList, Edge, MSTResult, Weight};

use super::helpers::{validate_adjacency, validate_node};

/// Heap entry: ordered by weight, then by insertion order.
struct FrontierEdge<W> {
    edge: Edge<W>,
    seq: usize,
}

impl<W: Weight> Ord for FrontierEdge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .cmp_by_weight(&other.edge)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<W: Weight> PartialOrd for FrontierEdge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> PartialEq for FrontierEdge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for FrontierEdge<W> {}

struct Frontier<W> {
    heap: BinaryHeap<Reverse<FrontierEdge<W>>>,
    seq: usize,
}

impl<W: Weight> Frontier<W> {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push every edge of `vertex` whose far endpoint is outside the tree.
    fn extend_from(&mut self, graph: &AdjacencyList<W>, vertex: usize, in_tree: &[bool]) {
        for &edge in graph.neighbors(vertex) {
            if !in_tree[edge.dest] {
                self.heap.push(Reverse(FrontierEdge {
                    edge,
                    seq: self.seq,
                }));
                self.seq += 1;
            }
        }
    }

    fn pop(&mut self) -> Option<Edge<W>> {
        self.heap.pop().map(|Reverse(entry)| entry.edge)
    }
}

/// Endpoint of `edge` that is not yet in the tree, or `None` if the edge
/// is stale (both endpoints already included).
///
/// Must be evaluated before `in_tree` is updated for this edge.
fn newly_included<W>(edge: &Edge<W>, in_tree: &[bool]) -> Option<usize> {
    match (in_tree[edge.src], in_tree[edge.dest]) {
        (true, false) => Some(edge.dest),
        (false, true) => Some(edge.src),
        _ => None,
    }
}

/// Eager Prim's minimum spanning tree algorithm from `start`.
///
/// Only the component containing `start` is spanned; vertices outside it
/// are never reached. An empty graph yields an empty tree when started
/// from vertex 0.
///
/// Time: O(E log E) with lazy deletion.
pub fn prim_impl<W: Weight>(graph: &AdjacencyList<W>, start: usize) -> GraphResult<MSTResult<W>> {
    let n = graph.num_vertices();
    validate_adjacency(graph, "prim")?;

    if n == 0 && start == 0 {
        return Ok(MSTResult::new(Vec::new(), 0));
    }
    validate_node(start, n, "prim start")?;

    let mut in_tree = vec![false; n];
    let mut frontier = Frontier::new();
    let mut tree = Vec::with_capacity(n - 1);

    in_tree[start] = true;
    frontier.extend_from(graph, start, &in_tree);

    while let Some(edge) = frontier.pop() {
        let Some(vertex) = newly_included(&edge, &in_tree) else {
            continue;
        };

        in_tree[vertex] = true;
        trace!("prim: accepted {edge}");
        tree.push(edge);

        if tree.len() == n - 1 {
            break;
        }
        frontier.extend_from(graph, vertex, &in_tree);
    }

    debug!(
        "prim: {} tree edges from vertex {} over {} vertices",
        tree.len(),
        start,
        n
    );

    Ok(MSTResult::new(tree, n))
}
