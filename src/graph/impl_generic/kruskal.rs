//! Minimum spanning tree via Kruskal's algorithm (undirected graphs).
//!
//! Sorts a copy of the edge list by weight and greedily keeps every edge
//! whose endpoints are still in different components. Disconnected input
//! yields a minimum spanning forest.

use log::{debug, trace};

use crate::graph::error::GraphResult;
use crate::graph::traits::types::{Edge, MSTResult, Weight};

use super::helpers::validate_edges;
use super::union_find::DisjointSet;

/// Kruskal's minimum spanning tree algorithm.
///
/// The sort is stable, so among equal weights the input order decides
/// which edge is kept. The input slice is never reordered.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal_impl<W: Weight>(
    edges: &[Edge<W>],
    num_vertices: usize,
) -> GraphResult<MSTResult<W>> {
    validate_edges(edges, num_vertices, "kruskal")?;

    let mut sorted: Vec<Edge<W>> = edges.to_vec();
    sorted.sort_by(|a, b| a.cmp_by_weight(b));

    let target = num_vertices.saturating_sub(1);
    let mut components = DisjointSet::new(num_vertices);
    let mut tree = Vec::with_capacity(target);

    for edge in sorted {
        if tree.len() == target {
            break;
        }
        if components.union(edge.src, edge.dest) {
            trace!("kruskal: accepted {edge}");
            tree.push(edge);
        }
    }

    debug!(
        "kruskal: {} of {} edges kept, {} component(s) over {} vertices",
        tree.len(),
        edges.len(),
        components.component_count(),
        num_vertices
    );

    Ok(MSTResult::new(tree, num_vertices))
}
