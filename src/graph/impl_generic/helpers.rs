//! Shared helper functions for graph algorithms.

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{AdjacencyList, Edge, Weight};

/// Validate that a vertex is within bounds.
pub fn validate_node(vertex: usize, num_vertices: usize, context: &'static str) -> GraphResult<()> {
    if vertex >= num_vertices {
        return Err(GraphError::VertexOutOfRange {
            vertex,
            num_vertices,
            context,
        });
    }
    Ok(())
}

/// Validate that every edge endpoint is within bounds.
pub fn validate_edges<W: Weight>(
    edges: &[Edge<W>],
    num_vertices: usize,
    context: &'static str,
) -> GraphResult<()> {
    for edge in edges {
        validate_node(edge.src, num_vertices, context)?;
        validate_node(edge.dest, num_vertices, context)?;
    }
    Ok(())
}

/// Validate an adjacency list: endpoints in range, and every edge stored
/// under vertex `v` starts at `v`.
pub fn validate_adjacency<W: Weight>(
    graph: &AdjacencyList<W>,
    context: &'static str,
) -> GraphResult<()> {
    let n = graph.num_vertices();
    for (vertex, edges) in graph.iter() {
        for edge in edges {
            if edge.src != vertex {
                return Err(GraphError::MalformedAdjacency {
                    vertex,
                    src: edge.src,
                    context,
                });
            }
            validate_node(edge.dest, n, context)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_node() {
        assert!(validate_node(2, 3, "test").is_ok());
        assert_eq!(
            validate_node(3, 3, "test"),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                num_vertices: 3,
                context: "test",
            })
        );
    }

    #[test]
    fn test_validate_edges_reports_first_bad_endpoint() {
        let edges = [Edge::new(0, 1, 1u32), Edge::new(1, 5, 2), Edge::new(9, 0, 3)];
        let err = validate_edges(&edges, 4, "test").unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 5, .. }));
    }

    #[test]
    fn test_validate_adjacency() {
        let mut graph = AdjacencyList::new(3);
        graph.add_undirected_edge(0, 2, 4u32);
        assert!(validate_adjacency(&graph, "test").is_ok());

        let misplaced = AdjacencyList::from_lists(vec![vec![Edge::new(1, 0, 1u32)], vec![]]);
        assert_eq!(
            validate_adjacency(&misplaced, "test"),
            Err(GraphError::MalformedAdjacency {
                vertex: 0,
                src: 1,
                context: "test",
            })
        );

        let dangling = AdjacencyList::from_lists(vec![vec![Edge::new(0, 7, 1u32)]]);
        assert!(matches!(
            validate_adjacency(&dangling, "test"),
            Err(GraphError::VertexOutOfRange { vertex: 7, .. })
        ));
    }
}
