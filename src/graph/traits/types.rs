//! Graph data types and result structures.

use std::cmp::Ordering;
use std::fmt;
use crate::graph::error::{GraphError, GraphResult};

/// Edge weight usable by the spanning tree engines.
///
/// The engines only need a total order and addition for the tree weight.
/// Integers compare with `Ord`; floats use `total_cmp` so NaN sorts last
/// instead of poisoning the sort.
pub trait Weight: Copy + PartialOrd + Default + fmt::Debug + fmt::Display {
    /// Total order over weights.
    fn weight_cmp(&self, other: &Self) -> Ordering;

    /// Sum of two weights. Integers saturate at their bounds instead of
    /// overflowing.
    fn weight_add(self, other: Self) -> Self;
}

macro_rules! impl_weight_ord {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn weight_add(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_weight_float {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline]
                fn weight_add(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_weight_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_weight_float!(f32, f64);

/// Weighted undirected edge.
///
/// `(src, dest, w)` and `(dest, src, w)` denote the same edge. The
/// direction only matters for adjacency lists, where an edge stored under
/// vertex `v` must start at `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub src: usize,
    pub dest: usize,
    pub weight: W,
}

impl<W: Weight> Edge<W> {
    pub fn new(src: usize, dest: usize, weight: W) -> Self {
        Self { src, dest, weight }
    }

    /// Same edge seen from the other endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            src: self.dest,
            dest: self.src,
            weight: self.weight,
        }
    }

    /// Endpoint opposite `vertex`. For a self-loop this is `vertex` itself.
    pub fn other(&self, vertex: usize) -> usize {
        if self.src == vertex {
            self.dest
        } else {
            self.src
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dest
    }

    /// Compare two edges by weight only.
    pub fn cmp_by_weight(&self, other: &Self) -> Ordering {
        self.weight.weight_cmp(&other.weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.src, self.dest, self.weight)
    }
}

/// Per-vertex adjacency list.
///
/// `neighbors(v)` holds the edges incident to `v`, each with `src == v`.
/// Undirected edges are stored once in each direction.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyList<W> {
    adj: Vec<Vec<Edge<W>>>,
}

impl<W: Weight> AdjacencyList<W> {
    /// Create a graph with `num_vertices` isolated vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); num_vertices],
        }
    }

    /// Wrap pre-built per-vertex lists.
    ///
    /// The lists are taken as-is; the engines validate them before use.
    pub fn from_lists(adj: Vec<Vec<Edge<W>>>) -> Self {
        Self { adj }
    }

    /// Build an undirected adjacency list from an edge list.
    ///
    /// Each input edge is stored in both directions, so an input that
    /// already lists both directions ends up with parallel entries. The
    /// engines tolerate that.
    pub fn from_edges(num_vertices: usize, edges: &[Edge<W>]) -> GraphResult<Self> {
        let mut graph = Self::new(num_vertices);
        for edge in edges {
            for vertex in [edge.src, edge.dest] {
                if vertex >= num_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        num_vertices,
                        context: "AdjacencyList::from_edges",
                    });
                }
            }
            graph.add_undirected_edge(edge.src, edge.dest, edge.weight);
        }
        Ok(graph)
    }

    /// Add a single directed entry `src -> dest`.
    ///
    /// # Panics
    /// Panics if `src >= num_vertices()`.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: W) {
        self.adj[src].push(Edge::new(src, dest, weight));
    }

    /// Add an undirected edge, stored under both endpoints.
    ///
    /// A self-loop is stored once.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: W) {
        self.add_edge(u, v, weight);
        if u != v {
            self.add_edge(v, u, weight);
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Number of stored directed entries (twice the undirected edge count
    /// for a graph built with `add_undirected_edge`).
    pub fn num_entries(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Edges leaving `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex >= num_vertices()`.
    pub fn neighbors(&self, vertex: usize) -> &[Edge<W>] {
        &self.adj[vertex]
    }

    /// Iterate over `(vertex, edges)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Edge<W>])> {
        self.adj.iter().enumerate().map(|(v, e)| (v, e.as_slice()))
    }

    /// Flatten into a single edge list (both stored directions included).
    pub fn to_edge_list(&self) -> Vec<Edge<W>> {
        self.adj.iter().flatten().copied().collect()
    }
}

/// Dense `n x n` weight matrix of an undirected graph.
///
/// Missing edges are `None`, so zero-weight edges are representable.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W> {
    weights: Vec<Option<W>>,
    num_vertices: usize,
}

impl<W: Weight> AdjacencyMatrix<W> {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            weights: vec![None; num_vertices * num_vertices],
            num_vertices,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Set the weight of edge `u -- v` in both directions.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range.
    pub fn set_undirected(&mut self, u: usize, v: usize, weight: W) {
        assert!(
            u < self.num_vertices && v < self.num_vertices,
            "edge ({u}, {v}) out of range for {} vertices",
            self.num_vertices
        );
        self.weights[u * self.num_vertices + v] = Some(weight);
        self.weights[v * self.num_vertices + u] = Some(weight);
    }

    /// Weight of edge `u -- v`, if present.
    pub fn get(&self, u: usize, v: usize) -> Option<W> {
        if u >= self.num_vertices || v >= self.num_vertices {
            return None;
        }
        self.weights[u * self.num_vertices + v]
    }

    /// Number of undirected edges (upper triangle, diagonal included).
    pub fn num_edges(&self) -> usize {
        (0..self.num_vertices)
            .map(|u| (u..self.num_vertices).filter(|&v| self.get(u, v).is_some()).count())
            .sum()
    }

    /// Each undirected edge once, as `(u, v, w)` with `u <= v`.
    pub fn to_edge_list(&self) -> Vec<Edge<W>> {
        let n = self.num_vertices;
        let mut edges = Vec::new();
        for u in 0..n {
            for v in u..n {
                if let Some(w) = self.get(u, v) {
                    edges.push(Edge::new(u, v, w));
                }
            }
        }
        edges
    }

    /// Convert to an adjacency list with both directions stored.
    pub fn to_adjacency_list(&self) -> AdjacencyList<W> {
        let mut graph = AdjacencyList::new(self.num_vertices);
        for edge in self.to_edge_list() {
            graph.add_undirected_edge(edge.src, edge.dest, edge.weight);
        }
        graph
    }
}

/// Spanning tree algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MSTMethod {
    /// Global edge sort plus union-find.
    #[default]
    Kruskal,
    /// Eager frontier growth from a start vertex.
    Prim,
}

impl fmt::Display for MSTMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kruskal => write!(f, "Kruskal"),
            Self::Prim => write!(f, "Prim"),
        }
    }
}

/// Result of minimum spanning tree algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct MSTResult<W> {
    /// Tree edges in the order they were accepted.
    pub edges: Vec<Edge<W>>,
    /// Sum of the tree edge weights.
    pub total_weight: W,
    /// Number of vertices in the input graph.
    pub num_vertices: usize,
}

impl<W: Weight> MSTResult<W> {
    /// Build a result; `total_weight` saturates for integer weights.
    pub fn new(edges: Vec<Edge<W>>, num_vertices: usize) -> Self {
        let total_weight = edges
            .iter()
            .fold(W::default(), |acc, e| acc.weight_add(e.weight));
        Self {
            edges,
            total_weight,
            num_vertices,
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Whether the result spans every vertex (`num_vertices - 1` edges).
    ///
    /// `false` means the result is a spanning forest (Kruskal) or only
    /// covers the start vertex's component (Prim).
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 >= self.num_vertices
    }
}
