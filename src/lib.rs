//! spanr - Minimum Spanning Tree engines for weighted undirected graphs
//!
//! spanr computes minimum spanning trees with two classical algorithms:
//! Kruskal's (global edge sort + union-find) and eager Prim's (priority
//! queue frontier with lazy deletion). Around the engines it ships a seeded
//! random graph supplier, run statistics, and a demonstration CLI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  spanr binary (CLI)                      │
//! └──────────────┬──────────────────────────┬───────────────┘
//!                │ graphs                   │ reports
//! ┌──────────────▼────────────┐  ┌──────────▼───────────────┐
//! │         generate          │  │          report          │
//! └──────────────┬────────────┘  └──────────▲───────────────┘
//!                │ edge / adjacency lists   │ MSTResult
//! ┌──────────────▼──────────────────────────┴───────────────┐
//! │   graph: Edge, DisjointSet, Kruskal, Prim, CpuClient    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Current Modules
//!
//! - [`graph`] - Spanning tree engines, union-find, graph containers
//! - [`generate`] - Random dense/sparse graphs via matrices or lists
//! - [`report`] - Timing, space estimates, console reports
//!
//! # Example
//!
//! ```
//! use spanr::graph::{AdjacencyList, CpuClient, Edge, MSTAlgorithms};
//!
//! let edges = [
//!     Edge::new(0, 1, 1u32),
//!     Edge::new(1, 2, 2),
//!     Edge::new(2, 3, 3),
//!     Edge::new(0, 3, 4),
//!     Edge::new(0, 2, 5),
//! ];
//! let client = CpuClient::new();
//!
//! let kruskal = client.kruskal_mst(&edges, 4).unwrap();
//! assert_eq!(kruskal.total_weight, 6);
//!
//! let graph = AdjacencyList::from_edges(4, &edges).unwrap();
//! let prim = client.prim_mst(&graph).unwrap();
//! assert_eq!(prim.total_weight, 6);
//! assert!(prim.is_spanning());
//! ```

pub mod generate;
pub mod graph;
pub mod report;

// Re-export main types for convenience
pub use generate::{GeneratorOptions, GraphDensity, GraphGenerator, Representation};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, CpuClient, DisjointSet, Edge, GraphError, GraphResult,
    MSTAlgorithms, MSTMethod, MSTResult, Weight,
};
pub use report::RunReport;
