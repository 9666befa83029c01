//! Random weighted graph supply for the spanning tree engines.
//!
//! Produces edge lists (Kruskal workload) and adjacency lists (Prim
//! workload), built through either a weight matrix or per-vertex lists.

mod generator;
mod types;

pub use generator::GraphGenerator;
pub use types::{GeneratorOptions, GraphDensity, Representation};
