//! Minimum spanning tree algorithms for weighted undirected graphs.
//!
//! This module provides:
//! - Minimum spanning tree (Kruskal, eager Prim)
//! - Disjoint-set (union-find) with path compression and union by size
//! - Graph containers (edge lists, adjacency lists, adjacency matrices)
//!
//! ```text
//! graph/
//! ├── mod.rs                # Exports only
//! ├── error.rs              # GraphError / GraphResult
//! ├── traits/               # Algorithm trait + data types
//! ├── impl_generic/         # Algorithms (written once)
//! └── cpu/                  # CPU trait impl (pure delegation)
//! ```

mod cpu;
pub mod error;
pub mod impl_generic;
pub mod traits;

pub use cpu::CpuClient;
pub use error::{GraphError, GraphResult};
pub use impl_generic::DisjointSet;
pub use traits::*;
