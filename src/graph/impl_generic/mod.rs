//! Generic spanning tree implementations.
//!
//! Plain sequential algorithms over `Edge` slices and `AdjacencyList`s,
//! written once and delegated to by the backend trait impls in `cpu/`.

mod helpers;
mod kruskal;
mod prim;
mod union_find;

pub use helpers::{validate_adjacency, validate_edges, validate_node};
pub use kruskal::kruskal_impl;
pub use prim::prim_impl;
pub use union_find::DisjointSet;
