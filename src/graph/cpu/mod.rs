//! CPU implementation of graph algorithms.
//!
//! This module implements the graph algorithm traits for CPU
//! by delegating to the generic implementations in `impl_generic/`.

mod mst;

/// Sequential CPU backend.
///
/// Stateless: every call allocates and drops its own working storage, so
/// one client can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuClient;

impl CpuClient {
    pub fn new() -> Self {
        Self
    }
}
