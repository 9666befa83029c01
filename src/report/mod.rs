//! Run statistics and console reporting for spanning tree runs.

use std::fmt;
use std::mem::size_of;
use std::time::{Duration, Instant};

use crate::generate::Representation;
use crate::graph::traits::types::{Edge, MSTMethod, MSTResult, Weight};

/// Run `f` and return its output with the wall-clock time it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Estimated bytes needed to hold the input graph.
///
/// A matrix holds one weight per vertex pair; a list holds one `Edge` per
/// stored entry.
pub fn estimate_space_usage<W>(
    representation: Representation,
    num_vertices: usize,
    num_edges: usize,
) -> usize {
    match representation {
        Representation::Matrix => num_vertices
            .saturating_mul(num_vertices)
            .saturating_mul(size_of::<W>()),
        Representation::List => num_edges.saturating_mul(size_of::<Edge<W>>()),
    }
}

/// Human-readable byte count (B, KiB, MiB, GiB).
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Outcome of one spanning tree run, printable for the console.
#[derive(Debug, Clone)]
pub struct RunReport<W> {
    pub method: MSTMethod,
    pub num_input_edges: usize,
    pub result: MSTResult<W>,
    pub elapsed: Duration,
    pub estimated_bytes: usize,
    /// Print every tree edge, not just the summary.
    pub list_edges: bool,
}

impl<W: Weight> RunReport<W> {
    pub fn new(
        method: MSTMethod,
        num_input_edges: usize,
        result: MSTResult<W>,
        elapsed: Duration,
        estimated_bytes: usize,
    ) -> Self {
        Self {
            method,
            num_input_edges,
            result,
            elapsed,
            estimated_bytes,
            list_edges: true,
        }
    }

    pub fn with_edge_listing(mut self, list_edges: bool) -> Self {
        self.list_edges = list_edges;
        self
    }

    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

impl<W: Weight> fmt::Display for RunReport<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = &self.result;
        writeln!(f, "Minimum Spanning Tree ({}):", self.method)?;
        if self.list_edges {
            for edge in &result.edges {
                writeln!(f, "Edge: {edge}")?;
            }
        }

        let status = if result.is_spanning() {
            "spanning tree"
        } else {
            match self.method {
                MSTMethod::Kruskal => "spanning forest",
                MSTMethod::Prim => "partial tree from vertex 0",
            }
        };
        writeln!(
            f,
            "Tree edges: {} of {} needed ({status})",
            result.num_edges(),
            result.num_vertices.saturating_sub(1)
        )?;
        writeln!(f, "Input edges: {}", self.num_input_edges)?;
        writeln!(f, "Total weight: {}", result.total_weight)?;
        writeln!(f, "Execution Time: {:.3} milliseconds", self.elapsed_millis())?;
        write!(f, "Space Usage (estimated): {}", format_bytes(self.estimated_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_space_usage() {
        assert_eq!(estimate_space_usage::<u32>(Representation::Matrix, 10, 3), 400);
        assert_eq!(
            estimate_space_usage::<u32>(Representation::List, 10, 3),
            3 * size_of::<Edge<u32>>()
        );
        assert_eq!(estimate_space_usage::<u32>(Representation::Matrix, 0, 0), 0);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MiB");
    }

    #[test]
    fn test_timed() {
        let (value, elapsed) = timed(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_report_display() {
        let result = MSTResult::new(vec![Edge::new(0, 1, 1u32), Edge::new(1, 2, 2)], 3);
        let report = RunReport::new(
            MSTMethod::Kruskal,
            5,
            result,
            Duration::from_micros(1500),
            2048,
        );
        assert_eq!(report.result.num_vertices, 3);
        let text = report.to_string();

        assert!(text.starts_with("Minimum Spanning Tree (Kruskal):\n"));
        assert!(text.contains("Edge: 0 - 1 (1)\nEdge: 1 - 2 (2)\n"));
        assert!(text.contains("Tree edges: 2 of 2 needed (spanning tree)"));
        assert!(text.contains("Total weight: 3"));
        assert!(text.contains("Execution Time: 1.500 milliseconds"));
        assert!(text.ends_with("Space Usage (estimated): 2.00 KiB"));
    }

    #[test]
    fn test_report_partial_without_edges() {
        let result = MSTResult::new(vec![Edge::new(0, 1, 1u32)], 4);
        let report = RunReport::new(MSTMethod::Prim, 2, result, Duration::ZERO, 10)
            .with_edge_listing(false);
        let text = report.to_string();

        assert!(!text.contains("Edge: "));
        assert!(text.contains("Tree edges: 1 of 3 needed (partial tree from vertex 0)"));
    }
}
