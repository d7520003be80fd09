//! Stepwise SSSP - pausable Dijkstra single-source shortest paths
//!
//! This library runs Dijkstra's algorithm one vertex expansion at a time so a
//! caller can stop after any step and inspect the traversal: which vertices are
//! still pending, which sit on the frontier, which are expanded, and what the
//! best known distances and paths look like at that moment.
//!
//! The engine works over any [`graph::Graph`] with non-negative edge costs
//! obtained through a caller supplied projection of the edge payload.

pub mod algorithm;
pub mod data_structures;
pub mod geometry;
pub mod graph;
pub mod web;

pub use algorithm::{numeric_cost, ShortestPathEngine, VertexState, IMPASSABLE, UNREACHABLE};
/// Re-export main types for convenient use
pub use graph::{Graph, MapVertex, MutableGraph, WeightedDirectedGraph, WeightedEdge};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {0} does not exist")]
    UnknownVertex(String),

    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    #[error("Edge ({0}, {1}) does not exist")]
    UnknownEdge(String, String),

    #[error("Edge ({0}, {1}) already exists")]
    DuplicateEdge(String, String),

    #[error("Invalid graph document: {0}")]
    InvalidGraph(String),

    #[error("Label generator is out of labels")]
    LabelsExhausted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
