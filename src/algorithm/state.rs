use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a vertex stands in a running search.
///
/// A vertex only ever moves forward: `Pending -> Frontier -> Expanded`
/// (the source skips `Frontier`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexState {
    /// Not yet touched by the search
    Pending,
    /// Reached through an edge of an expanded vertex, distance not final yet
    Frontier,
    /// Shortest distance settled
    Expanded,
}

impl fmt::Display for VertexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VertexState::Pending => "pending",
            VertexState::Frontier => "frontier",
            VertexState::Expanded => "expanded",
        };
        f.write_str(name)
    }
}
