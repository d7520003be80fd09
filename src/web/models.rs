use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::{ShortestPathEngine, VertexState};
use crate::geometry::BoundingBox;
use crate::graph::{Graph, MapGraph, MapVertex, WeightedEdge};

/// Cost projection used by every web session
pub type EdgeCost = fn(&WeightedEdge) -> f64;

/// Engine type held by a session
pub type MapEngine = ShortestPathEngine<Arc<MapGraph>, EdgeCost>;

/// Represents a vertex of the session graph together with its search state
#[derive(Debug, Clone, Serialize)]
pub struct WebVertex {
    pub key: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub state: VertexState,
    /// `None` while the vertex is unreached
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<String>,
    pub is_source: bool,
    pub is_target: bool,
}

/// Represents an edge of the session graph
#[derive(Debug, Clone, Serialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    /// The reverse edge exists too
    pub bidirectional: bool,
    /// The source vertex has been expanded
    pub visited: bool,
    /// The edge lies on the shortest path to the selected target
    pub on_path: bool,
}

/// Everything a client needs to draw the current moment of a search
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertices: Vec<WebVertex>,
    pub edges: Vec<WebEdge>,
    pub completed: bool,
    pub steps_taken: usize,
    pub source: Option<String>,
    pub target: Option<String>,
    /// Shortest path to the target, only filled in once the search is complete
    pub target_path: Vec<String>,
    /// Best known cost to the target, `None` while unreached
    pub target_cost: Option<f64>,
    pub bounds: Option<BoundingBox>,
}

/// Short description of a session for listings
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub steps_taken: usize,
    pub completed: bool,
}

/// Result of a single step
#[derive(Debug, Clone, Serialize)]
pub struct StepResponse {
    pub expanded: String,
    pub snapshot: SessionSnapshot,
}

/// Result of running a search to completion
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    pub steps_executed: usize,
    pub execution_time_ms: f64,
    pub snapshot: SessionSnapshot,
}

/// Shortest path query answer
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub source: Option<String>,
    pub target: String,
    pub path: Vec<String>,
    pub cost: Option<f64>,
    pub completed: bool,
}

fn default_size() -> usize {
    6
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Picks a new source; `null` clears it
#[derive(Debug, Deserialize)]
pub struct SourceRequest {
    pub source: Option<String>,
}

/// Picks a new target; `null` clears it
#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    pub target: Option<String>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing a graph and the search running over it
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<MapGraph>,
    pub engine: MapEngine,
    pub target: Option<MapVertex>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Opens a session with the first vertex (by label) as both source and target
    pub fn new(graph: MapGraph) -> Self {
        let graph = Arc::new(graph);
        let first = first_by_label(&graph);
        Self {
            id: Uuid::new_v4(),
            engine: new_engine(&graph, first.clone()),
            target: first,
            graph,
            created_at: Utc::now(),
        }
    }

    /// Starts a fresh search from `source`
    pub fn select_source(&mut self, source: Option<MapVertex>) {
        self.engine = new_engine(&self.graph, source);
    }

    /// Starts the search over from the same source
    pub fn reset(&mut self) {
        let source = self.engine.source_vertex().cloned();
        self.select_source(source);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            created_at: self.created_at,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            steps_taken: self.engine.steps_taken(),
            completed: self.engine.is_completed(),
        }
    }
}

fn new_engine(graph: &Arc<MapGraph>, source: Option<MapVertex>) -> MapEngine {
    ShortestPathEngine::new(Arc::clone(graph), source, WeightedEdge::cost as EdgeCost)
}

/// Shortest labels first, then alphabetical
fn first_by_label(graph: &MapGraph) -> Option<MapVertex> {
    graph
        .vertices()
        .min_by(|a, b| {
            a.label
                .len()
                .cmp(&b.label.len())
                .then_with(|| a.label.cmp(&b.label))
                .then_with(|| a.key.cmp(&b.key))
        })
        .cloned()
}
