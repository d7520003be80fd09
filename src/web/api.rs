use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{VertexState, UNREACHABLE};
use crate::geometry::BoundingBox;
use crate::graph::generators::{lattice_graph, ring_graph};
use crate::graph::loader::{build_graph, to_document, GraphDocument};
use crate::graph::{Graph, MapGraph, MapVertex};
use crate::web::models::*;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Stores a session, evicting the oldest ones beyond `max_sessions`
    fn insert(&self, session: Session) -> SessionSnapshot {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.id);
            match oldest {
                Some(id) => {
                    log::info!("Evicting session {}", id);
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        log::info!(
            "Created session {} ({} vertices, {} edges)",
            session.id,
            session.graph.vertex_count(),
            session.graph.edge_count()
        );
        let snapshot = snapshot(&session);
        sessions.insert(session.id, session);
        snapshot
    }

    /// Runs `f` on a session while holding the session lock
    fn with_session<T>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, ApiError>,
    ) -> ApiResult<T> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        match sessions.get_mut(&session_id) {
            Some(session) => f(session).map(Json),
            None => Err(error(
                StatusCode::NOT_FOUND,
                "session_not_found",
                "Session not found".to_string(),
            )),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/load", post(load_graph))
        .route("/api/sessions", get(list_sessions))
        .route(
            "/api/sessions/:session_id",
            get(get_session).delete(delete_session),
        )
        .route("/api/sessions/:session_id/document", get(export_document))
        .route("/api/sessions/:session_id/source", post(select_source))
        .route("/api/sessions/:session_id/target", post(select_target))
        .route("/api/sessions/:session_id/step", post(step))
        .route("/api/sessions/:session_id/run", post(run_to_completion))
        .route("/api/sessions/:session_id/reset", post(reset))
        .route("/api/sessions/:session_id/path/:target", get(get_path))
        .route("/api/health", get(health_check))
}

/// Generate a new graph and open a session on it
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> ApiResult<SessionSnapshot> {
    let graph = match request.graph_type.as_str() {
        "ring" => ring_graph(),
        "lattice" => {
            let mut rng = match request.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            lattice_graph(request.size, &mut rng)
        }
        _ => {
            return Err(error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    }
    .map_err(|e| error(StatusCode::BAD_REQUEST, "graph_generation_failed", e.to_string()))?;

    Ok(Json(state.insert(Session::new(graph))))
}

/// Load a graph from an interchange document and open a session on it
pub async fn load_graph(
    State(state): State<AppState>,
    Json(document): Json<GraphDocument>,
) -> ApiResult<SessionSnapshot> {
    let graph = build_graph(&document)
        .map_err(|e| error(StatusCode::BAD_REQUEST, "invalid_graph", e.to_string()))?;

    Ok(Json(state.insert(Session::new(graph))))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<SessionSummary>> {
    let sessions = state.sessions.lock().unwrap_or_else(PoisonError::into_inner);
    let mut summaries: Vec<SessionSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|s| s.created_at);
    Ok(Json(summaries))
}

/// Get the current snapshot of a session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    state.with_session(session_id, |session| Ok(snapshot(session)))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSummary> {
    let mut sessions = state.sessions.lock().unwrap_or_else(PoisonError::into_inner);
    match sessions.remove(&session_id) {
        Some(session) => {
            log::info!("Closed session {}", session_id);
            Ok(Json(session.summary()))
        }
        None => Err(error(
            StatusCode::NOT_FOUND,
            "session_not_found",
            "Session not found".to_string(),
        )),
    }
}

/// Export the session graph as an interchange document
pub async fn export_document(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<GraphDocument> {
    state.with_session(session_id, |session| Ok(to_document(&session.graph)))
}

/// Choose the source vertex; only allowed before the first step
pub async fn select_source(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SourceRequest>,
) -> ApiResult<SessionSnapshot> {
    state.with_session(session_id, |session| {
        if session.engine.steps_taken() > 0 {
            return Err(error(
                StatusCode::CONFLICT,
                "search_in_progress",
                "Reset the search before choosing another source".to_string(),
            ));
        }

        let source = request
            .source
            .as_deref()
            .map(|key| resolve_vertex(&session.graph, key))
            .transpose()?;
        session.select_source(source);
        Ok(snapshot(session))
    })
}

/// Choose the target whose path and cost are reported
pub async fn select_target(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<TargetRequest>,
) -> ApiResult<SessionSnapshot> {
    state.with_session(session_id, |session| {
        session.target = request
            .target
            .as_deref()
            .map(|key| resolve_vertex(&session.graph, key))
            .transpose()?;
        Ok(snapshot(session))
    })
}

/// Expand a single vertex
pub async fn step(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<StepResponse> {
    state.with_session(session_id, |session| match session.engine.step() {
        Some(expanded) => Ok(StepResponse {
            expanded: expanded.key,
            snapshot: snapshot(session),
        }),
        None => Err(error(
            StatusCode::CONFLICT,
            "search_completed",
            "The search is already complete".to_string(),
        )),
    })
}

/// Step until the search is complete
pub async fn run_to_completion(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<RunResponse> {
    state.with_session(session_id, |session| {
        let start_time = Instant::now();
        let steps_executed = session.engine.run_to_completion();
        let execution_time = start_time.elapsed();

        Ok(RunResponse {
            steps_executed,
            execution_time_ms: execution_time.as_secs_f64() * 1000.0,
            snapshot: snapshot(session),
        })
    })
}

/// Start the search over from the same source
pub async fn reset(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    state.with_session(session_id, |session| {
        session.reset();
        Ok(snapshot(session))
    })
}

/// Shortest path and cost to any vertex, at the current moment of the search
pub async fn get_path(
    State(state): State<AppState>,
    Path((session_id, target)): Path<(Uuid, String)>,
) -> ApiResult<PathResponse> {
    state.with_session(session_id, |session| {
        let target = resolve_vertex(&session.graph, &target)?;
        Ok(PathResponse {
            source: session.engine.source_vertex().map(|v| v.key.clone()),
            path: keys(session.engine.shortest_path_to(&target)),
            cost: finite(session.engine.shortest_path_cost_to(&target)),
            completed: session.engine.is_completed(),
            target: target.key,
        })
    })
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn error(status: StatusCode, code: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message,
            details: None,
        }),
    )
}

fn resolve_vertex(graph: &MapGraph, key: &str) -> Result<MapVertex, ApiError> {
    graph
        .get_vertex(&MapVertex::probe(key))
        .cloned()
        .ok_or_else(|| {
            error(
                StatusCode::BAD_REQUEST,
                "unknown_vertex",
                format!("Vertex {} does not exist", key),
            )
        })
}

fn finite(distance: f64) -> Option<f64> {
    (distance < UNREACHABLE).then_some(distance)
}

fn keys(path: Vec<MapVertex>) -> Vec<String> {
    path.into_iter().map(|v| v.key).collect()
}

/// Builds the drawable view of a session
pub fn snapshot(session: &Session) -> SessionSnapshot {
    let graph = &session.graph;
    let engine = &session.engine;
    let source = engine.source_vertex();
    let target = session.target.as_ref();

    // The path is only drawn once it can no longer change
    let target_path = match target {
        Some(target) if engine.is_completed() => engine.shortest_path_to(target),
        _ => Vec::new(),
    };

    let mut ordered: Vec<&MapVertex> = graph.vertices().collect();
    ordered.sort();

    let vertices = ordered
        .iter()
        .map(|vertex| WebVertex {
            key: vertex.key.clone(),
            label: vertex.label.clone(),
            x: vertex.position.x,
            y: vertex.position.y,
            state: engine.state_of(vertex).unwrap_or(VertexState::Pending),
            distance: finite(engine.shortest_path_cost_to(vertex)),
            predecessor: engine.predecessor_of(vertex).map(|p| p.key.clone()),
            is_source: source == Some(*vertex),
            is_target: target == Some(*vertex),
        })
        .collect();

    let mut edges = Vec::with_capacity(graph.edge_count());
    for vertex in &ordered {
        let visited = engine.state_of(vertex) == Some(VertexState::Expanded);
        let mut outgoing: Vec<_> = graph.outgoing_edges(vertex).collect();
        outgoing.sort_by(|a, b| a.0.cmp(b.0));

        for (neighbour, edge) in outgoing {
            let on_path = target_path
                .windows(2)
                .any(|pair| &pair[0] == *vertex && &pair[1] == neighbour);
            edges.push(WebEdge {
                source: vertex.key.clone(),
                target: neighbour.key.clone(),
                weight: edge.weight,
                bidirectional: graph.has_edge(neighbour, vertex).unwrap_or(false),
                visited,
                on_path,
            });
        }
    }

    SessionSnapshot {
        id: session.id,
        created_at: session.created_at,
        vertices,
        edges,
        completed: engine.is_completed(),
        steps_taken: engine.steps_taken(),
        source: source.map(|v| v.key.clone()),
        target: target.map(|v| v.key.clone()),
        target_cost: target.and_then(|t| finite(engine.shortest_path_cost_to(t))),
        target_path: keys(target_path),
        bounds: BoundingBox::enclosing(ordered.iter().map(|v| &v.position)),
    }
}
