//! Reader for the JSON graph interchange document.
//!
//! ```json
//! {
//!   "directed": true,
//!   "defaults": { "x": 0.0, "y": 0.0, "label": "?", "weight": 1.0 },
//!   "vertices": [ { "key": "a", "x": 0.1, "y": 0.2, "label": "A" } ],
//!   "edges": [ { "source": "a", "target": "b", "weight": 2.0 } ]
//! }
//! ```
//!
//! Per-item values override the defaults. The graph itself only guards
//! uniqueness; the reader additionally refuses undirected input and self loops.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::geometry::Vector2D;
use crate::graph::{Graph, MapGraph, MapVertex, MutableGraph, WeightedEdge};
use crate::{Error, Result};

fn default_directed() -> bool {
    true
}

/// Serialized form of a map graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub defaults: AttributeDefaults,
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// Fallback values for attributes an item leaves out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeDefaults {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub label: Option<String>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexRecord {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
}

/// Reads a graph document from disk
pub fn read_graph_json<P: AsRef<Path>>(path: P) -> Result<MapGraph> {
    let path = path.as_ref();
    log::info!("Reading graph from {}", path.display());
    let contents = fs::read_to_string(path)?;
    parse_graph_json(&contents)
}

/// Parses a graph document held in memory
pub fn parse_graph_json(contents: &str) -> Result<MapGraph> {
    let document: GraphDocument = serde_json::from_str(contents)?;
    build_graph(&document)
}

/// Builds a graph from an already deserialized document
pub fn build_graph(document: &GraphDocument) -> Result<MapGraph> {
    if !document.directed {
        return Err(Error::InvalidGraph(
            "only directed graphs are supported".to_string(),
        ));
    }

    let defaults = &document.defaults;
    let mut graph = MapGraph::with_capacity(document.vertices.len());

    for record in &document.vertices {
        let x = record
            .x
            .or(defaults.x)
            .ok_or_else(|| incomplete(&record.key, "x coordinate"))?;
        let y = record
            .y
            .or(defaults.y)
            .ok_or_else(|| incomplete(&record.key, "y coordinate"))?;
        let label = record
            .label
            .clone()
            .or_else(|| defaults.label.clone())
            .ok_or_else(|| incomplete(&record.key, "label"))?;

        graph.add_vertex(MapVertex::new(record.key.clone(), Vector2D::new(x, y), label))?;
    }

    for record in &document.edges {
        if record.directed == Some(false) {
            return Err(Error::InvalidGraph(format!(
                "edge ({}, {}) is undirected",
                record.source, record.target
            )));
        }
        if record.source == record.target {
            return Err(Error::InvalidGraph(format!(
                "edge ({}, {}) references itself",
                record.source, record.target
            )));
        }

        let source = MapVertex::probe(record.source.as_str());
        let target = MapVertex::probe(record.target.as_str());
        for endpoint in [&source, &target] {
            if !graph.has_vertex(endpoint) {
                return Err(Error::InvalidGraph(format!(
                    "edge ({}, {}) references unknown vertex {}",
                    record.source, record.target, endpoint.key
                )));
            }
        }

        let weight = record.weight.or(defaults.weight).ok_or_else(|| {
            Error::InvalidGraph(format!(
                "edge ({}, {}) has no weight",
                record.source, record.target
            ))
        })?;
        graph.add_edge(&source, &target, WeightedEdge::new(weight))?;
    }

    log::debug!(
        "Built graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Serializes a graph back into a document, with vertices and edges sorted by key
pub fn to_document(graph: &MapGraph) -> GraphDocument {
    let mut vertices: Vec<&MapVertex> = graph.vertices().collect();
    vertices.sort();

    let mut edges = Vec::with_capacity(graph.edge_count());
    for source in &vertices {
        let mut outgoing: Vec<(&MapVertex, &WeightedEdge)> = graph.outgoing_edges(source).collect();
        outgoing.sort_by(|a, b| a.0.cmp(b.0));
        for (target, edge) in outgoing {
            edges.push(EdgeRecord {
                source: source.key.clone(),
                target: target.key.clone(),
                weight: Some(edge.weight),
                directed: None,
            });
        }
    }

    GraphDocument {
        directed: true,
        defaults: AttributeDefaults::default(),
        vertices: vertices
            .into_iter()
            .map(|v| VertexRecord {
                key: v.key.clone(),
                x: Some(v.position.x),
                y: Some(v.position.y),
                label: Some(v.label.clone()),
            })
            .collect(),
        edges,
    }
}

fn incomplete(key: &str, attribute: &str) -> Error {
    Error::InvalidGraph(format!("vertex {} has no {}", key, attribute))
}

