use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::geometry::Vector2D;

/// A vertex placed on a 2D map.
///
/// Identity is the `key` alone: two vertices with the same key are equal no
/// matter where they are drawn or how they are labelled.
#[derive(Clone, Serialize, Deserialize)]
pub struct MapVertex {
    pub key: String,
    pub position: Vector2D,
    pub label: String,
}

impl MapVertex {
    pub fn new(key: impl Into<String>, position: Vector2D, label: impl Into<String>) -> Self {
        MapVertex {
            key: key.into(),
            position,
            label: label.into(),
        }
    }

    /// A vertex carrying only a key, for lookups against a graph
    pub fn probe(key: impl Into<String>) -> Self {
        MapVertex::new(key, Vector2D::default(), "")
    }
}

impl PartialEq for MapVertex {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for MapVertex {}

impl Hash for MapVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for MapVertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MapVertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Debug for MapVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex{{key = '{}', label = '{}'}}", self.key, self.label)
    }
}

/// Edge payload of a map graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(weight: f64) -> Self {
        WeightedEdge { weight }
    }

    /// Cost projection for the shortest path engine
    pub fn cost(edge: &WeightedEdge) -> f64 {
        edge.weight
    }
}
