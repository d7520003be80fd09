use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A directed graph implementation using adjacency maps keyed by vertex identity
#[derive(Debug, Clone)]
pub struct WeightedDirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Outgoing edges for each vertex: source -> {target -> payload}
    outgoing_edges: HashMap<V, HashMap<V, E>>,

    /// Incoming edges for each vertex: target -> {source}
    incoming_edges: HashMap<V, HashSet<V>>,

    edge_count: usize,
}

impl<V, E> WeightedDirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        WeightedDirectedGraph {
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedDirectedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
            incoming_edges: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Returns the stored vertex equal to `vertex`.
    ///
    /// Useful when identity is a key and the stored value carries more data
    /// than the probe used to look it up.
    pub fn get_vertex(&self, vertex: &V) -> Option<&V> {
        self.outgoing_edges.get_key_value(vertex).map(|(stored, _)| stored)
    }

    /// Returns every source with an edge into `vertex`
    pub fn incoming_neighbours(&self, vertex: &V) -> Result<impl Iterator<Item = &V> + '_> {
        self.incoming_edges
            .get(vertex)
            .map(|sources| sources.iter())
            .ok_or_else(|| unknown_vertex(vertex))
    }

    fn require_vertex(&self, vertex: &V) -> Result<&HashMap<V, E>> {
        self.outgoing_edges
            .get(vertex)
            .ok_or_else(|| unknown_vertex(vertex))
    }
}

impl<V, E> Default for WeightedDirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_vertex<V: Debug>(vertex: &V) -> Error {
    Error::UnknownVertex(format!("{:?}", vertex))
}

fn unknown_edge<V: Debug>(source: &V, target: &V) -> Error {
    Error::UnknownEdge(format!("{:?}", source), format!("{:?}", target))
}

impl<V, E> Graph for WeightedDirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Debug,
{
    type Vertex = V;
    type Edge = E;

    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, &E)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn neighbours(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &V> + '_>> {
        let edges = self.require_vertex(vertex)?;
        Ok(Box::new(edges.keys()))
    }

    fn has_edge(&self, source: &V, target: &V) -> Result<bool> {
        let edges = self.require_vertex(source)?;
        if !self.has_vertex(target) {
            return Err(unknown_vertex(target));
        }
        Ok(edges.contains_key(target))
    }

    fn get_edge(&self, source: &V, target: &V) -> Result<&E> {
        if self.has_edge(source, target)? {
            self.outgoing_edges
                .get(source)
                .and_then(|edges| edges.get(target))
                .ok_or_else(|| unknown_edge(source, target))
        } else {
            Err(unknown_edge(source, target))
        }
    }
}

impl<V, E> MutableGraph for WeightedDirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Debug,
{
    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.has_vertex(&vertex) {
            return Err(Error::DuplicateVertex(format!("{:?}", vertex)));
        }

        self.incoming_edges.insert(vertex.clone(), HashSet::new());
        self.outgoing_edges.insert(vertex, HashMap::new());
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let outgoing = self
            .outgoing_edges
            .remove(vertex)
            .ok_or_else(|| unknown_vertex(vertex))?;
        let incoming = self.incoming_edges.remove(vertex).unwrap_or_default();

        // Self loops show up on both sides; count them once
        let self_loop = outgoing.contains_key(vertex);
        for target in outgoing.keys() {
            if let Some(sources) = self.incoming_edges.get_mut(target) {
                sources.remove(vertex);
            }
        }
        for source in &incoming {
            if let Some(targets) = self.outgoing_edges.get_mut(source) {
                targets.remove(vertex);
            }
        }

        let removed = outgoing.len() + incoming.len() - usize::from(self_loop);
        self.edge_count -= removed;
        Ok(())
    }

    fn add_edge(&mut self, source: &V, target: &V, edge: E) -> Result<()> {
        if self.has_edge(source, target)? {
            return Err(Error::DuplicateEdge(
                format!("{:?}", source),
                format!("{:?}", target),
            ));
        }

        if let Some(targets) = self.outgoing_edges.get_mut(source) {
            targets.insert(target.clone(), edge);
        }
        if let Some(sources) = self.incoming_edges.get_mut(target) {
            sources.insert(source.clone());
        }
        self.edge_count += 1;
        Ok(())
    }

    fn remove_edge(&mut self, source: &V, target: &V) -> Result<E> {
        if !self.has_edge(source, target)? {
            return Err(unknown_edge(source, target));
        }

        let edge = self
            .outgoing_edges
            .get_mut(source)
            .and_then(|targets| targets.remove(target))
            .ok_or_else(|| unknown_edge(source, target))?;
        if let Some(sources) = self.incoming_edges.get_mut(target) {
            sources.remove(source);
        }
        self.edge_count -= 1;
        Ok(edge)
    }
}
