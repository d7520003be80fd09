use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::Result;

/// Trait representing a directed graph with arbitrary edge payloads
pub trait Graph: Debug {
    /// Vertex type; identity is its `Eq`/`Hash` implementation
    type Vertex: Clone + Eq + Hash + Debug;

    /// Payload stored on every edge
    type Edge;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex, in no particular order
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns an iterator over the outgoing edges from a vertex.
    /// An absent vertex has no outgoing edges.
    fn outgoing_edges(
        &self,
        vertex: &Self::Vertex,
    ) -> Box<dyn Iterator<Item = (&Self::Vertex, &Self::Edge)> + '_>;

    /// Returns every target reachable through a single edge from `vertex`
    fn neighbours(&self, vertex: &Self::Vertex)
        -> Result<Box<dyn Iterator<Item = &Self::Vertex> + '_>>;

    /// Returns true if there's an edge from `source` to `target`
    fn has_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Result<bool>;

    /// Gets the payload of an edge
    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Result<&Self::Edge>;
}

/// Trait for mutable graph operations.
///
/// Every operation either succeeds completely or leaves the graph untouched.
pub trait MutableGraph: Graph {
    /// Adds a vertex with no edges
    fn add_vertex(&mut self, vertex: Self::Vertex) -> Result<()>;

    /// Removes a vertex together with every edge it is an endpoint of
    fn remove_vertex(&mut self, vertex: &Self::Vertex) -> Result<()>;

    /// Adds a directed edge between two existing vertices
    fn add_edge(
        &mut self,
        source: &Self::Vertex,
        target: &Self::Vertex,
        edge: Self::Edge,
    ) -> Result<()>;

    /// Removes an edge and hands back its payload
    fn remove_edge(&mut self, source: &Self::Vertex, target: &Self::Vertex) -> Result<Self::Edge>;
}

impl<G> Graph for &G
where
    G: Graph + ?Sized,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_> {
        (**self).vertices()
    }

    fn has_vertex(&self, vertex: &Self::Vertex) -> bool {
        (**self).has_vertex(vertex)
    }

    fn outgoing_edges(
        &self,
        vertex: &Self::Vertex,
    ) -> Box<dyn Iterator<Item = (&Self::Vertex, &Self::Edge)> + '_> {
        (**self).outgoing_edges(vertex)
    }

    fn neighbours(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<Box<dyn Iterator<Item = &Self::Vertex> + '_>> {
        (**self).neighbours(vertex)
    }

    fn has_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Result<bool> {
        (**self).has_edge(source, target)
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Result<&Self::Edge> {
        (**self).get_edge(source, target)
    }
}

impl<G> Graph for Arc<G>
where
    G: Graph + ?Sized,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_> {
        (**self).vertices()
    }

    fn has_vertex(&self, vertex: &Self::Vertex) -> bool {
        (**self).has_vertex(vertex)
    }

    fn outgoing_edges(
        &self,
        vertex: &Self::Vertex,
    ) -> Box<dyn Iterator<Item = (&Self::Vertex, &Self::Edge)> + '_> {
        (**self).outgoing_edges(vertex)
    }

    fn neighbours(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<Box<dyn Iterator<Item = &Self::Vertex> + '_>> {
        (**self).neighbours(vertex)
    }

    fn has_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Result<bool> {
        (**self).has_edge(source, target)
    }

    fn get_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> Result<&Self::Edge> {
        (**self).get_edge(source, target)
    }
}
