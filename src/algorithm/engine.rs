use log::{debug, info, warn};
use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::algorithm::state::VertexState;
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::Graph;

/// Distance of every vertex the search has not reached.
///
/// Larger than any finite cost, including `f64::MAX`.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Cost of an edge the search must never follow
pub const IMPASSABLE: f64 = f64::NAN;

/// Cost projection for payloads that are plain numbers.
///
/// A payload with no `f64` representation costs [`IMPASSABLE`].
pub fn numeric_cost<E: ToPrimitive>(edge: &E) -> f64 {
    edge.to_f64().unwrap_or(IMPASSABLE)
}

/// Dijkstra's algorithm, one vertex expansion per [`step`](Self::step).
///
/// All traversal state is built when the engine is created and updated as a
/// whole by every step, so the engine can be inspected between any two steps:
/// distances, predecessors and per-vertex [`VertexState`] always describe the
/// same moment of the search.
///
/// Edge costs come from `cost` and must be non-negative; negative costs are
/// not checked and give meaningless results. An edge whose route cost is not
/// finite (a NaN or infinite cost, or a sum overflowing `f64`) is ignored.
///
/// Vertices with equal distance are expanded in ascending `Ord` order.
pub struct ShortestPathEngine<G, C>
where
    G: Graph,
    G::Vertex: Ord,
    C: Fn(&G::Edge) -> f64,
{
    graph: G,
    source: Option<G::Vertex>,
    cost: C,

    /// Best known distance from the source
    distances: HashMap<G::Vertex, f64>,

    /// Vertex through which the best known distance is reached
    predecessors: HashMap<G::Vertex, G::Vertex>,

    /// Vertices whose distance may still improve
    frontier: IndexedPriorityQueue<G::Vertex, OrderedFloat<f64>>,

    finalized: HashSet<G::Vertex>,
    states: HashMap<G::Vertex, VertexState>,
    steps_taken: usize,
}

impl<G, C> ShortestPathEngine<G, C>
where
    G: Graph,
    G::Vertex: Ord,
    C: Fn(&G::Edge) -> f64,
{
    /// Prepares a search over `graph` starting at `source`.
    ///
    /// With no source (or one the graph does not contain) nothing is
    /// reachable and the engine is complete from the start.
    pub fn new(graph: G, source: Option<G::Vertex>, cost: C) -> Self {
        let source = source.filter(|vertex| {
            let known = graph.has_vertex(vertex);
            if !known {
                warn!("Source vertex {:?} is not part of the graph", vertex);
            }
            known
        });

        let n = graph.vertex_count();
        let mut distances = HashMap::with_capacity(n);
        let mut states = HashMap::with_capacity(n);
        for vertex in graph.vertices() {
            distances.insert(vertex.clone(), UNREACHABLE);
            states.insert(vertex.clone(), VertexState::Pending);
        }
        if let Some(source) = &source {
            distances.insert(source.clone(), 0.0);
        }

        let mut frontier = IndexedPriorityQueue::with_capacity(n);
        for (vertex, distance) in &distances {
            frontier.push(vertex.clone(), OrderedFloat(*distance));
        }

        let mut engine = ShortestPathEngine {
            graph,
            source,
            cost,
            distances,
            predecessors: HashMap::new(),
            frontier,
            finalized: HashSet::with_capacity(n),
            states,
            steps_taken: 0,
        };
        engine.discard_unreachable();
        engine
    }

    /// Returns true once no vertex is left to expand
    pub fn is_completed(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Expands the closest unsettled vertex and relaxes its outgoing edges.
    ///
    /// Returns the expanded vertex, or `None` without doing anything when the
    /// search is already complete.
    pub fn step(&mut self) -> Option<G::Vertex> {
        let (current, _) = self.frontier.pop()?;
        let current_distance = self.distance(&current);

        self.finalized.insert(current.clone());
        self.states.insert(current.clone(), VertexState::Expanded);
        self.steps_taken += 1;
        debug!(
            "Step {}: expanded {:?} at distance {}",
            self.steps_taken, current, current_distance
        );

        for (neighbour, edge) in self.graph.outgoing_edges(&current) {
            if self.finalized.contains(neighbour) {
                continue;
            }

            let candidate = current_distance + (self.cost)(edge);
            if !candidate.is_finite() {
                continue;
            }
            self.states.insert(neighbour.clone(), VertexState::Frontier);

            if candidate < self.distance(neighbour) {
                self.distances.insert(neighbour.clone(), candidate);
                self.predecessors.insert(neighbour.clone(), current.clone());
                self.frontier
                    .decrease_key(neighbour, OrderedFloat(candidate));
            }
        }

        self.discard_unreachable();
        if self.is_completed() {
            info!(
                "Search from {:?} completed after {} steps",
                self.source, self.steps_taken
            );
        }
        Some(current)
    }

    /// Steps until the search is complete and returns how many steps that took
    pub fn run_to_completion(&mut self) -> usize {
        let mut steps = 0;
        while self.step().is_some() {
            steps += 1;
        }
        steps
    }

    /// Vertices from the source to `target`, both included.
    ///
    /// Empty when `target` has not been reached (yet). The source's own path
    /// is just the source.
    pub fn shortest_path_to(&self, target: &G::Vertex) -> Vec<G::Vertex> {
        let Some(source) = &self.source else {
            return Vec::new();
        };
        if target != source && !self.predecessors.contains_key(target) {
            return Vec::new();
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessors.get(current) {
            path.push(previous.clone());
            current = previous;

            // Only negative costs can close a predecessor cycle
            if path.len() > self.distances.len() {
                warn!("Predecessor cycle while tracing path to {:?}", target);
                return Vec::new();
            }
        }

        path.reverse();
        path
    }

    /// Best known distance to `target`, [`UNREACHABLE`] if it has not been reached
    pub fn shortest_path_cost_to(&self, target: &G::Vertex) -> f64 {
        self.distance(target)
    }

    pub fn source_vertex(&self) -> Option<&G::Vertex> {
        self.source.as_ref()
    }

    /// Classification of every vertex of the graph
    pub fn state(&self) -> &HashMap<G::Vertex, VertexState> {
        &self.states
    }

    pub fn state_of(&self, vertex: &G::Vertex) -> Option<VertexState> {
        self.states.get(vertex).copied()
    }

    /// Vertex through which `vertex` is currently reached
    pub fn predecessor_of(&self, vertex: &G::Vertex) -> Option<&G::Vertex> {
        self.predecessors.get(vertex)
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    fn distance(&self, vertex: &G::Vertex) -> f64 {
        self.distances.get(vertex).copied().unwrap_or(UNREACHABLE)
    }

    /// Once the closest queued vertex is unreachable, so is every other one:
    /// they stay pending and the search is over.
    fn discard_unreachable(&mut self) {
        let exhausted = matches!(
            self.frontier.peek(),
            Some((_, distance)) if distance.into_inner() >= UNREACHABLE
        );
        if exhausted {
            debug!(
                "Dropping {} unreachable vertices from the frontier",
                self.frontier.len()
            );
            self.frontier.clear();
        }
    }
}

impl<G, C> fmt::Debug for ShortestPathEngine<G, C>
where
    G: Graph,
    G::Vertex: Ord,
    C: Fn(&G::Edge) -> f64,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPathEngine")
            .field("source", &self.source)
            .field("steps_taken", &self.steps_taken)
            .field("frontier", &self.frontier.len())
            .field("finalized", &self.finalized.len())
            .finish_non_exhaustive()
    }
}
