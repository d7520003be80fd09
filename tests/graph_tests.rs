use stepwise_sssp::graph::{Graph, MutableGraph, WeightedDirectedGraph};
use stepwise_sssp::Error;

fn empty() -> WeightedDirectedGraph<&'static str, i32> {
    WeightedDirectedGraph::new()
}

fn with_vertices(names: &[&'static str]) -> WeightedDirectedGraph<&'static str, i32> {
    let mut graph = empty();
    for name in names {
        graph.add_vertex(*name).unwrap();
    }
    graph
}

fn sorted_neighbours(graph: &WeightedDirectedGraph<&'static str, i32>, v: &'static str) -> Vec<&'static str> {
    let mut neighbours: Vec<&'static str> = graph.neighbours(&v).unwrap().copied().collect();
    neighbours.sort();
    neighbours
}

#[test]
fn test_add_vertex_increases_vertex_count() {
    let mut graph = empty();
    assert_eq!(graph.vertices().count(), 0);

    graph.add_vertex("v1").unwrap();
    assert_eq!(graph.vertex_count(), 1);
    assert!(graph.has_vertex(&"v1"));
}

#[test]
fn test_remove_vertex_decreases_vertex_count() {
    let mut graph = with_vertices(&["v1"]);
    graph.remove_vertex(&"v1").unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert!(!graph.has_vertex(&"v1"));
}

#[test]
fn test_remove_vertex_removes_incident_edges() {
    let mut graph = with_vertices(&["v1", "v2", "v3"]);
    graph.add_edge(&"v1", &"v2", 0).unwrap();
    graph.add_edge(&"v2", &"v3", 0).unwrap();
    graph.add_edge(&"v3", &"v1", 0).unwrap();
    assert_eq!(graph.edge_count(), 3);

    graph.remove_vertex(&"v2").unwrap();

    assert!(!graph.has_vertex(&"v2"));
    assert!(sorted_neighbours(&graph, "v1").is_empty());
    assert!(matches!(graph.neighbours(&"v2"), Err(Error::UnknownVertex(_))));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_edge(&"v3", &"v1").unwrap());
    assert_eq!(graph.incoming_neighbours(&"v3").unwrap().count(), 0);
}

#[test]
fn test_remove_vertex_with_self_loop_keeps_edge_count_consistent() {
    let mut graph = with_vertices(&["v1", "v2"]);
    graph.add_edge(&"v1", &"v1", 0).unwrap();
    graph.add_edge(&"v1", &"v2", 0).unwrap();
    graph.add_edge(&"v2", &"v1", 0).unwrap();

    graph.remove_vertex(&"v1").unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert!(sorted_neighbours(&graph, "v2").is_empty());
}

#[test]
fn test_add_edge_adds_neighbour() {
    let mut graph = with_vertices(&["v1", "v2"]);
    assert!(sorted_neighbours(&graph, "v1").is_empty());

    graph.add_edge(&"v1", &"v2", 0).unwrap();
    assert_eq!(sorted_neighbours(&graph, "v1"), vec!["v2"]);
    assert!(graph.has_edge(&"v1", &"v2").unwrap());
}

#[test]
fn test_edges_are_directed() {
    let mut graph = with_vertices(&["v1", "v2"]);
    graph.add_edge(&"v1", &"v2", 1).unwrap();
    assert!(!graph.has_edge(&"v2", &"v1").unwrap());

    // The reverse edge is independent and may carry a different payload
    graph.add_edge(&"v2", &"v1", 7).unwrap();
    assert_eq!(*graph.get_edge(&"v1", &"v2").unwrap(), 1);
    assert_eq!(*graph.get_edge(&"v2", &"v1").unwrap(), 7);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_remove_edge_removes_neighbour() {
    let mut graph = with_vertices(&["v1", "v2"]);
    graph.add_edge(&"v1", &"v2", 0).unwrap();

    assert_eq!(graph.remove_edge(&"v1", &"v2").unwrap(), 0);
    assert!(!graph.has_edge(&"v1", &"v2").unwrap());
    assert!(sorted_neighbours(&graph, "v1").is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_get_edge_returns_stored_payload() {
    let mut graph = with_vertices(&["v1", "v2"]);
    graph.add_edge(&"v1", &"v2", 1).unwrap();
    assert_eq!(*graph.get_edge(&"v1", &"v2").unwrap(), 1);

    graph.remove_edge(&"v1", &"v2").unwrap();
    graph.add_edge(&"v1", &"v2", 2).unwrap();
    assert_eq!(*graph.get_edge(&"v1", &"v2").unwrap(), 2);
}

#[test]
fn test_duplicate_vertex_is_rejected() {
    let mut graph = with_vertices(&["v1"]);
    assert!(matches!(graph.add_vertex("v1"), Err(Error::DuplicateVertex(_))));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_duplicate_edge_is_rejected_and_payload_kept() {
    let mut graph = with_vertices(&["v1", "v2"]);
    graph.add_edge(&"v1", &"v2", 0).unwrap();

    assert!(matches!(
        graph.add_edge(&"v1", &"v2", 1),
        Err(Error::DuplicateEdge(_, _))
    ));
    assert_eq!(*graph.get_edge(&"v1", &"v2").unwrap(), 0);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_missing_edge_lookups_fail() {
    let mut graph = with_vertices(&["v1", "v2"]);
    assert!(matches!(graph.get_edge(&"v1", &"v2"), Err(Error::UnknownEdge(_, _))));
    assert!(matches!(graph.remove_edge(&"v1", &"v2"), Err(Error::UnknownEdge(_, _))));
}

#[test]
fn test_unknown_vertices_are_rejected_without_mutation() {
    let mut graph = with_vertices(&["v1"]);

    assert!(matches!(graph.add_edge(&"v1", &"nope", 0), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.add_edge(&"nope", &"v1", 0), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.has_edge(&"v1", &"nope"), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.remove_vertex(&"nope"), Err(Error::UnknownVertex(_))));
    assert!(matches!(graph.neighbours(&"nope"), Err(Error::UnknownVertex(_))));

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.outgoing_edges(&"nope").count(), 0);
}

#[test]
fn test_error_messages_name_the_vertices() {
    let mut graph = with_vertices(&["v1", "v2"]);
    graph.add_edge(&"v1", &"v2", 0).unwrap();

    let err = graph.add_edge(&"v1", &"v2", 0).unwrap_err();
    assert_eq!(err.to_string(), "Edge (\"v1\", \"v2\") already exists");
}
