use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use stepwise_sssp::geometry::{BoundingBox, Vector2D};
use stepwise_sssp::graph::generators::{lattice_graph, ring_graph, LabelGenerator};
use stepwise_sssp::graph::{Graph, MapGraph, MapVertex, MutableGraph};
use stepwise_sssp::{Error, WeightedEdge};

fn graph_with_one_vertex() -> (MapGraph, MapVertex) {
    let mut graph = MapGraph::new();
    let v1 = MapVertex::new("v1", Vector2D::new(0.0, 0.0), "l1");
    graph.add_vertex(v1.clone()).unwrap();
    (graph, v1)
}

#[test]
fn test_vertex_identity_is_the_key() {
    let a = MapVertex::new("v1", Vector2D::new(0.0, 0.0), "l1");
    let b = MapVertex::new("v1", Vector2D::new(1.0, 2.0), "other");
    let c = MapVertex::new("v2", Vector2D::new(0.0, 0.0), "l1");

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<MapVertex> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_vertex_lookup_by_key() {
    let (graph, v1) = graph_with_one_vertex();
    let found = graph.get_vertex(&MapVertex::probe("v1")).unwrap();
    assert_eq!(found.label, "l1");
    assert_eq!(found.position, v1.position);
    assert!(graph.get_vertex(&MapVertex::probe("v2")).is_none());
}

#[test]
fn test_vertex_debug_shows_key_and_label() {
    let v = MapVertex::new("k1", Vector2D::new(0.5, 0.5), "A");
    assert_eq!(format!("{:?}", v), "Vertex{key = 'k1', label = 'A'}");
}

#[test]
fn test_adding_equal_key_twice_is_rejected() {
    let (mut graph, _) = graph_with_one_vertex();
    let clash = MapVertex::new("v1", Vector2D::new(9.0, 9.0), "elsewhere");
    assert!(matches!(graph.add_vertex(clash), Err(Error::DuplicateVertex(_))));
}

#[test]
fn test_bounding_box_encloses_points() {
    let points = [
        Vector2D::new(-1.0, 2.0),
        Vector2D::new(3.0, -2.0),
        Vector2D::new(0.0, 0.0),
    ];
    let bounds = BoundingBox::enclosing(&points).unwrap();

    assert_eq!(bounds.lower_left, Vector2D::new(-1.0, -2.0));
    assert_eq!(bounds.upper_right, Vector2D::new(3.0, 2.0));
    assert_eq!(
        BoundingBox::enclosing(&points[2..]),
        Some(BoundingBox::new(Vector2D::default(), Vector2D::default()))
    );
    assert!(BoundingBox::enclosing(std::iter::empty::<&Vector2D>()).is_none());
}

#[test]
fn test_label_sequence() {
    let mut labels = LabelGenerator::new();
    let issued: Vec<String> = (0..LabelGenerator::CAPACITY)
        .map(|_| labels.next_label().unwrap())
        .collect();

    assert_eq!(issued[0], "A");
    assert_eq!(issued[21], "V");
    assert_eq!(issued[22], "X");
    assert_eq!(issued[24], "Z");
    assert_eq!(issued[25], "AA");
    assert_eq!(issued[26], "BA");
    assert_eq!(issued[50], "AB");
    assert_eq!(issued[LabelGenerator::CAPACITY - 1], "ZZ");
    assert!(issued.iter().all(|label| !label.contains('W')));

    let unique: HashSet<&String> = issued.iter().collect();
    assert_eq!(unique.len(), LabelGenerator::CAPACITY);
}

#[test]
fn test_labels_run_out() {
    let mut labels = LabelGenerator::new();
    for _ in 0..LabelGenerator::CAPACITY {
        labels.next_label().unwrap();
    }
    assert!(matches!(labels.next_label(), Err(Error::LabelsExhausted)));
    assert!(matches!(labels.next_label(), Err(Error::LabelsExhausted)));
}

#[test]
fn test_ring_graph_layout() {
    let graph = ring_graph().unwrap();
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 13);

    let k1 = graph.get_vertex(&MapVertex::probe("k1")).unwrap();
    let k8 = graph.get_vertex(&MapVertex::probe("k8")).unwrap();
    assert_eq!(k1.label, "A");
    assert_eq!(k8.label, "H");

    let chord = graph
        .get_edge(&MapVertex::probe("k3"), &MapVertex::probe("k1"))
        .unwrap();
    assert_eq!(*chord, WeightedEdge::new(2.0));
    assert!(graph
        .has_edge(&MapVertex::probe("k8"), &MapVertex::probe("k1"))
        .unwrap());
}

#[test]
fn test_lattice_graph_shape() {
    let mut rng = StdRng::seed_from_u64(1);
    let graph = lattice_graph(6, &mut rng).unwrap();

    assert_eq!(graph.vertex_count(), 36);
    // Vertical, horizontal and diagonal edges
    assert_eq!(graph.edge_count(), 30 + 30 + 25);

    for vertex in graph.vertices() {
        for (_, edge) in graph.outgoing_edges(vertex) {
            assert!((1.0..=10.0).contains(&edge.weight));
            assert_eq!(edge.weight.fract(), 0.0);
        }
    }
    assert!(graph
        .has_edge(&MapVertex::probe("2_2"), &MapVertex::probe("3_3"))
        .unwrap());
    assert!(!graph
        .has_edge(&MapVertex::probe("3_3"), &MapVertex::probe("2_2"))
        .unwrap());
}

#[test]
fn test_lattice_graph_positions() {
    let graph = lattice_graph(3, &mut StdRng::seed_from_u64(5)).unwrap();
    let at = |key: &str| graph.get_vertex(&MapVertex::probe(key)).unwrap().position;

    // Rows run top to bottom, columns left to right
    assert_eq!(at("0_0"), Vector2D::new(-0.75, 0.75));
    assert_eq!(at("0_2"), Vector2D::new(0.75, 0.75));
    assert_eq!(at("1_1"), Vector2D::new(0.0, 0.0));
    assert_eq!(at("2_0"), Vector2D::new(-0.75, -0.75));

    let labels: Vec<String> = ["0_0", "0_1", "0_2", "1_0"]
        .iter()
        .map(|key| graph.get_vertex(&MapVertex::probe(*key)).unwrap().label.clone())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_lattice_graph_is_reproducible_from_a_seed() {
    let first = lattice_graph(4, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = lattice_graph(4, &mut StdRng::seed_from_u64(99)).unwrap();

    for vertex in first.vertices() {
        for (target, edge) in first.outgoing_edges(vertex) {
            assert_eq!(second.get_edge(vertex, target).unwrap(), edge);
        }
    }
}

#[test]
fn test_lattice_graph_limits() {
    let single = lattice_graph(1, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(single.vertex_count(), 1);
    assert_eq!(single.edge_count(), 0);

    assert!(lattice_graph(25, &mut StdRng::seed_from_u64(0)).is_ok());
    assert!(matches!(
        lattice_graph(26, &mut StdRng::seed_from_u64(0)),
        Err(Error::InvalidGraph(_))
    ));
    // n * n does not fit in a usize
    assert!(matches!(
        lattice_graph(1usize << 33, &mut StdRng::seed_from_u64(0)),
        Err(Error::InvalidGraph(_))
    ));
    assert!(matches!(
        lattice_graph(usize::MAX, &mut StdRng::seed_from_u64(0)),
        Err(Error::InvalidGraph(_))
    ));
}
