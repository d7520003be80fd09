use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

use stepwise_sssp::graph::generators::{lattice_graph, ring_graph};
use stepwise_sssp::graph::loader::read_graph_json;
use stepwise_sssp::graph::{Graph, MapGraph, MapVertex};
use stepwise_sssp::{ShortestPathEngine, VertexState, WeightedEdge, UNREACHABLE};

const USAGE: &str = "usage: step_trace <ring | lattice <size> [seed] | <file.json>> [source-key]";

fn load(args: &[String]) -> Result<(MapGraph, Option<String>), Box<dyn std::error::Error>> {
    match args.first().map(String::as_str) {
        Some("ring") => Ok((ring_graph()?, args.get(1).cloned())),
        Some("lattice") => {
            let size: usize = args.get(1).ok_or(USAGE)?.parse()?;
            let seed: u64 = match args.get(2) {
                Some(seed) => seed.parse()?,
                None => 0,
            };
            let graph = lattice_graph(size, &mut StdRng::seed_from_u64(seed))?;
            Ok((graph, args.get(3).cloned()))
        }
        Some(path) => Ok((read_graph_json(path)?, args.get(1).cloned())),
        None => Err(USAGE.into()),
    }
}

fn keys_in(engine_state: &[(&MapVertex, VertexState)], wanted: VertexState) -> String {
    engine_state
        .iter()
        .filter(|(_, state)| *state == wanted)
        .map(|(v, _)| v.key.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (graph, source_key) = load(&args)?;

    let mut vertices: Vec<&MapVertex> = graph.vertices().collect();
    vertices.sort();

    let source = match source_key {
        Some(key) => Some(
            graph
                .get_vertex(&MapVertex::probe(key.as_str()))
                .cloned()
                .ok_or_else(|| format!("no vertex with key {}", key))?,
        ),
        None => vertices.first().map(|v| (*v).clone()),
    };

    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut engine = ShortestPathEngine::new(&graph, source, WeightedEdge::cost);
    while let Some(expanded) = engine.step() {
        let states: Vec<(&MapVertex, VertexState)> = vertices
            .iter()
            .map(|v| (*v, engine.state_of(v).unwrap_or(VertexState::Pending)))
            .collect();
        println!(
            "step {:>3}: expanded {:<8} d = {:<8.1} frontier [{}]",
            engine.steps_taken(),
            expanded.key,
            engine.shortest_path_cost_to(&expanded),
            keys_in(&states, VertexState::Frontier)
        );
    }

    println!();
    for vertex in &vertices {
        let cost = engine.shortest_path_cost_to(vertex);
        if cost < UNREACHABLE {
            let path: Vec<String> = engine
                .shortest_path_to(vertex)
                .into_iter()
                .map(|v| v.key)
                .collect();
            println!("{:<8} {:>8.1}  {}", vertex.key, cost, path.join(" -> "));
        } else {
            println!("{:<8} {:>8}", vertex.key, "-");
        }
    }

    Ok(())
}
