use rand::Rng;

use crate::geometry::Vector2D;
use crate::graph::{MapGraph, MapVertex, MutableGraph, WeightedEdge};
use crate::{Error, Result};

/// Hands out short display labels: `A`..`Z`, then `AA`, `BA`, .., `ZA`, `AB`, ..
///
/// The alphabet has no `W`, which leaves 25 letters per position.
#[derive(Debug, Default)]
pub struct LabelGenerator {
    issued: usize,
}

impl LabelGenerator {
    const ALPHABET: [&'static str; 26] = [
        "", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q",
        "R", "S", "T", "U", "V", "X", "Y", "Z",
    ];
    const LETTERS: usize = 25;

    /// Number of labels available before the generator runs dry
    pub const CAPACITY: usize = Self::LETTERS * (Self::LETTERS + 1);

    pub fn new() -> Self {
        LabelGenerator { issued: 0 }
    }

    pub fn next_label(&mut self) -> Result<String> {
        if self.issued >= Self::CAPACITY {
            return Err(Error::LabelsExhausted);
        }

        let first = self.issued % Self::LETTERS;
        let second = self.issued / Self::LETTERS;
        self.issued += 1;

        Ok(format!(
            "{}{}",
            Self::ALPHABET[first + 1],
            Self::ALPHABET[second]
        ))
    }
}

/// Generates the eight vertex demo graph: an octagon of unit edges `k1 -> k2 -> .. -> k8 -> k1`
/// plus a handful of chords, some cheaper and some dearer than going round.
pub fn ring_graph() -> Result<MapGraph> {
    let mut graph = MapGraph::with_capacity(8);
    let mut labels = LabelGenerator::new();

    let positions = [
        (-0.25, 0.75),
        (0.25, 0.75),
        (0.75, 0.25),
        (0.75, -0.25),
        (0.25, -0.75),
        (-0.25, -0.75),
        (-0.75, -0.25),
        (-0.75, 0.25),
    ];

    let mut ring = Vec::with_capacity(positions.len());
    for (i, (x, y)) in positions.iter().enumerate() {
        let vertex = MapVertex::new(
            format!("k{}", i + 1),
            Vector2D::new(*x, *y),
            labels.next_label()?,
        );
        graph.add_vertex(vertex.clone())?;
        ring.push(vertex);
    }

    for i in 0..ring.len() {
        let next = (i + 1) % ring.len();
        graph.add_edge(&ring[i], &ring[next], WeightedEdge::new(1.0))?;
    }

    let chords = [(0, 2, 1.0), (2, 0, 2.0), (2, 4, 3.0), (4, 6, 1.0), (6, 0, 3.0)];
    for (from, to, weight) in chords {
        graph.add_edge(&ring[from], &ring[to], WeightedEdge::new(weight))?;
    }

    Ok(graph)
}

/// Generates an `n x n` lattice spread over `[-0.75, 0.75]` on both axes.
///
/// Every cell has edges from its upper, left and upper-left neighbours, each
/// with a random integer weight in `1..=10`. Keys are `"{row}_{col}"`.
pub fn lattice_graph<R: Rng>(n: usize, rng: &mut R) -> Result<MapGraph> {
    let too_large = n
        .checked_mul(n)
        .map_or(true, |cells| cells > LabelGenerator::CAPACITY);
    if too_large {
        return Err(Error::InvalidGraph(format!(
            "a {}x{} lattice needs more than {} labels",
            n,
            n,
            LabelGenerator::CAPACITY
        )));
    }

    let mut graph = MapGraph::with_capacity(n * n);
    let mut labels = LabelGenerator::new();

    let (start, end) = (-0.75, 0.75);
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };

    let mut cells: Vec<Vec<MapVertex>> = Vec::with_capacity(n);
    for row in 0..n {
        let mut cells_in_row = Vec::with_capacity(n);
        for col in 0..n {
            // Rows run top to bottom
            let position = Vector2D::new(start + col as f64 * step, end - row as f64 * step);
            let vertex = MapVertex::new(format!("{}_{}", row, col), position, labels.next_label()?);
            graph.add_vertex(vertex.clone())?;

            if row > 0 {
                let weight = rng.gen_range(1..=10) as f64;
                graph.add_edge(&cells[row - 1][col], &vertex, WeightedEdge::new(weight))?;
            }
            if col > 0 {
                let weight = rng.gen_range(1..=10) as f64;
                graph.add_edge(&cells_in_row[col - 1], &vertex, WeightedEdge::new(weight))?;
            }
            if row > 0 && col > 0 {
                let weight = rng.gen_range(1..=10) as f64;
                graph.add_edge(&cells[row - 1][col - 1], &vertex, WeightedEdge::new(weight))?;
            }

            cells_in_row.push(vertex);
        }
        cells.push(cells_in_row);
    }

    Ok(graph)
}
