pub mod engine;
pub mod state;

pub use engine::{numeric_cost, ShortestPathEngine, IMPASSABLE, UNREACHABLE};
pub use state::VertexState;
