pub mod directed;
pub mod generators;
pub mod loader;
pub mod traits;
pub mod vertex;

pub use directed::WeightedDirectedGraph;
pub use traits::{Graph, MutableGraph};
pub use vertex::{MapVertex, WeightedEdge};

/// Graph of positioned, labelled vertices as produced by the loader and generators
pub type MapGraph = WeightedDirectedGraph<MapVertex, WeightedEdge>;
