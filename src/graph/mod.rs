pub mod traits;
pub mod edge;
pub mod directed;
pub mod undirected;
pub mod matrix;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use edge::{total_weight, DirectedEdge, Edge};
pub use directed::EdgeWeightedDigraph;
pub use undirected::EdgeWeightedGraph;
pub use matrix::AdjMatrixDigraph;
