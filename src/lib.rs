//! Weighted Paths - shortest paths and minimum spanning forests
//!
//! This library implements the classic algorithms over edge-weighted graphs:
//! single-source shortest paths (Dijkstra, Bellman-Ford), all-pairs shortest
//! paths (Floyd-Warshall, repeated Dijkstra) and minimum spanning forests
//! (lazy and eager Prim, Kruskal, Borůvka).
//!
//! Every solver reads an immutable graph snapshot, runs to completion inside
//! its constructor and afterwards only answers queries.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    all_pairs::{AllPairsBuilder, DijkstraAllPairsSP},
    bellman_ford::BellmanFordSP,
    boruvka::BoruvkaMST,
    dijkstra::DijkstraSP,
    floyd_warshall::FloydWarshall,
    kruskal::KruskalMST,
    mst::MstAlgorithm,
    prim::{LazyPrimMST, PrimMST},
    AllPairsShortestPaths, MinimumSpanningForest, ShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, Edge, EdgeWeightedDigraph, EdgeWeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex {vertex}: expected a vertex in [0, {vertex_count})")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Negative edge weight {weight} on edge {from}->{to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Edge {from}->{to} already exists")]
    DuplicateEdge { from: usize, to: usize },

    #[error("Unsupported operation: negative cost cycle exists")]
    NegativeCycle,

    #[error("Index {index} out of bounds for priority queue of capacity {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },

    #[error("Index {0} is already in the priority queue")]
    DuplicateIndex(usize),

    #[error("Index {0} is not in the priority queue")]
    MissingIndex(usize),

    #[error("New key for index {index} does not move in the requested direction")]
    KeyOrder { index: usize },

    #[error("Optimality certificate violated: {0}")]
    CertificateViolation(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
