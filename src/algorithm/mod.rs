pub mod traits;
pub mod tree;
pub mod cycle;
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;
pub mod all_pairs;
pub mod prim;
pub mod kruskal;
pub mod boruvka;
pub mod mst;

pub use traits::{AllPairsShortestPaths, MinimumSpanningForest, ShortestPaths};
