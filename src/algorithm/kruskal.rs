use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::MinimumSpanningForest;
use crate::data_structures::{DisjointSet, UnionFind};
use crate::graph::{Edge, EdgeWeightedGraph, Graph};
use crate::Result;

/// Kruskal's algorithm: scans edges by ascending weight and keeps each one
/// that joins two different components. O(E log E).
#[derive(Debug, Clone)]
pub struct KruskalMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    edges: Vec<Edge<W>>,
    weight: W,
}

impl<W> KruskalMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes the forest using [`UnionFind`] to track components
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Result<Self> {
        Self::with_disjoint_set::<UnionFind>(graph)
    }

    /// Computes the forest with the chosen disjoint-set variant
    pub fn with_disjoint_set<D>(graph: &EdgeWeightedGraph<W>) -> Result<Self>
    where
        D: DisjointSet,
    {
        let n = graph.vertex_count();
        let mut sorted: Vec<Edge<W>> = graph.edges().copied().collect();
        // Stable, so equal weights keep insertion order
        sorted.sort_by_key(|e| OrderedFloat(e.weight()));

        let mut components = D::with_len(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut weight = W::zero();

        for edge in sorted {
            if edges.len() + 1 >= n {
                break;
            }

            let (v, w) = edge.endpoints();
            if components.union(v, w)? {
                edges.push(edge);
                weight = weight + edge.weight();
            }
        }

        debug!(
            "Kruskal selected {} edges, {} components remain",
            edges.len(),
            components.count()
        );
        Ok(KruskalMST { edges, weight })
    }
}

impl<W> MinimumSpanningForest<W> for KruskalMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn weight(&self) -> W {
        self.weight
    }
}
