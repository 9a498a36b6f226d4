use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::MinimumSpanningForest;
use crate::data_structures::{DisjointSet, UnionFind};
use crate::graph::{Edge, EdgeWeightedGraph, Graph};
use crate::Result;

/// Borůvka's algorithm: in each round every component picks its cheapest
/// incident edge and all picks are merged at once. At most ceil(log V)
/// rounds, O(E log V) total.
#[derive(Debug, Clone)]
pub struct BoruvkaMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    edges: Vec<Edge<W>>,
    weight: W,
}

impl<W> BoruvkaMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Result<Self> {
        let n = graph.vertex_count();
        let all: Vec<Edge<W>> = graph.edges().copied().collect();
        let mut components = UnionFind::with_len(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut weight = W::zero();

        let mut round = 0usize;
        let mut span = 1usize;
        while span < n && edges.len() + 1 < n {
            round += 1;

            // Cheapest edge id leaving each component, ties broken by id
            let mut cheapest: Vec<Option<usize>> = vec![None; n];
            for (id, edge) in all.iter().enumerate() {
                let (v, w) = edge.endpoints();
                let i = components.find(v)?;
                let j = components.find(w)?;
                if i == j {
                    continue;
                }
                for root in [i, j] {
                    let better = match cheapest[root] {
                        None => true,
                        Some(best) => lighter(&all, id, best),
                    };
                    if better {
                        cheapest[root] = Some(id);
                    }
                }
            }

            let before = edges.len();
            for id in cheapest.into_iter().flatten() {
                let edge = all[id];
                let (v, w) = edge.endpoints();
                if components.union(v, w)? {
                    edges.push(edge);
                    weight = weight + edge.weight();
                }
            }

            trace!(
                "Borůvka round {} added {} edges, {} components remain",
                round,
                edges.len() - before,
                components.count()
            );
            if edges.len() == before {
                break;
            }
            span += span;
        }

        debug!("Borůvka selected {} edges in {} rounds", edges.len(), round);
        Ok(BoruvkaMST { edges, weight })
    }
}

/// Orders edges by weight, then by id, so every component agrees on which
/// of several equal-weight edges is cheapest
fn lighter<W>(edges: &[Edge<W>], a: usize, b: usize) -> bool
where
    W: Float + Zero + Debug + Copy,
{
    let (wa, wb) = (edges[a].weight(), edges[b].weight());
    wa < wb || (wa == wb && a < b)
}

impl<W> MinimumSpanningForest<W> for BoruvkaMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Borůvka"
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn weight(&self) -> W {
        self.weight
    }
}
