use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::MinimumSpanningForest;
use crate::data_structures::IndexPriorityQueue;
use crate::graph::{Edge, EdgeWeightedGraph, Graph};
use crate::Result;

/// Lazy Prim: grows a tree per component from a priority queue of crossing
/// edges, discarding edges that became ineligible only when they are popped.
/// O(E log E) time, O(E) queue space.
#[derive(Debug, Clone)]
pub struct LazyPrimMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    edges: Vec<Edge<W>>,
    weight: W,
}

impl<W> LazyPrimMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        // Edge ids break weight ties so the heap order is total
        let mut crossing: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>> = BinaryHeap::new();
        let mut edges = Vec::new();
        let mut weight = W::zero();

        for start in 0..n {
            if marked[start] {
                continue;
            }

            Self::visit(graph, start, &mut marked, &mut crossing);
            while let Some(Reverse((_, id))) = crossing.pop() {
                let edge = *graph.edge(id);
                let (v, w) = edge.endpoints();
                if marked[v] && marked[w] {
                    continue;
                }

                edges.push(edge);
                weight = weight + edge.weight();
                if !marked[v] {
                    Self::visit(graph, v, &mut marked, &mut crossing);
                }
                if !marked[w] {
                    Self::visit(graph, w, &mut marked, &mut crossing);
                }
            }
        }

        debug!("Lazy Prim selected {} edges of {}", edges.len(), graph.edge_count());
        LazyPrimMST { edges, weight }
    }

    /// Adds `vertex` to the tree and queues every edge leading out of it
    fn visit(
        graph: &EdgeWeightedGraph<W>,
        vertex: usize,
        marked: &mut [bool],
        crossing: &mut BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
    ) {
        marked[vertex] = true;
        for (id, edge) in graph.incident(vertex) {
            if let Some(other) = edge.other(vertex) {
                if !marked[other] {
                    crossing.push(Reverse((OrderedFloat(edge.weight()), id)));
                }
            }
        }
    }
}

impl<W> MinimumSpanningForest<W> for LazyPrimMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Lazy Prim"
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn weight(&self) -> W {
        self.weight
    }
}

/// Eager Prim: keeps one queue entry per non-tree vertex, keyed by the
/// lightest edge connecting it to the tree, and lowers that key in place.
/// O(E log V) time, O(V) queue space.
#[derive(Debug, Clone)]
pub struct PrimMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    edges: Vec<Edge<W>>,
    weight: W,
}

impl<W> PrimMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Result<Self> {
        let n = graph.vertex_count();
        let mut edge_to: Vec<Option<Edge<W>>> = vec![None; n];
        let mut dist_to = vec![W::infinity(); n];
        let mut marked = vec![false; n];
        let mut queue = IndexPriorityQueue::min(n);

        for start in 0..n {
            if marked[start] {
                continue;
            }

            dist_to[start] = W::zero();
            queue.insert(start, W::zero())?;
            while let Some((v, _)) = queue.pop() {
                marked[v] = true;
                for edge in graph.adjacent(v)? {
                    let w = match edge.other(v) {
                        Some(w) => w,
                        None => continue,
                    };
                    if marked[w] || !(edge.weight() < dist_to[w]) {
                        continue;
                    }

                    dist_to[w] = edge.weight();
                    edge_to[w] = Some(*edge);
                    if queue.contains(w)? {
                        queue.decrease_key(w, dist_to[w])?;
                    } else {
                        queue.insert(w, dist_to[w])?;
                    }
                }
            }
        }

        let edges: Vec<Edge<W>> = edge_to.into_iter().flatten().collect();
        let weight = edges.iter().fold(W::zero(), |acc, e| acc + e.weight());
        debug!("Prim selected {} edges of {}", edges.len(), graph.edge_count());
        Ok(PrimMST { edges, weight })
    }
}

impl<W> MinimumSpanningForest<W> for PrimMST<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn weight(&self) -> W {
        self.weight
    }
}
