//! Cycle detection for directed and undirected edge-weighted graphs.
//!
//! Both detectors run an iterative depth-first search so deep graphs do not
//! exhaust the call stack.

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{DirectedEdge, Edge, EdgeWeightedGraph, Graph};

/// Finds a directed cycle, if one exists
///
/// Uses DFS colouring: an edge into a vertex still on the DFS stack closes a
/// cycle, which is rebuilt by walking `edge_to` from the edge's tail back to
/// its head.
#[derive(Debug, Clone)]
pub struct DirectedCycle<W>
where
    W: Float + Zero + Debug + Copy,
{
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> DirectedCycle<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new<G>(graph: &G) -> Self
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to: Vec<Option<DirectedEdge<W>>> = vec![None; n];

        for s in 0..n {
            if marked[s] {
                continue;
            }
            if let Some(cycle) = Self::search(graph, s, &mut marked, &mut on_stack, &mut edge_to) {
                return DirectedCycle { cycle: Some(cycle) };
            }
        }

        DirectedCycle { cycle: None }
    }

    fn search<G>(
        graph: &G,
        start: usize,
        marked: &mut [bool],
        on_stack: &mut [bool],
        edge_to: &mut [Option<DirectedEdge<W>>],
    ) -> Option<Vec<DirectedEdge<W>>>
    where
        G: Graph<W>,
    {
        let mut stack = vec![(start, graph.outgoing_edges(start))];
        marked[start] = true;
        on_stack[start] = true;

        loop {
            let (v, next) = match stack.last_mut() {
                Some((v, edges)) => (*v, edges.next()),
                None => return None,
            };

            let edge = match next {
                Some(edge) => edge,
                None => {
                    on_stack[v] = false;
                    stack.pop();
                    continue;
                }
            };

            let w = edge.to();
            if !marked[w] {
                marked[w] = true;
                on_stack[w] = true;
                edge_to[w] = Some(edge);
                stack.push((w, graph.outgoing_edges(w)));
            } else if on_stack[w] {
                let mut cycle = vec![edge];
                let mut current = v;
                while current != w {
                    match edge_to[current] {
                        Some(back) => {
                            cycle.push(back);
                            current = back.from();
                        }
                        None => break,
                    }
                }
                cycle.reverse();
                return Some(cycle);
            }
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the cycle's edges in traversal order
    pub fn cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }

    pub fn into_cycle(self) -> Option<Vec<DirectedEdge<W>>> {
        self.cycle
    }
}

/// Finds a cycle in an undirected graph, if one exists
///
/// Self-loops and parallel edges are cycles. The search follows edge ids
/// rather than parent vertices, so two parallel edges are told apart.
#[derive(Debug, Clone)]
pub struct UndirectedCycle<W>
where
    W: Float + Zero + Debug + Copy,
{
    cycle: Option<Vec<Edge<W>>>,
}

impl<W> UndirectedCycle<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];

        for s in 0..n {
            if marked[s] {
                continue;
            }
            if let Some(cycle) = Self::search(graph, s, &mut marked, &mut on_stack, &mut edge_to) {
                return UndirectedCycle { cycle: Some(cycle) };
            }
        }

        UndirectedCycle { cycle: None }
    }

    fn search(
        graph: &EdgeWeightedGraph<W>,
        start: usize,
        marked: &mut [bool],
        on_stack: &mut [bool],
        edge_to: &mut [Option<usize>],
    ) -> Option<Vec<Edge<W>>> {
        let mut stack = vec![(start, graph.incident(start))];
        marked[start] = true;
        on_stack[start] = true;

        loop {
            let (v, next) = match stack.last_mut() {
                Some((v, edges)) => (*v, edges.next()),
                None => return None,
            };

            let (id, edge) = match next {
                Some(incident) => incident,
                None => {
                    on_stack[v] = false;
                    stack.pop();
                    continue;
                }
            };

            // Do not walk straight back along the edge we arrived by.
            if edge_to[v] == Some(id) {
                continue;
            }

            let w = match edge.other(v) {
                Some(w) => w,
                None => continue,
            };

            if !marked[w] {
                marked[w] = true;
                on_stack[w] = true;
                edge_to[w] = Some(id);
                stack.push((w, graph.incident(w)));
            } else if on_stack[w] {
                let mut cycle = vec![*edge];
                let mut current = v;
                while current != w {
                    match edge_to[current] {
                        Some(back_id) => {
                            let back = graph.edge(back_id);
                            cycle.push(*back);
                            current = match back.other(current) {
                                Some(parent) => parent,
                                None => break,
                            };
                        }
                        None => break,
                    }
                }
                cycle.reverse();
                return Some(cycle);
            }
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    pub fn cycle(&self) -> Option<&[Edge<W>]> {
        self.cycle.as_deref()
    }
}
