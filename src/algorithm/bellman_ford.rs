use std::collections::VecDeque;
use std::fmt::Debug;
use log::{debug, warn};
use num_traits::{Float, Zero};

use crate::algorithm::cycle::DirectedCycle;
use crate::algorithm::tree::ShortestPathTree;
use crate::algorithm::ShortestPaths;
use crate::graph::{total_weight, DirectedEdge, Graph};
use crate::{Error, Result};

/// Queue-based Bellman-Ford with negative cycle detection
///
/// Accepts any finite edge weights. Only vertices whose distance changed in
/// the previous pass are revisited. After every `V` edge relaxations the
/// predecessor links are searched for a cycle; one found there is a
/// negative cycle reachable from the source and stops the algorithm.
/// O(V E) in the worst case.
#[derive(Debug, Clone)]
pub struct BellmanFordSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    tree: ShortestPathTree<W>,
    cycle: Option<Vec<DirectedEdge<W>>>,
    relaxations: usize,
}

impl<W> BellmanFordSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes shortest paths from `source`, or finds a negative cycle
    /// reachable from it
    pub fn new<G>(graph: &G, source: usize) -> Result<Self>
    where
        G: Graph<W>,
    {
        graph.validate_vertex(source)?;

        let n = graph.vertex_count();
        let mut tree = ShortestPathTree::new(n, source)?;
        let mut on_queue = vec![false; n];
        let mut queue = VecDeque::new();
        let mut cycle = None;
        let mut relaxations = 0usize;

        queue.push_back(source);
        on_queue[source] = true;

        'passes: while let Some(v) = queue.pop_front() {
            on_queue[v] = false;
            for edge in graph.outgoing_edges(v) {
                if tree.relax(edge) && !on_queue[edge.to()] {
                    queue.push_back(edge.to());
                    on_queue[edge.to()] = true;
                }

                relaxations += 1;
                if relaxations % n == 0 {
                    cycle = find_negative_cycle(&tree);
                    if cycle.is_some() {
                        break 'passes;
                    }
                }
            }
        }

        match &cycle {
            Some(c) => warn!(
                "Bellman-Ford from {} found a negative cycle of {} edges after {} relaxations",
                source,
                c.len(),
                relaxations
            ),
            None => debug!("Bellman-Ford from {} finished after {} relaxations", source, relaxations),
        }

        Ok(BellmanFordSP { tree, cycle, relaxations })
    }

    /// Returns the number of edge relaxations attempted
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }

    /// Verifies either that the reported negative cycle really is negative
    /// or that the optimality conditions hold
    pub fn check<G>(&self, graph: &G) -> Result<()>
    where
        G: Graph<W>,
    {
        match &self.cycle {
            Some(cycle) => {
                let weight = total_weight(cycle.iter());
                if weight < W::zero() {
                    Ok(())
                } else {
                    Err(Error::CertificateViolation(format!(
                        "reported negative cycle has weight {:?}",
                        weight
                    )))
                }
            }
            None => self.tree.check(graph),
        }
    }

    fn ensure_no_cycle(&self) -> Result<()> {
        if self.cycle.is_some() {
            Err(Error::NegativeCycle)
        } else {
            Ok(())
        }
    }
}

/// Looks for a cycle among the current predecessor links.
///
/// Builds a throwaway digraph from `edge_to`, one pass over `V` entries,
/// and runs directed cycle detection on it.
fn find_negative_cycle<W>(tree: &ShortestPathTree<W>) -> Option<Vec<DirectedEdge<W>>>
where
    W: Float + Zero + Debug + Copy,
{
    let spt = tree.predecessor_digraph();
    DirectedCycle::new(&spt).into_cycle()
}

impl<W> ShortestPaths<W> for BellmanFordSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn source(&self) -> usize {
        self.tree.source()
    }

    fn dist_to(&self, vertex: usize) -> Result<W> {
        self.ensure_no_cycle()?;
        self.tree.dist_to(vertex)
    }

    fn has_path_to(&self, vertex: usize) -> Result<bool> {
        self.ensure_no_cycle()?;
        self.tree.has_path_to(vertex)
    }

    fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.ensure_no_cycle()?;
        self.tree.path_to(vertex)
    }

    fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }
}
