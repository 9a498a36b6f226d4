use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::tree::ShortestPathTree;
use crate::algorithm::ShortestPaths;
use crate::data_structures::IndexPriorityQueue;
use crate::graph::{DirectedEdge, Graph};
use crate::{Error, Result};

/// Dijkstra's algorithm with eager relaxation over an indexed priority queue
///
/// Requires every edge weight to be non-negative. Each vertex leaves the
/// queue at most once, and its distance is final from that point on.
/// Runs in O((V + E) log V).
#[derive(Debug, Clone)]
pub struct DijkstraSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    tree: ShortestPathTree<W>,
}

impl<W> DijkstraSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes shortest paths from `source` to every vertex of `graph`.
    ///
    /// Fails with `Error::InvalidVertex` for a bad source and with
    /// `Error::NegativeWeight` if any edge has negative weight; the search
    /// does not start in either case.
    pub fn new<G>(graph: &G, source: usize) -> Result<Self>
    where
        G: Graph<W>,
    {
        graph.validate_vertex(source)?;
        reject_negative_weights(graph)?;
        Self::solve(graph, source)
    }

    /// Runs the search without the up-front weight scan
    pub(crate) fn solve<G>(graph: &G, source: usize) -> Result<Self>
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut tree = ShortestPathTree::new(n, source)?;
        let mut queue = IndexPriorityQueue::min(n);
        queue.insert(source, W::zero())?;

        let mut settled = 0usize;
        while let Some((v, _)) = queue.pop() {
            settled += 1;
            for edge in graph.outgoing_edges(v) {
                if !tree.relax(edge) {
                    continue;
                }

                let w = edge.to();
                let dist = tree.dist_to(w)?;
                if queue.contains(w)? {
                    queue.decrease_key(w, dist)?;
                } else {
                    queue.insert(w, dist)?;
                }
            }
        }

        debug!("Dijkstra from {} settled {} of {} vertices", source, settled, n);
        Ok(DijkstraSP { tree })
    }

    /// Verifies the optimality conditions of the computed paths
    pub fn check<G>(&self, graph: &G) -> Result<()>
    where
        G: Graph<W>,
    {
        reject_negative_weights(graph)?;
        self.tree.check(graph)
    }
}

pub(crate) fn reject_negative_weights<W, G>(graph: &G) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    match graph.find_negative_edge() {
        Some(edge) => Err(Error::NegativeWeight {
            from: edge.from(),
            to: edge.to(),
            weight: edge.weight().to_f64().unwrap_or(f64::NAN),
        }),
        None => Ok(()),
    }
}

impl<W> ShortestPaths<W> for DijkstraSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn source(&self) -> usize {
        self.tree.source()
    }

    fn dist_to(&self, vertex: usize) -> Result<W> {
        self.tree.dist_to(vertex)
    }

    fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.tree.path_to(vertex)
    }
}
