use std::fmt::Debug;
use log::{debug, warn};
use num_traits::{Float, Zero};

use crate::algorithm::cycle::DirectedCycle;
use crate::algorithm::AllPairsShortestPaths;
use crate::graph::traits::check_vertex;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, Graph};
use crate::{Error, Result};

/// Floyd-Warshall all-pairs shortest paths
///
/// Dense dynamic program over a `V x V` distance table, O(V^3) time and
/// O(V^2) space. Handles negative weights; stops as soon as some `dist[v][v]`
/// turns negative and reports the negative cycle instead.
#[derive(Debug, Clone)]
pub struct FloydWarshall<W>
where
    W: Float + Zero + Debug + Copy,
{
    dist: Vec<Vec<W>>,
    edge_to: Vec<Vec<Option<DirectedEdge<W>>>>,
    has_negative_cycle: bool,
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> FloydWarshall<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new<G>(graph: &G) -> Self
    where
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut dist = vec![vec![W::infinity(); n]; n];
        let mut edge_to: Vec<Vec<Option<DirectedEdge<W>>>> = vec![vec![None; n]; n];

        // Cheapest direct edge for every ordered pair
        for v in 0..n {
            for e in graph.outgoing_edges(v) {
                if e.weight() < dist[v][e.to()] {
                    dist[v][e.to()] = e.weight();
                    edge_to[v][e.to()] = Some(e);
                }
            }
            // Only a negative self-loop survives on the diagonal
            if dist[v][v] >= W::zero() {
                dist[v][v] = W::zero();
                edge_to[v][v] = None;
            }
        }

        let mut has_negative_cycle = false;
        'intermediate: for i in 0..n {
            for v in 0..n {
                if edge_to[v][i].is_none() {
                    continue;
                }
                for w in 0..n {
                    let through = dist[v][i] + dist[i][w];
                    if through < dist[v][w] {
                        dist[v][w] = through;
                        edge_to[v][w] = edge_to[i][w];
                    }
                }
                if dist[v][v] < W::zero() {
                    has_negative_cycle = true;
                    break 'intermediate;
                }
            }
        }

        let mut solver = FloydWarshall { dist, edge_to, has_negative_cycle, cycle: None };
        if has_negative_cycle {
            solver.cycle = solver.find_negative_cycle();
            warn!(
                "Floyd-Warshall found a negative cycle of {} edges",
                solver.cycle.as_ref().map_or(0, |c| c.len())
            );
        } else {
            debug!("Floyd-Warshall finished over {} vertices", n);
        }
        solver
    }

    /// Extracts a cycle from the predecessor links of the first row whose
    /// diagonal entry went negative
    fn find_negative_cycle(&self) -> Option<Vec<DirectedEdge<W>>> {
        let n = self.dist.len();
        for v in 0..n {
            if self.dist[v][v] >= W::zero() {
                continue;
            }

            let mut spt = EdgeWeightedDigraph::new(n);
            for edge in self.edge_to[v].iter().flatten() {
                spt.push_edge(*edge);
            }

            if let Some(cycle) = DirectedCycle::new(&spt).into_cycle() {
                return Some(cycle);
            }
        }
        None
    }

    fn validate(&self, source: usize, target: usize) -> Result<()> {
        check_vertex(source, self.dist.len())?;
        check_vertex(target, self.dist.len())?;
        if self.has_negative_cycle {
            return Err(Error::NegativeCycle);
        }
        Ok(())
    }
}

impl<W> AllPairsShortestPaths<W> for FloydWarshall<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    fn dist(&self, source: usize, target: usize) -> Result<W> {
        self.validate(source, target)?;
        Ok(self.dist[source][target])
    }

    fn path(&self, source: usize, target: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.validate(source, target)?;
        if self.dist[source][target] == W::infinity() {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut next = self.edge_to[source][target];
        while let Some(edge) = next {
            if path.len() >= self.dist.len() {
                return Err(Error::NegativeCycle);
            }
            path.push(edge);
            next = self.edge_to[source][edge.from()];
        }
        path.reverse();
        Ok(Some(path))
    }

    fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }

    fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }
}
