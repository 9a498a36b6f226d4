use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::dijkstra::{reject_negative_weights, DijkstraSP};
use crate::algorithm::{AllPairsShortestPaths, ShortestPaths};
use crate::graph::traits::check_vertex;
use crate::graph::{DirectedEdge, Graph};
use crate::Result;

/// All-pairs shortest paths by running Dijkstra once per source
///
/// O(V (V + E) log V), which beats Floyd-Warshall on sparse graphs. Requires
/// non-negative weights.
#[derive(Debug, Clone)]
pub struct DijkstraAllPairsSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    runs: Vec<DijkstraSP<W>>,
}

/// Configuration for [`DijkstraAllPairsSP`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPairsBuilder {
    parallel: bool,
}

impl AllPairsBuilder {
    pub fn new() -> Self {
        AllPairsBuilder::default()
    }

    /// Run the per-source searches on the rayon thread pool.
    ///
    /// The graph is only read, so the searches share it without locking.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn compute<W, G>(&self, graph: &G) -> Result<DijkstraAllPairsSP<W>>
    where
        W: Float + Zero + Debug + Copy + Send + Sync,
        G: Graph<W> + Sync,
    {
        reject_negative_weights(graph)?;

        let n = graph.vertex_count();
        let runs = if self.parallel {
            (0..n)
                .into_par_iter()
                .map(|source| DijkstraSP::solve(graph, source))
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..n)
                .map(|source| DijkstraSP::solve(graph, source))
                .collect::<Result<Vec<_>>>()?
        };

        debug!("Dijkstra all-pairs finished {} sources (parallel: {})", n, self.parallel);
        Ok(DijkstraAllPairsSP { runs })
    }
}

impl<W> DijkstraAllPairsSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes all pairs sequentially
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        W: Send + Sync,
        G: Graph<W> + Sync,
    {
        AllPairsBuilder::new().compute(graph)
    }

    /// Returns the single-source result for `source`
    pub fn from_source(&self, source: usize) -> Result<&DijkstraSP<W>> {
        check_vertex(source, self.runs.len())?;
        Ok(&self.runs[source])
    }
}

impl<W> AllPairsShortestPaths<W> for DijkstraAllPairsSP<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Dijkstra all-pairs"
    }

    fn vertex_count(&self) -> usize {
        self.runs.len()
    }

    fn dist(&self, source: usize, target: usize) -> Result<W> {
        self.from_source(source)?.dist_to(target)
    }

    fn path(&self, source: usize, target: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        self.from_source(source)?.path_to(target)
    }
}
