use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::mst::check_spanning_forest;
use crate::graph::{DirectedEdge, Edge, EdgeWeightedGraph};
use crate::Result;

/// Trait for single-source shortest path solvers
///
/// A solver computes everything when it is constructed; these methods only
/// read the finished result.
pub trait ShortestPaths<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Returns the source vertex the paths start from
    fn source(&self) -> usize;

    /// Returns the length of a shortest path from the source to `vertex`,
    /// or infinity if there is none
    fn dist_to(&self, vertex: usize) -> Result<W>;

    /// Returns true if `vertex` is reachable from the source
    fn has_path_to(&self, vertex: usize) -> Result<bool> {
        Ok(self.dist_to(vertex)? < W::infinity())
    }

    /// Returns a shortest path from the source to `vertex` as a sequence of
    /// edges, or `None` if `vertex` is unreachable. The path to the source
    /// itself is empty.
    fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>>;

    /// Get the shortest path from source to target as a sequence of vertices
    fn vertex_path_to(&self, vertex: usize) -> Result<Option<Vec<usize>>> {
        let path = match self.path_to(vertex)? {
            Some(path) => path,
            None => return Ok(None),
        };

        let mut vertices = Vec::with_capacity(path.len() + 1);
        vertices.push(self.source());
        vertices.extend(path.iter().map(|e| e.to()));
        Ok(Some(vertices))
    }

    /// Returns true if a negative cycle is reachable from the source
    fn has_negative_cycle(&self) -> bool {
        false
    }

    /// Returns a negative cycle reachable from the source, if one was found
    fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        None
    }
}

/// Trait for all-pairs shortest path solvers
pub trait AllPairsShortestPaths<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str;

    fn vertex_count(&self) -> usize;

    /// Returns the length of a shortest path from `source` to `target`, or
    /// infinity if there is none
    fn dist(&self, source: usize, target: usize) -> Result<W>;

    fn has_path(&self, source: usize, target: usize) -> Result<bool> {
        Ok(self.dist(source, target)? < W::infinity())
    }

    /// Returns a shortest path from `source` to `target`, or `None` if there
    /// is none
    fn path(&self, source: usize, target: usize) -> Result<Option<Vec<DirectedEdge<W>>>>;

    fn has_negative_cycle(&self) -> bool {
        false
    }

    fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        None
    }
}

/// Trait for minimum spanning forest solvers
pub trait MinimumSpanningForest<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str;

    /// Returns the edges of the forest
    fn edges(&self) -> &[Edge<W>];

    /// Returns the total weight of the forest
    fn weight(&self) -> W;

    /// Verifies that the forest is acyclic, spans every component of
    /// `graph`, and satisfies the cut optimality conditions
    fn check(&self, graph: &EdgeWeightedGraph<W>) -> Result<()> {
        check_spanning_forest(graph, self.edges(), self.weight())
    }
}
