use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::DirectedEdge;
use crate::{Error, Result};

/// Trait representing a weighted graph whose vertices are `0..vertex_count()`
///
/// Undirected graphs expose every incident edge as an outgoing edge oriented
/// away from the queried vertex, so the shortest-path solvers run unchanged
/// on both kinds of graph.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the edges leaving a vertex
    ///
    /// Yields nothing for a vertex outside the graph.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<W>> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Fails with `Error::InvalidVertex` unless the vertex exists
    fn validate_vertex(&self, vertex: usize) -> Result<()> {
        check_vertex(vertex, self.vertex_count())
    }

    /// Returns the first edge with a negative weight, if any
    fn find_negative_edge(&self) -> Option<DirectedEdge<W>> {
        (0..self.vertex_count())
            .flat_map(|v| self.outgoing_edges(v))
            .find(|e| e.weight() < W::zero())
    }
}

/// Trait for graphs that grow by adding edges
///
/// Edges are never removed once added.
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds an edge between vertices with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}

pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::InvalidVertex { vertex, vertex_count })
    }
}

pub(crate) fn check_weight<W>(weight: W) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    if weight.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)))
    }
}
