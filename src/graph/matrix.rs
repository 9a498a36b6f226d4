use crate::graph::traits::{check_vertex, check_weight, Graph, MutableGraph};
use crate::graph::DirectedEdge;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A dense edge-weighted digraph backed by a `V x V` weight matrix
///
/// Holds at most one edge per ordered pair of vertices. Suited to the dense
/// graphs Floyd-Warshall is run on.
#[derive(Debug, Clone)]
pub struct AdjMatrixDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertex_count: usize,
    edge_count: usize,
    matrix: Vec<Vec<Option<W>>>,
}

impl<W> AdjMatrixDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(vertex_count: usize) -> Self {
        AdjMatrixDigraph {
            vertex_count,
            edge_count: 0,
            matrix: vec![vec![None; vertex_count]; vertex_count],
        }
    }

    /// Gets the weight of the edge `from->to` if it exists
    pub fn weight(&self, from: usize, to: usize) -> Result<Option<W>> {
        check_vertex(from, self.vertex_count)?;
        check_vertex(to, self.vertex_count)?;
        Ok(self.matrix[from][to])
    }
}

impl<W> Graph<W> for AdjMatrixDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<W>> + '_> {
        match self.matrix.get(vertex) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter_map(move |(to, w)| w.map(|w| DirectedEdge::new(vertex, to, w))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for AdjMatrixDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        check_vertex(from, self.vertex_count)?;
        check_vertex(to, self.vertex_count)?;
        check_weight(weight)?;

        let slot = &mut self.matrix[from][to];
        if slot.is_some() {
            return Err(Error::DuplicateEdge { from, to });
        }
        *slot = Some(weight);
        self.edge_count += 1;
        Ok(())
    }
}
