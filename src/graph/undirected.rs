use std::fmt::{self, Debug, Display};
use num_traits::{Float, Zero};

use crate::graph::traits::{check_vertex, check_weight, Graph, MutableGraph};
use crate::graph::{DirectedEdge, Edge};
use crate::Result;

/// An undirected edge-weighted graph using adjacency lists
///
/// Each edge is stored once and referenced by id from the adjacency list of
/// both endpoints. A self-loop is referenced twice from its vertex, so it
/// contributes 2 to the degree but appears once in `edges()`.
#[derive(Debug, Clone)]
pub struct EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Every edge, in insertion order
    edges: Vec<Edge<W>>,

    /// Incident edge ids for each vertex
    adjacency: Vec<Vec<usize>>,
}

impl<W> EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        EdgeWeightedGraph {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph from a list of `(v, w, weight)` triples
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(v, w, weight) in edges {
            graph.add_edge(v, w, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of edge endpoints at `vertex` (self-loops count twice)
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        check_vertex(vertex, self.vertex_count)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Returns the edges incident to `vertex`
    pub fn adjacent(&self, vertex: usize) -> Result<impl Iterator<Item = &Edge<W>> + '_> {
        check_vertex(vertex, self.vertex_count)?;
        Ok(self.adjacency[vertex].iter().map(move |&id| &self.edges[id]))
    }

    /// Returns every edge exactly once
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edges.iter()
    }

    /// Incident `(edge id, edge)` pairs; empty for a vertex outside the graph
    pub(crate) fn incident(&self, vertex: usize) -> impl Iterator<Item = (usize, &Edge<W>)> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(move |&id| (id, &self.edges[id]))
    }

    pub(crate) fn edge(&self, id: usize) -> &Edge<W> {
        &self.edges[id]
    }
}

impl<W> Graph<W> for EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = DirectedEdge<W>> + '_> {
        Box::new(self.incident(vertex).map(move |(_, e)| e.oriented_from(vertex)))
    }
}

impl<W> MutableGraph<W> for EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        check_vertex(from, self.vertex_count)?;
        check_vertex(to, self.vertex_count)?;
        check_weight(weight)?;

        let id = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.adjacency[from].push(id);
        self.adjacency[to].push(id);
        Ok(())
    }
}

impl<W> Display for EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count, self.edges.len())?;
        for (v, ids) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", v)?;
            for &id in ids {
                write!(f, "  {}", self.edges[id])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
