use crate::graph::traits::{check_vertex, check_weight, Graph, MutableGraph};
use crate::graph::DirectedEdge;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::{self, Debug, Display};

/// A directed edge-weighted graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of edges in the graph
    edge_count: usize,

    /// Outgoing edges for each vertex
    outgoing_edges: Vec<Vec<DirectedEdge<W>>>,

    /// Number of edges pointing to each vertex
    indegree: Vec<usize>,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a digraph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        EdgeWeightedDigraph {
            vertex_count,
            edge_count: 0,
            outgoing_edges: vec![Vec::new(); vertex_count],
            indegree: vec![0; vertex_count],
        }
    }

    /// Creates a digraph from a list of `(from, to, weight)` triples
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the edges leaving `vertex`, in insertion order
    pub fn adjacent(&self, vertex: usize) -> Result<&[DirectedEdge<W>]> {
        check_vertex(vertex, self.vertex_count)?;
        Ok(&self.outgoing_edges[vertex])
    }

    pub fn outdegree(&self, vertex: usize) -> Result<usize> {
        check_vertex(vertex, self.vertex_count)?;
        Ok(self.outgoing_edges[vertex].len())
    }

    pub fn indegree(&self, vertex: usize) -> Result<usize> {
        check_vertex(vertex, self.vertex_count)?;
        Ok(self.indegree[vertex])
    }

    /// Returns every edge, grouped by source vertex
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        self.outgoing_edges.iter().flatten()
    }

    /// Returns a copy of this digraph with every edge reversed
    pub fn reverse(&self) -> Self {
        let mut reversed = EdgeWeightedDigraph::new(self.vertex_count);
        for e in self.edges() {
            reversed.push_edge(DirectedEdge::new(e.to(), e.from(), e.weight()));
        }
        reversed
    }

    /// Appends an already validated edge
    pub(crate) fn push_edge(&mut self, edge: DirectedEdge<W>) {
        self.indegree[edge.to()] += 1;
        self.outgoing_edges[edge.from()].push(edge);
        self.edge_count += 1;
    }
}

impl<W> Graph<W> for EdgeWeightedDigraph<W>
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
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<W> MutableGraph<W> for EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        check_vertex(from, self.vertex_count)?;
        check_vertex(to, self.vertex_count)?;
        check_weight(weight)?;

        self.push_edge(DirectedEdge::new(from, to, weight));
        Ok(())
    }
}

impl<W> Display for EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count, self.edge_count)?;
        for (v, edges) in self.outgoing_edges.iter().enumerate() {
            write!(f, "{}:", v)?;
            for e in edges {
                write!(f, "  {}", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
