use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::traits::check_vertex;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, Graph};
use crate::{Error, Result};

/// Shortest-path tree state shared by the single-source solvers
///
/// `dist_to[v]` is the best distance found so far and `edge_to[v]` the last
/// edge on that path. Distances only ever decrease: `relax` is the sole
/// mutator and applies an edge only when it strictly improves.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    source: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<DirectedEdge<W>>>,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a tree containing only `source`, at distance zero
    pub fn new(vertex_count: usize, source: usize) -> Result<Self> {
        check_vertex(source, vertex_count)?;

        let mut dist_to = vec![W::infinity(); vertex_count];
        dist_to[source] = W::zero();
        Ok(ShortestPathTree {
            source,
            dist_to,
            edge_to: vec![None; vertex_count],
        })
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    pub fn dist_to(&self, vertex: usize) -> Result<W> {
        check_vertex(vertex, self.dist_to.len())?;
        Ok(self.dist_to[vertex])
    }

    pub fn edge_to(&self, vertex: usize) -> Result<Option<DirectedEdge<W>>> {
        check_vertex(vertex, self.dist_to.len())?;
        Ok(self.edge_to[vertex])
    }

    pub fn has_path_to(&self, vertex: usize) -> Result<bool> {
        Ok(self.dist_to(vertex)? < W::infinity())
    }

    /// Tries to improve the distance to `edge.to()` through `edge`.
    ///
    /// Returns true if the distance strictly decreased. Edges touching a
    /// vertex outside the tree are ignored.
    pub fn relax(&mut self, edge: DirectedEdge<W>) -> bool {
        let (from, to) = (edge.from(), edge.to());
        if from >= self.dist_to.len() || to >= self.dist_to.len() {
            return false;
        }

        let candidate = self.dist_to[from] + edge.weight();
        if candidate < self.dist_to[to] {
            self.dist_to[to] = candidate;
            self.edge_to[to] = Some(edge);
            true
        } else {
            false
        }
    }

    /// Walks `edge_to` back from `vertex` to the source.
    ///
    /// Fails with `Error::NegativeCycle` if the walk does not reach the
    /// source within `V` steps, which only happens when the predecessor
    /// links contain a cycle.
    pub fn path_to(&self, vertex: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        if !self.has_path_to(vertex)? {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = vertex;
        while let Some(edge) = self.edge_to[current] {
            if path.len() >= self.dist_to.len() {
                return Err(Error::NegativeCycle);
            }
            path.push(edge);
            current = edge.from();
        }
        path.reverse();
        Ok(Some(path))
    }

    /// Builds a digraph holding exactly the `edge_to` links
    pub fn predecessor_digraph(&self) -> EdgeWeightedDigraph<W> {
        let mut spt = EdgeWeightedDigraph::new(self.dist_to.len());
        for edge in self.edge_to.iter().flatten() {
            spt.push_edge(*edge);
        }
        spt
    }

    /// Verifies the shortest-path optimality conditions against `graph`:
    /// no edge can still be relaxed, and every tree edge is tight.
    pub fn check<G>(&self, graph: &G) -> Result<()>
    where
        G: Graph<W>,
    {
        let n = self.dist_to.len();
        if graph.vertex_count() != n {
            return Err(Error::CertificateViolation(format!(
                "tree has {} vertices but graph has {}",
                n,
                graph.vertex_count()
            )));
        }

        if self.dist_to[self.source] != W::zero() || self.edge_to[self.source].is_some() {
            return Err(Error::CertificateViolation(
                "distance to source is not zero".to_string(),
            ));
        }

        for v in 0..n {
            if v != self.source && self.edge_to[v].is_none() && self.dist_to[v] != W::infinity() {
                return Err(Error::CertificateViolation(format!(
                    "vertex {} has a distance but no tree edge",
                    v
                )));
            }
        }

        for v in 0..n {
            for e in graph.outgoing_edges(v) {
                if self.dist_to[v] + e.weight() < self.dist_to[e.to()] {
                    return Err(Error::CertificateViolation(format!("edge {} not relaxed", e)));
                }
            }
        }

        for (w, edge) in self.edge_to.iter().enumerate() {
            if let Some(e) = edge {
                if e.to() != w || self.dist_to[e.from()] + e.weight() != self.dist_to[w] {
                    return Err(Error::CertificateViolation(format!(
                        "tree edge {} is not tight",
                        e
                    )));
                }
            }
        }

        Ok(())
    }
}
