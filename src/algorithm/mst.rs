use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::boruvka::BoruvkaMST;
use crate::algorithm::cycle::UndirectedCycle;
use crate::algorithm::kruskal::KruskalMST;
use crate::algorithm::prim::{LazyPrimMST, PrimMST};
use crate::algorithm::MinimumSpanningForest;
use crate::data_structures::{DisjointSet, UnionFind};
use crate::graph::{Edge, EdgeWeightedGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// Minimum spanning forest algorithm selection
///
/// All variants produce a forest of the same total weight; with tied
/// weights the chosen edges may differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstAlgorithm {
    /// Prim with lazy deletion of ineligible edges
    LazyPrim,
    /// Prim over an indexed priority queue
    EagerPrim,
    /// Kruskal over union-find
    Kruskal,
    /// Borůvka rounds
    Boruvka,
}

impl MstAlgorithm {
    pub const ALL: [MstAlgorithm; 4] = [
        MstAlgorithm::LazyPrim,
        MstAlgorithm::EagerPrim,
        MstAlgorithm::Kruskal,
        MstAlgorithm::Boruvka,
    ];

    /// Runs the selected algorithm over `graph`
    pub fn compute<W>(self, graph: &EdgeWeightedGraph<W>) -> Result<Box<dyn MinimumSpanningForest<W>>>
    where
        W: Float + Zero + Debug + Copy + 'static,
    {
        Ok(match self {
            MstAlgorithm::LazyPrim => Box::new(LazyPrimMST::new(graph)),
            MstAlgorithm::EagerPrim => Box::new(PrimMST::new(graph)?),
            MstAlgorithm::Kruskal => Box::new(KruskalMST::new(graph)?),
            MstAlgorithm::Boruvka => Box::new(BoruvkaMST::new(graph)?),
        })
    }
}

/// Checks that `edges` is a minimum spanning forest of `graph` with total
/// weight `weight`:
///
/// - the reported weight matches the edges,
/// - the edges form no cycle,
/// - every graph edge joins vertices the forest already connects,
/// - no edge crossing the cut defined by removing a forest edge is lighter
///   than that forest edge.
pub fn check_spanning_forest<W>(graph: &EdgeWeightedGraph<W>, edges: &[Edge<W>], weight: W) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    let n = graph.vertex_count();

    let total = edges.iter().fold(W::zero(), |acc, e| acc + e.weight());
    if !approx_eq(total, weight) {
        return Err(Error::CertificateViolation(format!(
            "edge weights sum to {:?}, reported {:?}",
            total, weight
        )));
    }

    let mut forest = EdgeWeightedGraph::new(n);
    for e in edges {
        let (v, w) = e.endpoints();
        forest.add_edge(v, w, e.weight())?;
    }
    if let Some(cycle) = UndirectedCycle::new(&forest).cycle() {
        return Err(Error::CertificateViolation(format!(
            "forest contains a cycle of {} edges",
            cycle.len()
        )));
    }

    let mut components = UnionFind::with_len(n);
    for e in edges {
        let (v, w) = e.endpoints();
        components.union(v, w)?;
    }
    for e in graph.edges() {
        let (v, w) = e.endpoints();
        if !components.connected(v, w)? {
            return Err(Error::CertificateViolation(format!("forest does not span edge {}", e)));
        }
    }

    for (skip, e) in edges.iter().enumerate() {
        let mut cut = UnionFind::with_len(n);
        for (i, f) in edges.iter().enumerate() {
            if i != skip {
                let (v, w) = f.endpoints();
                cut.union(v, w)?;
            }
        }

        for f in graph.edges() {
            let (v, w) = f.endpoints();
            if !cut.connected(v, w)? && f.weight() < e.weight() {
                return Err(Error::CertificateViolation(format!(
                    "edge {} violates cut optimality of {}",
                    f, e
                )));
            }
        }
    }

    Ok(())
}

/// Float equality up to a relative tolerance
pub(crate) fn approx_eq<W>(a: W, b: W) -> bool
where
    W: Float + Zero + Debug + Copy,
{
    let tolerance = W::from(1e-9).unwrap_or_else(W::epsilon);
    (a - b).abs() <= tolerance * (W::one() + a.abs().max(b.abs()))
}
