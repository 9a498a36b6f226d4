use std::fmt::{self, Debug, Display};
use num_traits::{Float, Zero};

/// An undirected weighted edge `v-w`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    v: usize,
    w: usize,
    weight: W,
}

impl<W> Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an edge between `v` and `w`
    pub fn new(v: usize, w: usize, weight: W) -> Self {
        Edge { v, w, weight }
    }

    /// Returns either endpoint of the edge
    pub fn either(&self) -> usize {
        self.v
    }

    /// Returns the endpoint that is not `vertex`, or `None` if `vertex` is
    /// not an endpoint of this edge
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.v {
            Some(self.w)
        } else if vertex == self.w {
            Some(self.v)
        } else {
            None
        }
    }

    /// Returns both endpoints in insertion order
    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }

    /// Views the edge as traversed out of `vertex`.
    ///
    /// `vertex` must be an endpoint; otherwise the edge is returned in its
    /// insertion orientation.
    pub fn oriented_from(&self, vertex: usize) -> DirectedEdge<W> {
        match self.other(vertex) {
            Some(other) => DirectedEdge::new(vertex, other, self.weight),
            None => DirectedEdge::new(self.v, self.w, self.weight),
        }
    }
}

impl<W> Display for Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight.to_f64().unwrap_or(f64::NAN))
    }
}

/// A directed weighted edge `from->to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<W> Display for DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight.to_f64().unwrap_or(f64::NAN))
    }
}

/// Sums the weights of a sequence of directed edges
pub fn total_weight<'a, W, I>(edges: I) -> W
where
    W: Float + Zero + Debug + Copy + 'a,
    I: IntoIterator<Item = &'a DirectedEdge<W>>,
{
    edges.into_iter().fold(W::zero(), |acc, e| acc + e.weight())
}
