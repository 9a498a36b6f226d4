//! Disjoint-set structures over a fixed universe `0..n`.
//!
//! Three interchangeable variants trade find cost against union cost:
//!
//! - [`QuickFindUF`]: O(1) find, O(n) union.
//! - [`QuickUnionUF`]: O(h) find and union, where h is the tree height.
//! - [`UnionFind`]: union by rank with path halving, near O(1) amortized.

use std::fmt::Debug;

use crate::{Error, Result};

/// A partition of `0..len()` into disjoint sets
pub trait DisjointSet: Debug {
    /// Creates `n` singleton sets
    fn with_len(n: usize) -> Self
    where
        Self: Sized;

    /// Returns the size of the universe
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of sets
    fn count(&self) -> usize;

    /// Returns the canonical representative of the set containing `p`
    fn find(&mut self, p: usize) -> Result<usize>;

    /// Merges the sets containing `p` and `q`.
    ///
    /// Returns `false` without changing anything if they were already the
    /// same set.
    fn union(&mut self, p: usize, q: usize) -> Result<bool>;

    /// Returns true if `p` and `q` are in the same set
    fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }
}

fn validate(p: usize, n: usize) -> Result<()> {
    if p < n {
        Ok(())
    } else {
        Err(Error::InvalidVertex { vertex: p, vertex_count: n })
    }
}

/// Every element stores its set id directly
#[derive(Debug, Clone)]
pub struct QuickFindUF {
    id: Vec<usize>,
    count: usize,
}

impl DisjointSet for QuickFindUF {
    fn with_len(n: usize) -> Self {
        QuickFindUF { id: (0..n).collect(), count: n }
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> Result<usize> {
        validate(p, self.id.len())?;
        Ok(self.id[p])
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let p_id = self.find(p)?;
        let q_id = self.find(q)?;
        if p_id == q_id {
            return Ok(false);
        }

        for id in self.id.iter_mut() {
            if *id == p_id {
                *id = q_id;
            }
        }
        self.count -= 1;
        Ok(true)
    }
}

/// Unbalanced parent-link forest
#[derive(Debug, Clone)]
pub struct QuickUnionUF {
    parent: Vec<usize>,
    count: usize,
}

impl DisjointSet for QuickUnionUF {
    fn with_len(n: usize) -> Self {
        QuickUnionUF { parent: (0..n).collect(), count: n }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> Result<usize> {
        validate(p, self.parent.len())?;
        while p != self.parent[p] {
            p = self.parent[p];
        }
        Ok(p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }

        self.parent[root_p] = root_q;
        self.count -= 1;
        Ok(true)
    }
}

/// Union by rank with path halving
///
/// On equal ranks the lower root wins, so the representative of a set does
/// not depend on the order of the operands.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl DisjointSet for UnionFind {
    fn with_len(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> Result<usize> {
        validate(p, self.parent.len())?;
        while p != self.parent[p] {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        Ok(p)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(false);
        }

        match self.rank[root_p].cmp(&self.rank[root_q]) {
            std::cmp::Ordering::Less => self.parent[root_p] = root_q,
            std::cmp::Ordering::Greater => self.parent[root_q] = root_p,
            std::cmp::Ordering::Equal => {
                let (root, child) = if root_p < root_q { (root_p, root_q) } else { (root_q, root_p) };
                self.parent[child] = root;
                self.rank[root] = self.rank[root].saturating_add(1);
            }
        }
        self.count -= 1;
        Ok(true)
    }
}
