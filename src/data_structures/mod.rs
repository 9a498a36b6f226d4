pub mod index_pq;
pub mod union_find;

pub use index_pq::{HeapOrder, IndexPriorityQueue};
pub use union_find::{DisjointSet, QuickFindUF, QuickUnionUF, UnionFind};
