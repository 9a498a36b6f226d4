use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use weighted_paths::data_structures::{DisjointSet, QuickFindUF, QuickUnionUF, UnionFind};
use weighted_paths::Error;

fn check_basic_unions<D: DisjointSet>() {
    let mut uf = D::with_len(10);
    assert_eq!(uf.len(), 10);
    assert_eq!(uf.count(), 10);

    for (p, q) in [(4, 3), (3, 8), (6, 5), (9, 4), (2, 1)] {
        assert!(uf.union(p, q).unwrap());
    }
    assert_eq!(uf.count(), 5);
    assert!(uf.connected(8, 9).unwrap());
    assert!(!uf.connected(5, 0).unwrap());

    // Already connected: nothing changes
    assert!(!uf.union(8, 9).unwrap());
    assert_eq!(uf.count(), 5);

    for (p, q) in [(5, 0), (7, 2), (6, 1)] {
        assert!(uf.union(p, q).unwrap());
    }
    assert_eq!(uf.count(), 2);
    assert!(uf.connected(0, 7).unwrap());
    assert!(!uf.connected(0, 9).unwrap());
}

fn check_invalid_elements<D: DisjointSet>() {
    let mut uf = D::with_len(3);
    assert_eq!(uf.find(3).unwrap_err(), Error::InvalidVertex { vertex: 3, vertex_count: 3 });
    assert_eq!(uf.union(0, 7).unwrap_err(), Error::InvalidVertex { vertex: 7, vertex_count: 3 });
    assert!(uf.connected(1, 3).is_err());
    assert_eq!(uf.count(), 3);

    let empty = D::with_len(0);
    assert!(empty.is_empty());
    assert_eq!(empty.count(), 0);
}

fn check_against_naive_labels<D: DisjointSet>(seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = 50;
    let mut uf = D::with_len(n);
    let mut label: Vec<usize> = (0..n).collect();

    for _ in 0..200 {
        let p = rng.gen_range(0..n);
        let q = rng.gen_range(0..n);
        let merged = uf.union(p, q).unwrap();
        assert_eq!(merged, label[p] != label[q]);

        if merged {
            let (from, to) = (label[p], label[q]);
            for l in label.iter_mut() {
                if *l == from {
                    *l = to;
                }
            }
        }

        let mut distinct = label.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(uf.count(), distinct.len());
    }

    for p in 0..n {
        // Equivalence relation: reflexive, symmetric, matches the model
        assert!(uf.connected(p, p).unwrap());
        for q in 0..n {
            let connected = uf.connected(p, q).unwrap();
            assert_eq!(connected, uf.connected(q, p).unwrap());
            assert_eq!(connected, label[p] == label[q]);
        }
    }
}

#[test]
fn test_quick_find() {
    check_basic_unions::<QuickFindUF>();
    check_invalid_elements::<QuickFindUF>();
    check_against_naive_labels::<QuickFindUF>(1);
}

#[test]
fn test_quick_union() {
    check_basic_unions::<QuickUnionUF>();
    check_invalid_elements::<QuickUnionUF>();
    check_against_naive_labels::<QuickUnionUF>(2);
}

#[test]
fn test_weighted_union_find() {
    check_basic_unions::<UnionFind>();
    check_invalid_elements::<UnionFind>();
    check_against_naive_labels::<UnionFind>(3);
}

#[test]
fn test_weighted_union_find_representative_is_order_independent() {
    let mut a = UnionFind::with_len(4);
    let mut b = UnionFind::with_len(4);
    a.union(1, 3).unwrap();
    b.union(3, 1).unwrap();
    assert_eq!(a.find(3).unwrap(), 1);
    assert_eq!(b.find(3).unwrap(), 1);
}

#[test]
fn test_find_is_stable_between_unions() {
    let mut uf = UnionFind::with_len(8);
    for p in 0..7 {
        uf.union(p, p + 1).unwrap();
    }
    let root = uf.find(7).unwrap();
    for p in 0..8 {
        assert_eq!(uf.find(p).unwrap(), root);
    }
    assert_eq!(uf.count(), 1);
}
