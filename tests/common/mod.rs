#![allow(dead_code)]

use weighted_paths::graph::{DirectedEdge, Graph};

pub const EPSILON: f64 = 1e-9;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn close(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= EPSILON * (1.0 + a.abs().max(b.abs()))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(close(actual, expected), "expected {}, got {}", expected, actual);
}

/// Shortest distances from `source` found by trying every simple path.
/// Exponential, so only for graphs with a handful of vertices.
pub fn brute_force_distances<G: Graph<f64>>(graph: &G, source: usize) -> Vec<f64> {
    fn explore<G: Graph<f64>>(graph: &G, v: usize, dist: f64, on_path: &mut [bool], best: &mut [f64]) {
        if dist < best[v] {
            best[v] = dist;
        }
        on_path[v] = true;
        for e in graph.outgoing_edges(v) {
            if !on_path[e.to()] {
                explore(graph, e.to(), dist + e.weight(), on_path, best);
            }
        }
        on_path[v] = false;
    }

    let n = graph.vertex_count();
    let mut best = vec![f64::INFINITY; n];
    let mut on_path = vec![false; n];
    explore(graph, source, 0.0, &mut on_path, &mut best);
    best
}

/// Asserts that `path` is a contiguous walk from `source` to `target` of
/// total weight `expected`
pub fn assert_valid_path(path: &[DirectedEdge<f64>], source: usize, target: usize, expected: f64) {
    match (path.first(), path.last()) {
        (Some(first), Some(last)) => {
            assert_eq!(first.from(), source, "path should start at source");
            assert_eq!(last.to(), target, "path should end at target");
        }
        _ => assert_eq!(source, target, "only the path to the source may be empty"),
    }
    for pair in path.windows(2) {
        assert_eq!(pair[0].to(), pair[1].from(), "path should be contiguous");
    }
    let weight: f64 = path.iter().map(|e| e.weight()).sum();
    assert_close(weight, expected);
}

/// Asserts that `cycle` is a closed walk
pub fn assert_closed_cycle(cycle: &[DirectedEdge<f64>]) {
    assert!(!cycle.is_empty(), "cycle should not be empty");
    for pair in cycle.windows(2) {
        assert_eq!(pair[0].to(), pair[1].from(), "cycle should be contiguous");
    }
    let (first, last) = (cycle[0], cycle[cycle.len() - 1]);
    assert_eq!(last.to(), first.from(), "cycle should return to its start");
}
