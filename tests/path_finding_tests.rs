mod common;

use common::{assert_close, assert_valid_path, brute_force_distances, init_logging};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use weighted_paths::algorithm::tree::ShortestPathTree;
use weighted_paths::graph::generators::{grid_graph, random_digraph};
use weighted_paths::graph::{DirectedEdge, EdgeWeightedDigraph, EdgeWeightedGraph, Graph, MutableGraph};
use weighted_paths::{BellmanFordSP, DijkstraSP, Error, ShortestPaths};

// Test helper function to create a grid graph with some cells blocked
fn create_city_grid(width: usize, height: usize, buildings: &[(usize, usize)]) -> EdgeWeightedGraph<f64> {
    let mut graph = EdgeWeightedGraph::new(width * height);
    let blocked = |x: usize, y: usize| buildings.contains(&(x, y));

    for y in 0..height {
        for x in 0..width {
            if blocked(x, y) {
                continue;
            }
            let vertex = y * width + x;
            // East, south and the two lower diagonals; the graph is undirected
            let moves = [(1, 0, 1.0), (0, 1, 1.0), (1, 1, 1.4), (-1, 1, 1.4)];
            for (dx, dy, cost) in moves {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !blocked(nx, ny) {
                    graph.add_edge(vertex, ny * width + nx, cost).unwrap();
                }
            }
        }
    }

    graph
}

#[test]
fn test_end_to_end_small_graph() {
    init_logging();
    let graph =
        EdgeWeightedGraph::from_edges(4, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)]).unwrap();

    let sp = DijkstraSP::new(&graph, 0).unwrap();
    assert_close(sp.dist_to(3).unwrap(), 4.0);
    assert_eq!(sp.vertex_path_to(3).unwrap(), Some(vec![0, 1, 2, 3]));

    let path = sp.path_to(3).unwrap().unwrap();
    assert_valid_path(&path, 0, 3, 4.0);
    sp.check(&graph).unwrap();
}

#[test]
fn test_path_finding_simple_grid() {
    init_logging();
    let graph = create_city_grid(10, 10, &[]);
    let source = 0;
    let target = 99;

    let dijkstra = DijkstraSP::new(&graph, source).unwrap();
    let bellman_ford = BellmanFordSP::new(&graph, source).unwrap();

    assert!(dijkstra.has_path_to(target).unwrap(), "Dijkstra should find a path");
    assert!(bellman_ford.has_path_to(target).unwrap(), "Bellman-Ford should find a path");

    // Nine diagonal steps
    assert_close(dijkstra.dist_to(target).unwrap(), 9.0 * 1.4);
    assert_close(bellman_ford.dist_to(target).unwrap(), 9.0 * 1.4);

    let path = dijkstra.path_to(target).unwrap().unwrap();
    assert_valid_path(&path, source, target, dijkstra.dist_to(target).unwrap());
}

#[test]
fn test_path_finding_with_obstacles() {
    init_logging();
    // A wall in column 5 with a gap at the bottom
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_city_grid(10, 10, &wall);
    let source = 0;
    let target = 9;

    let dijkstra = DijkstraSP::new(&graph, source).unwrap();
    let bellman_ford = BellmanFordSP::new(&graph, source).unwrap();

    assert!(dijkstra.has_path_to(target).unwrap(), "Dijkstra should find a path around obstacles");
    let detour = dijkstra.dist_to(target).unwrap();
    assert!(detour > 9.0, "the wall forces a detour");
    assert_close(bellman_ford.dist_to(target).unwrap(), detour);

    let vertices = dijkstra.vertex_path_to(target).unwrap().unwrap();
    assert_eq!(vertices[0], source, "Path should start at source");
    assert_eq!(vertices[vertices.len() - 1], target, "Path should end at target");
    for v in &vertices {
        assert!(!wall.contains(&(v % 10, v / 10)), "path should avoid the wall");
    }
}

#[test]
fn test_blocked_cells_are_unreachable() {
    let graph = create_city_grid(5, 5, &[(2, 2)]);
    let sp = DijkstraSP::new(&graph, 0).unwrap();

    assert!(!sp.has_path_to(12).unwrap());
    assert_eq!(sp.dist_to(12).unwrap(), f64::INFINITY);
    assert_eq!(sp.path_to(12).unwrap(), None);
    assert_eq!(sp.vertex_path_to(12).unwrap(), None);
}

#[test]
fn test_path_to_source_is_empty() {
    let graph = EdgeWeightedDigraph::from_edges(3, &[(0, 1, 2.0), (1, 2, 2.0)]).unwrap();
    let sp = DijkstraSP::new(&graph, 1).unwrap();

    assert_eq!(sp.source(), 1);
    assert_eq!(sp.dist_to(1).unwrap(), 0.0);
    assert_eq!(sp.path_to(1).unwrap(), Some(Vec::new()));
    assert_eq!(sp.vertex_path_to(1).unwrap(), Some(vec![1]));
    assert!(!sp.has_path_to(0).unwrap());
}

#[test]
fn test_dijkstra_matches_brute_force() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..40 {
        let n = rng.gen_range(1..=7);
        let e = rng.gen_range(0..=14);
        let graph = random_digraph::<f64, _>(n, e, 0.0..10.0, &mut rng).unwrap();
        let source = rng.gen_range(0..n);

        let expected = brute_force_distances(&graph, source);
        let dijkstra = DijkstraSP::new(&graph, source).unwrap();
        let bellman_ford = BellmanFordSP::new(&graph, source).unwrap();

        for v in 0..n {
            let dist = dijkstra.dist_to(v).unwrap();
            assert_close(dist, expected[v]);
            assert_close(bellman_ford.dist_to(v).unwrap(), expected[v]);
            if dist.is_finite() {
                assert!(dist >= 0.0);
                let path = dijkstra.path_to(v).unwrap().unwrap();
                assert_valid_path(&path, source, v, dist);
            }
        }
        dijkstra.check(&graph).unwrap();
        bellman_ford.check(&graph).unwrap();
    }
}

#[test]
fn test_bellman_ford_handles_negative_weights_on_dag() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..40 {
        let n = rng.gen_range(2..=7);
        let mut graph = EdgeWeightedDigraph::new(n);
        // Edges only go from lower to higher vertices, so no cycle exists
        for _ in 0..rng.gen_range(0..=15) {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            if a < b {
                graph.add_edge(a, b, rng.gen_range(-5.0..10.0)).unwrap();
            }
        }

        let expected = brute_force_distances(&graph, 0);
        let sp = BellmanFordSP::new(&graph, 0).unwrap();
        assert!(!sp.has_negative_cycle());
        assert!(sp.negative_cycle().is_none());
        for v in 0..n {
            assert_close(sp.dist_to(v).unwrap(), expected[v]);
            if let Some(path) = sp.path_to(v).unwrap() {
                assert_valid_path(&path, 0, v, expected[v]);
            }
        }
        sp.check(&graph).unwrap();
    }
}

#[test]
fn test_dijkstra_rejects_negative_weights() {
    let graph = EdgeWeightedDigraph::from_edges(3, &[(0, 1, 1.0), (1, 2, -3.0)]).unwrap();
    let err = DijkstraSP::new(&graph, 0).unwrap_err();
    assert_eq!(err, Error::NegativeWeight { from: 1, to: 2, weight: -3.0 });
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = EdgeWeightedDigraph::<f64>::new(4);
    assert_eq!(
        DijkstraSP::new(&graph, 4).unwrap_err(),
        Error::InvalidVertex { vertex: 4, vertex_count: 4 }
    );
    assert_eq!(
        BellmanFordSP::new(&graph, 7).unwrap_err(),
        Error::InvalidVertex { vertex: 7, vertex_count: 4 }
    );

    let sp = DijkstraSP::new(&graph, 0).unwrap();
    assert_eq!(sp.dist_to(9).unwrap_err(), Error::InvalidVertex { vertex: 9, vertex_count: 4 });
}

#[test]
fn test_undirected_grid_solvers_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = grid_graph::<f64, _>(12, 9, 1.0..5.0, &mut rng).unwrap();

    for source in [0, 50, 107] {
        let dijkstra = DijkstraSP::new(&graph, source).unwrap();
        let bellman_ford = BellmanFordSP::new(&graph, source).unwrap();
        for v in 0..graph.vertex_count() {
            assert_close(dijkstra.dist_to(v).unwrap(), bellman_ford.dist_to(v).unwrap());
        }
    }
}

#[test]
fn test_relaxation_never_increases_distances() {
    let mut rng = StdRng::seed_from_u64(4);
    let n = 20;
    let mut tree = ShortestPathTree::<f64>::new(n, 0).unwrap();

    for _ in 0..2_000 {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let edge = DirectedEdge::new(from, to, rng.gen_range(-1.0..10.0));

        let before: Vec<f64> = (0..n).map(|v| tree.dist_to(v).unwrap()).collect();
        let improved = tree.relax(edge);
        let after: Vec<f64> = (0..n).map(|v| tree.dist_to(v).unwrap()).collect();

        for v in 0..n {
            assert!(after[v] <= before[v], "dist_to[{}] increased", v);
            if v != to {
                assert_eq!(after[v], before[v]);
            }
        }
        assert_eq!(improved, after[to] < before[to]);
        if improved {
            assert_eq!(tree.edge_to(to).unwrap(), Some(edge));
        }
    }
}

#[test]
fn test_works_with_ordered_float_weights() {
    use ordered_float::OrderedFloat;

    let mut graph: EdgeWeightedDigraph<OrderedFloat<f64>> = EdgeWeightedDigraph::new(3);
    graph.add_edge(0, 1, OrderedFloat(1.5)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(2.5)).unwrap();
    graph.add_edge(0, 2, OrderedFloat(5.0)).unwrap();

    let sp = DijkstraSP::new(&graph, 0).unwrap();
    assert_eq!(sp.dist_to(2).unwrap(), OrderedFloat(4.0));
}
