mod common;

use common::{assert_closed_cycle, init_logging};
use rand::rngs::StdRng;
use rand::SeedableRng;
use weighted_paths::graph::generators::negative_cycle_digraph;
use weighted_paths::graph::{total_weight, EdgeWeightedDigraph, EdgeWeightedGraph};
use weighted_paths::{AllPairsShortestPaths, BellmanFordSP, Error, FloydWarshall, ShortestPaths};

fn triangle_with_negative_cycle() -> EdgeWeightedDigraph<f64> {
    EdgeWeightedDigraph::from_edges(3, &[(0, 1, 1.0), (1, 2, -3.0), (2, 0, 1.0)]).unwrap()
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    init_logging();
    let graph = triangle_with_negative_cycle();
    let sp = BellmanFordSP::new(&graph, 0).unwrap();

    assert!(sp.has_negative_cycle());
    for v in 0..3 {
        assert_eq!(sp.dist_to(v).unwrap_err(), Error::NegativeCycle);
        assert_eq!(sp.has_path_to(v).unwrap_err(), Error::NegativeCycle);
        assert_eq!(sp.path_to(v).unwrap_err(), Error::NegativeCycle);
        assert_eq!(sp.vertex_path_to(v).unwrap_err(), Error::NegativeCycle);
    }

    let cycle = sp.negative_cycle().unwrap();
    assert_eq!(cycle.len(), 3);
    assert_closed_cycle(cycle);
    assert_eq!(total_weight(cycle.iter()), -1.0);
    sp.check(&graph).unwrap();
}

#[test]
fn test_negative_self_loop() {
    let graph = EdgeWeightedDigraph::from_edges(2, &[(0, 1, 2.0), (1, 1, -0.5)]).unwrap();
    let sp = BellmanFordSP::new(&graph, 0).unwrap();

    assert!(sp.has_negative_cycle());
    let cycle = sp.negative_cycle().unwrap();
    assert_eq!(cycle.len(), 1);
    assert_eq!((cycle[0].from(), cycle[0].to()), (1, 1));
}

#[test]
fn test_unreachable_negative_cycle_is_ignored_by_bellman_ford() {
    let graph =
        EdgeWeightedDigraph::from_edges(4, &[(0, 1, 1.0), (2, 3, 1.0), (3, 2, -5.0)]).unwrap();

    let sp = BellmanFordSP::new(&graph, 0).unwrap();
    assert!(!sp.has_negative_cycle());
    assert_eq!(sp.dist_to(1).unwrap(), 1.0);
    assert_eq!(sp.dist_to(2).unwrap(), f64::INFINITY);

    // Floyd-Warshall looks at every pair, so it does see the cycle
    let apsp = FloydWarshall::new(&graph);
    assert!(apsp.has_negative_cycle());
    assert_eq!(apsp.dist(0, 1).unwrap_err(), Error::NegativeCycle);
    let cycle = apsp.negative_cycle().unwrap();
    assert_closed_cycle(cycle);
    assert!(total_weight(cycle.iter()) < 0.0);
}

#[test]
fn test_planted_negative_cycles_are_found() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(5);
    for cycle_len in 1..=6 {
        let graph = negative_cycle_digraph::<f64, _>(30, 90, cycle_len, &mut rng).unwrap();

        let apsp = FloydWarshall::new(&graph);
        assert!(apsp.has_negative_cycle());
        let cycle = apsp.negative_cycle().unwrap();
        assert_closed_cycle(cycle);
        assert!(total_weight(cycle.iter()) < 0.0);

        // From any source on the cycle, Bellman-Ford must see it too
        let member = cycle[0].from();
        let sp = BellmanFordSP::new(&graph, member).unwrap();
        assert!(sp.has_negative_cycle());
        let found = sp.negative_cycle().unwrap();
        assert_closed_cycle(found);
        assert!(total_weight(found.iter()) < 0.0);
        sp.check(&graph).unwrap();
    }
}

#[test]
fn test_negative_undirected_edge_is_a_negative_cycle() {
    let graph = EdgeWeightedGraph::from_edges(3, &[(0, 1, 2.0), (1, 2, -1.0)]).unwrap();
    let sp = BellmanFordSP::new(&graph, 0).unwrap();

    assert!(sp.has_negative_cycle());
    assert_eq!(sp.dist_to(2).unwrap_err(), Error::NegativeCycle);
}
