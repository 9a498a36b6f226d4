use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use weighted_paths::algorithm::{AllPairsShortestPaths, MinimumSpanningForest, ShortestPaths};
use weighted_paths::graph::generators::{random_connected_graph, random_digraph};
use weighted_paths::graph::Graph;
use weighted_paths::{AllPairsBuilder, BellmanFordSP, DijkstraSP, FloydWarshall, MstAlgorithm};

// Floyd-Warshall is cubic, so it only runs on graphs up to this size
const FLOYD_WARSHALL_LIMIT: usize = 400;
const ALL_PAIRS_LIMIT: usize = 2_000;

#[derive(Debug, Serialize)]
struct Measurement {
    algorithm: String,
    vertices: usize,
    edges: usize,
    millis: f64,
    summary: String,
}

#[derive(Debug, Serialize)]
struct Report {
    generated_at: chrono::DateTime<chrono::Utc>,
    edge_factor: f64,
    measurements: Vec<Measurement>,
}

struct Options {
    sizes: Vec<usize>,
    edge_factor: f64,
    json: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        sizes: Vec::new(),
        edge_factor: 4.0,
        json: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--edge-factor" => {
                let value = args.next().ok_or("--edge-factor needs a value")?;
                options.edge_factor = value
                    .parse()
                    .map_err(|_| format!("invalid edge factor: {}", value))?;
            }
            size => options
                .sizes
                .push(size.parse().map_err(|_| format!("invalid graph size: {}", size))?),
        }
    }

    if options.sizes.is_empty() {
        options.sizes = vec![100, 1_000, 10_000];
    }
    Ok(options)
}

fn measure<T, F>(run: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = run();
    (value, start.elapsed())
}

fn record(
    measurements: &mut Vec<Measurement>,
    algorithm: &str,
    graph: &impl Graph<f64>,
    elapsed: Duration,
    summary: String,
) {
    info!("{} on {} vertices: {:?} ({})", algorithm, graph.vertex_count(), elapsed, summary);
    measurements.push(Measurement {
        algorithm: algorithm.to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        millis: elapsed.as_secs_f64() * 1_000.0,
        summary,
    });
}

fn run(options: &Options) -> weighted_paths::Result<Vec<Measurement>> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut measurements = Vec::new();

    for &size in &options.sizes {
        let edges = (options.edge_factor * size as f64) as usize;
        let digraph = random_digraph::<f64, _>(size, edges, 1.0..100.0, &mut rng)?;
        let graph = random_connected_graph::<f64, _>(size, edges, 1.0..100.0, &mut rng)?;
        info!("Generated graphs with {} vertices and {} edges", size, edges);

        if size > 0 {
            let (sp, elapsed) = measure(|| DijkstraSP::new(&digraph, 0));
            let sp = sp?;
            let reachable = (0..size).filter(|&v| sp.has_path_to(v).unwrap_or(false)).count();
            record(&mut measurements, sp.name(), &digraph, elapsed, format!("{} reachable", reachable));

            let (sp, elapsed) = measure(|| BellmanFordSP::new(&digraph, 0));
            let sp = sp?;
            record(
                &mut measurements,
                sp.name(),
                &digraph,
                elapsed,
                format!("{} relaxations", sp.relaxations()),
            );
        }

        if size <= FLOYD_WARSHALL_LIMIT {
            let (apsp, elapsed) = measure(|| FloydWarshall::new(&digraph));
            let summary = format!("negative cycle: {}", apsp.has_negative_cycle());
            record(&mut measurements, apsp.name(), &digraph, elapsed, summary);
        }

        if size <= ALL_PAIRS_LIMIT {
            let (apsp, elapsed) =
                measure(|| AllPairsBuilder::new().parallel(true).compute(&digraph));
            let apsp = apsp?;
            record(&mut measurements, apsp.name(), &digraph, elapsed, "parallel".to_string());
        }

        for algorithm in MstAlgorithm::ALL {
            let (mst, elapsed) = measure(|| algorithm.compute(&graph));
            let mst = mst?;
            let summary = format!("{} edges, weight {:.3}", mst.edges().len(), mst.weight());
            record(&mut measurements, mst.name(), &graph, elapsed, summary);
        }
    }

    Ok(measurements)
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: benchmark [--json] [--edge-factor F] [SIZE ...]");
            std::process::exit(2);
        }
    };

    let measurements = match run(&options) {
        Ok(measurements) => measurements,
        Err(err) => {
            eprintln!("benchmark failed: {}", err);
            std::process::exit(1);
        }
    };

    if options.json {
        let report = Report {
            generated_at: chrono::Utc::now(),
            edge_factor: options.edge_factor,
            measurements,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("failed to serialize report: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=====================================================");
    println!("Summary of Results (edge factor {})", options.edge_factor);
    println!("=====================================================");
    println!("{:<20} | {:<10} | {:<10} | {:<12} | {}", "Algorithm", "Vertices", "Edges", "Time (ms)", "Result");
    println!("-----------------------------------------------------");
    for m in &measurements {
        println!(
            "{:<20} | {:<10} | {:<10} | {:<12.3} | {}",
            m.algorithm, m.vertices, m.edges, m.millis, m.summary
        );
    }
}
