use crate::graph::{EdgeWeightedDigraph, EdgeWeightedGraph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use rand::prelude::*;
use std::fmt::Debug;
use std::ops::Range;

fn sample_weight<W, R>(rng: &mut R, weights: &Range<f64>) -> Result<W>
where
    W: Float + Zero + Debug + Copy,
    R: Rng,
{
    let raw = if weights.start < weights.end {
        rng.gen_range(weights.clone())
    } else {
        weights.start
    };
    W::from(raw).ok_or(Error::InvalidWeight(raw))
}

/// Generates a digraph with `vertices` vertices and `edges` edges whose
/// endpoints are chosen uniformly at random. Self-loops and parallel edges
/// may occur.
pub fn random_digraph<W, R>(
    vertices: usize,
    edges: usize,
    weights: Range<f64>,
    rng: &mut R,
) -> Result<EdgeWeightedDigraph<W>>
where
    W: Float + Zero + Debug + Copy,
    R: Rng,
{
    let mut graph = EdgeWeightedDigraph::new(vertices);
    if vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        let weight = sample_weight(rng, &weights)?;
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}

/// Generates an undirected graph with `edges` uniformly random edges
pub fn random_graph<W, R>(
    vertices: usize,
    edges: usize,
    weights: Range<f64>,
    rng: &mut R,
) -> Result<EdgeWeightedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
    R: Rng,
{
    let mut graph = EdgeWeightedGraph::new(vertices);
    if vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..edges {
        let v = rng.gen_range(0..vertices);
        let w = rng.gen_range(0..vertices);
        let weight = sample_weight(rng, &weights)?;
        graph.add_edge(v, w, weight)?;
    }

    Ok(graph)
}

/// Generates a connected undirected graph: a random spanning path through a
/// shuffled vertex order, plus `extra_edges` random edges
pub fn random_connected_graph<W, R>(
    vertices: usize,
    extra_edges: usize,
    weights: Range<f64>,
    rng: &mut R,
) -> Result<EdgeWeightedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
    R: Rng,
{
    let mut graph = EdgeWeightedGraph::new(vertices);
    if vertices == 0 {
        return Ok(graph);
    }

    let mut order: Vec<usize> = (0..vertices).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        let weight = sample_weight(rng, &weights)?;
        graph.add_edge(pair[0], pair[1], weight)?;
    }

    for _ in 0..extra_edges {
        let v = rng.gen_range(0..vertices);
        let w = rng.gen_range(0..vertices);
        let weight = sample_weight(rng, &weights)?;
        graph.add_edge(v, w, weight)?;
    }

    Ok(graph)
}

/// Generates a `width x height` grid with 4-connectivity
pub fn grid_graph<W, R>(
    width: usize,
    height: usize,
    weights: Range<f64>,
    rng: &mut R,
) -> Result<EdgeWeightedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
    R: Rng,
{
    let mut graph = EdgeWeightedGraph::new(width * height);

    // Helper function to get vertex index from grid coordinates
    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                let weight = sample_weight(rng, &weights)?;
                graph.add_edge(index(x, y), index(x + 1, y), weight)?;
            }
            if y + 1 < height {
                let weight = sample_weight(rng, &weights)?;
                graph.add_edge(index(x, y), index(x, y + 1), weight)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random digraph with non-negative weights and plants a cycle
/// through `cycle_len` distinct vertices whose total weight is `-1`
pub fn negative_cycle_digraph<W, R>(
    vertices: usize,
    edges: usize,
    cycle_len: usize,
    rng: &mut R,
) -> Result<EdgeWeightedDigraph<W>>
where
    W: Float + Zero + Debug + Copy,
    R: Rng,
{
    let mut graph = random_digraph(vertices, edges, 1.0..10.0, rng)?;
    if cycle_len == 0 {
        return Ok(graph);
    }

    let mut members: Vec<usize> = (0..vertices).collect();
    members.shuffle(rng);
    members.truncate(cycle_len);
    if members.len() < cycle_len {
        return Err(Error::InvalidVertex { vertex: cycle_len - 1, vertex_count: vertices });
    }

    // Every cycle edge weighs 1 except the closing one, which weighs -len.
    let one = W::one();
    let closing = -W::from(cycle_len).ok_or(Error::InvalidWeight(cycle_len as f64))?;
    for i in 0..cycle_len {
        let from = members[i];
        let to = members[(i + 1) % cycle_len];
        let weight = if i + 1 == cycle_len { closing } else { one };
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}
