//! Random-vector demo.

use anyhow::Result;
use gector_core::{HnswIndex, IndexConfig, SearchResult, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// What a demo run produced.
#[derive(Debug)]
pub struct DemoReport {
    pub inserted: usize,
    /// Node count per level, top first.
    pub level_sizes: Vec<usize>,
    pub query: Vector,
    pub results: Vec<SearchResult>,
    pub insert_ms: f64,
    pub search_ms: f64,
}

/// Coordinates uniform in `[0, 100)`.
pub fn random_vector<R: Rng>(rng: &mut R, id: String, dim: usize) -> Vector {
    let values = (0..dim).map(|_| rng.gen::<f64>() * 100.0).collect();
    Vector::new(id, values)
}

pub fn run(config: &IndexConfig, count: usize, dim: usize, k: usize) -> Result<DemoReport> {
    if dim == 0 {
        anyhow::bail!("Dimension must be at least 1");
    }

    // Demo data uses its own stream so that the same seed also reproduces
    // the level layout.
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    let mut index = HnswIndex::from_config(config);

    let start = Instant::now();
    for n in 0..count {
        let id = format!("vector-{n}");
        let vector = random_vector(&mut rng, id.clone(), dim);
        index.add_vector(id, vector);
    }
    let insert_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(count, dim, insert_ms, "demo vectors inserted");

    let query = random_vector(&mut rng, "query".to_string(), dim);
    let start = Instant::now();
    let results = index.search(&query, k);
    let search_ms = start.elapsed().as_secs_f64() * 1000.0;

    Ok(DemoReport {
        inserted: index.len(),
        level_sizes: (0..index.max_levels()).map(|l| index.level_len(l)).collect(),
        query,
        results,
        insert_ms,
        search_ms,
    })
}
