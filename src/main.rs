/*

    Run slab tests for the boxes and rays of a query file
    and write the nearest hit of every ray to a JSON file.

    Usage: slabquery <query>.json

    @date: Oct, 2026

*/

use std::{self, env, fs::File, io::BufWriter, path::Path, time::Instant};
use serde::Serialize;
use tracing::{info, warn, error, debug};

use vol_slab::batch::{trace_all, BatchStats, BoxHit};
use vol_slab::json_parser::parse_query_file;
use vol_slab::sampler::{sample_rays, sampling_region};
use vol_slab::prelude::{Interval, Ray3D};

#[derive(Serialize)]
struct RayResult {
    ray: Ray3D,
    hit: Option<BoxHit>,
}

#[derive(Serialize)]
struct QueryReport {
    t_range: Interval,
    stats: BatchStats,
    results: Vec<RayResult>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let query_path: String = if args.len() == 1 {
        warn!("No arguments were provided, setting default query path...");
        String::from("./inputs/query.json")
    } else if args.len() == 2 {
        args[1].clone()
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading query from {}...", query_path);
    let root = parse_query_file(&query_path).map_err(|e| {
        error!("Failed to load query: {}", e);
        e
    })?;
    let query = root.query;
    debug!("Query is loaded successfully.\n {:#?}", query);

    let boxes = query.all_boxes();
    if boxes.is_empty() {
        warn!("Query has no boxes, every ray will miss.");
    }
    for (i, b) in boxes.iter().enumerate() {
        info!("[{}] {} center {}", i, b, b.center());
    }

    let mut rays = query.all_rays();
    if query.random_rays > 0 {
        match sampling_region(&boxes) {
            Some(region) => {
                info!("Sampling {} random rays in {} (seed {})", query.random_rays, region, query.seed);
                rays.extend(sample_rays(query.random_rays, &region, query.seed));
            }
            None => warn!("No box with finite corners, skipping {} random rays.", query.random_rays),
        }
    }

    let t_range = query.t_range();
    let start = Instant::now();
    let hits = trace_all(&rays, &boxes, &t_range);
    let stats = BatchStats::from_hits(&hits);
    info!(
        ">> {} rays against {} boxes: {} hits, {} misses, took {:?}",
        stats.rays, boxes.len(), stats.hits, stats.misses, start.elapsed()
    );

    let report = QueryReport {
        t_range,
        stats,
        results: rays.into_iter().zip(hits).map(|(ray, hit)| RayResult { ray, hit }).collect(),
    };

    // Save next to the query file
    let out_path = Path::new(&query_path)
        .parent()
        .unwrap_or(Path::new("."))
        .join(&query.output_name);
    let writer = BufWriter::new(File::create(&out_path)?);
    serde_json::to_writer_pretty(writer, &report)?;
    info!("Results written to {:?}", out_path);

    info!("Finished execution.");
    Ok(())
}
