// src/main.rs

//! Dataset inspection tool.
//!
//! Enumerates the chart files for a track range, shows how they would
//! be partitioned across loader workers, and estimates the window
//! stream without loading any chart.
//!
//! # Usage
//!
//! ```bash
//! # Inspect a corpus with the default single worker
//! chartstream --root /data/ORS10548 --end 10548
//!
//! # Show the 4-worker partition for a sub-range
//! chartstream --root /data/ORS10548 --start 100 --end 600 --workers 4
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chartstream::dataset::{partition, track_files, TrackRange};

/// Chart corpus inspection
#[derive(Parser, Debug)]
#[command(name = "chartstream")]
#[command(about = "Inspect a beatmap corpus and its worker partitioning")]
struct Args {
    /// Corpus root containing the TrackNNNNN directories
    #[arg(short, long)]
    root: std::path::PathBuf,

    /// First track index (inclusive)
    #[arg(long, default_value = "0")]
    start: u32,

    /// Last track index (exclusive)
    #[arg(long)]
    end: u32,

    /// Number of loader workers (0 = single-process)
    #[arg(short, long, default_value = "0")]
    workers: u32,

    /// Window length in rows
    #[arg(long, default_value = "25")]
    seq_len: usize,

    /// Offset between successive windows
    #[arg(long, default_value = "16")]
    stride: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let filter = tracing_subscriber::filter::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let range = TrackRange::new(args.start, args.end);
    tracing::info!("Inspecting corpus at {}", args.root.display());
    tracing::info!("  Track range: [{}, {})", range.start, range.end);
    tracing::info!("  Window: seq_len={} stride={}", args.seq_len, args.stride);

    let files = track_files(&args.root, range)?;
    tracing::info!("  Chart files: {}", files.len());

    if args.workers > 0 {
        for (worker_id, sub) in partition(range, args.workers).iter().enumerate() {
            let count = track_files(&args.root, *sub)?.len();
            tracing::info!(
                "  Worker {}: tracks [{}, {}), {} files",
                worker_id,
                sub.start,
                sub.end,
                count
            );
        }
    }

    Ok(())
}
