use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use polymerge::batch::run_pairs;
use polymerge::progress::Progress;
use polymerge::tetromino::combinations;
use polymerge::SearchConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Look for a common silhouette for every pair of fixed tetrominoes.
#[derive(Parser)]
#[command(name = "polymerge", about = "Merge tetromino pairs into a common shape")]
struct Args {
    /// Extra merge rounds allowed per pair
    #[arg(default_value_t = SearchConfig::DEFAULT_MAX_ROUNDS)]
    rounds: u32,

    /// Side of the square reference field states are grown in
    #[arg(long, default_value_t = SearchConfig::DEFAULT_FIELD_SIZE)]
    field_size: usize,

    /// Directory holding the report and the progress counter
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Ignore the progress counter and start from the first pair
    #[arg(long)]
    fresh: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring worker threads")?;
    }

    let config = SearchConfig::new(args.rounds).with_field_size(args.field_size);
    config.validate()?;

    let counter_path = args.out_dir.join(format!("num-n{}.txt", args.rounds));
    let report_path = args.out_dir.join(format!("out-n{}.txt", args.rounds));

    let progress = Progress::open(&counter_path, args.fresh)
        .with_context(|| format!("opening progress counter {}", counter_path.display()))?;

    // A resumed run keeps the blocks written before the interruption
    let resuming = progress.completed() > 0;
    let report = OpenOptions::new()
        .create(true)
        .write(true)
        .append(resuming)
        .truncate(!resuming)
        .open(&report_path)
        .with_context(|| format!("opening report {}", report_path.display()))?;
    let writer = Mutex::new(BufWriter::new(report));

    let pairs = combinations();
    info!(
        pairs = pairs.len(),
        skipped = progress.completed(),
        rounds = config.max_rounds,
        field_size = config.field_size,
        "starting"
    );

    let summary = run_pairs(&pairs, &config, &progress, &writer)?;

    let mut out = writer.into_inner().unwrap_or_else(|e| e.into_inner());
    writeln!(out, "Time: {:?}", summary.elapsed)?;
    writeln!(out, "Successful: {} of {}", summary.solved, summary.solved + summary.failed)?;
    out.flush()
        .with_context(|| format!("writing report {}", report_path.display()))?;

    info!(
        solved = summary.solved,
        failed = summary.failed,
        skipped = summary.skipped,
        elapsed = ?summary.elapsed,
        "done"
    );

    Ok(())
}
