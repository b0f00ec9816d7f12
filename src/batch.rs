use std::{
    fmt::Write as _,
    io::Write,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::{Duration, Instant},
};

use rayon::prelude::*;
use tracing::info;

use crate::config::SearchConfig;
use crate::error::BatchError;
use crate::progress::Progress;
use crate::search::{solve, SearchOutcome};
use crate::tetromino::Tetromino;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Pairs skipped because an earlier run already did them
    pub skipped: usize,
    pub solved: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

/// Solve every pair not yet recorded in `progress`, spreading pairs over the
/// rayon thread pool.
///
/// Each pair produces one report block, written in a single call under the
/// writer lock so blocks never interleave. Block order follows completion
/// order, not pair order.
///
/// Pairs finish out of order, so `progress` only advances over the leading
/// run of finished pairs. After an interruption, pairs that finished past
/// the first unfinished one are solved again and their blocks appear twice
/// in the report.
pub fn run_pairs<W>(
    pairs: &[(Tetromino, Tetromino)],
    config: &SearchConfig,
    progress: &Progress,
    writer: &Mutex<W>,
) -> Result<BatchSummary, BatchError>
where
    W: Write + Send,
{
    config.validate()?;

    let skipped = progress.completed().min(pairs.len());
    let solved = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);
    let start = Instant::now();

    pairs
        .par_iter()
        .enumerate()
        .skip(skipped)
        .try_for_each(|(index, &(first, second))| -> Result<(), BatchError> {
            let shape1 = first.grid()?;
            let shape2 = second.grid()?;
            let outcome = solve(&shape1, &shape2, config)?;

            match &outcome {
                SearchOutcome::Found { round, .. } => {
                    solved.fetch_add(1, Ordering::Relaxed);
                    info!(%first, %second, round, "common shape found");
                }
                SearchOutcome::NotFound { rounds } => {
                    failed.fetch_add(1, Ordering::Relaxed);
                    info!(%first, %second, rounds, "no common shape");
                }
            }

            let block = report_block(first, second, &outcome);
            {
                let mut out = writer.lock().unwrap_or_else(|e| e.into_inner());
                out.write_all(block.as_bytes())?;
                out.flush()?;
            }
            progress.record(index)?;
            Ok(())
        })?;

    Ok(BatchSummary {
        skipped,
        solved: solved.into_inner(),
        failed: failed.into_inner(),
        elapsed: start.elapsed(),
    })
}

/// Render the text block for one pair:
///
/// ```text
/// p1=L1
/// +*
/// ...
/// p2=O1
/// **
/// **
///
/// solution (round 0)=
/// ...
/// ```
///
/// or `fail after N rounds` in place of the solution.
pub fn report_block(first: Tetromino, second: Tetromino, outcome: &SearchOutcome) -> String {
    let mut block = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        block,
        "p1={first}\n{}\np2={second}\n{}\n\n",
        first.lines().join("\n"),
        second.lines().join("\n"),
    );
    match outcome {
        SearchOutcome::Found { grid, round } => {
            let _ = write!(block, "solution (round {round})=\n{grid}\n\n");
        }
        SearchOutcome::NotFound { rounds } => {
            let _ = write!(block, "fail after {rounds} rounds\n\n");
        }
    }
    block
}
