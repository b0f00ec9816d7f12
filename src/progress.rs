use std::{
    collections::BTreeSet,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::{debug, warn};

/// A counter file remembering how many pairs of a batch are done, so that an
/// interrupted run can skip them when restarted.
///
/// The file holds a single decimal number `n`, meaning pairs `0..n` are all
/// finished. Pairs finishing out of order are held back until every pair
/// before them is finished too, so a restart never skips an unfinished pair.
pub struct Progress {
    path: PathBuf,
    /// Finished prefix length read when the counter was opened
    resumed_from: usize,
    /// Guarded together with the file write so the file content only ever
    /// grows.
    finished: Mutex<Finished>,
}

struct Finished {
    /// Every pair index below this is finished
    prefix: usize,
    /// Finished indices above the prefix
    pending: BTreeSet<usize>,
}

impl Progress {
    /// Open the counter at `path`.
    ///
    /// A missing, empty or unreadable counter counts as zero. With `fresh`,
    /// any existing value is ignored.
    pub fn open(path: impl AsRef<Path>, fresh: bool) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        let resumed_from = if fresh {
            0
        } else {
            match fs::read_to_string(&path) {
                Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                    if !text.trim().is_empty() {
                        warn!(path = %path.display(), "counter file is not a number, starting over");
                    }
                    0
                }),
                Err(err) if err.kind() == io::ErrorKind::NotFound => 0,
                Err(err) => return Err(err),
            }
        };

        if resumed_from == 0 {
            fs::write(&path, "0")?;
        } else {
            debug!(path = %path.display(), resumed_from, "resuming");
        }

        Ok(Self {
            path,
            resumed_from,
            finished: Mutex::new(Finished {
                prefix: resumed_from,
                pending: BTreeSet::new(),
            }),
        })
    }

    /// Number of leading pairs finished before this run
    pub fn completed(&self) -> usize {
        self.resumed_from
    }

    /// Number of leading pairs finished so far, this run included
    pub fn total(&self) -> usize {
        match self.finished.lock() {
            Ok(finished) => finished.prefix,
            Err(e) => e.into_inner().prefix,
        }
    }

    /// Mark pair `index` as finished and persist the finished prefix.
    ///
    /// Returns the prefix length after this record. The file is rewritten
    /// only when the prefix grows.
    pub fn record(&self, index: usize) -> io::Result<usize> {
        let mut finished = self.finished.lock().unwrap_or_else(|e| e.into_inner());
        if index < finished.prefix {
            return Ok(finished.prefix);
        }
        finished.pending.insert(index);

        let before = finished.prefix;
        loop {
            let next = finished.prefix;
            if !finished.pending.remove(&next) {
                break;
            }
            finished.prefix += 1;
        }

        if finished.prefix != before {
            fs::write(&self.path, finished.prefix.to_string())?;
        }
        Ok(finished.prefix)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
