use tracing::debug;

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::merge::{merges_for, StateSet};

/// Result of a bounded convergence search.
///
/// `NotFound` only says that no common shape appeared within the configured
/// number of rounds and field size. It does not prove the two shapes can
/// never be merged into the same silhouette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A canonical shape reachable from both inputs, found after `round`
    /// extra merge rounds
    Found { grid: Grid, round: u32 },
    /// Both state sets were expanded `rounds` extra times without meeting
    NotFound { rounds: u32 },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn grid(&self) -> Option<&Grid> {
        match self {
            Self::Found { grid, .. } => Some(grid),
            Self::NotFound { .. } => None,
        }
    }

    pub fn into_grid(self) -> Option<Grid> {
        match self {
            Self::Found { grid, .. } => Some(grid),
            Self::NotFound { .. } => None,
        }
    }
}

/// Grow copies of `shape1` and `shape2` side by side until both sides reach
/// a common canonical shape, or `config.max_rounds` extra rounds have run.
///
/// Round 0 merges each shape once with itself. Each later round merges the
/// original shape once more into every state of its side, reseeding the
/// state into a fresh reference field first. Sides never exchange shapes,
/// so after round `i` every state of side `k` holds `i + 2` copies of
/// `shapek`.
///
/// When several common shapes exist, the first one in `shape1`'s state order
/// is returned.
pub fn solve(
    shape1: &Grid,
    shape2: &Grid,
    config: &SearchConfig,
) -> Result<SearchOutcome, ConfigError> {
    config.validate()?;
    let field_size = config.field_size;

    let mut states1 = merges_for(shape1, shape1, field_size);
    let mut states2 = merges_for(shape2, shape2, field_size);
    let mut round = 0;

    loop {
        debug!(round, left = states1.len(), right = states2.len(), "merge round done");

        if let Some(common) = first_common(&states1, &states2) {
            return Ok(SearchOutcome::Found {
                grid: common.clone(),
                round,
            });
        }

        if round == config.max_rounds {
            return Ok(SearchOutcome::NotFound { rounds: round });
        }

        // Nothing can grow out of an empty side
        if states1.is_empty() || states2.is_empty() {
            debug!(round, "a side has no states left, stopping early");
            return Ok(SearchOutcome::NotFound { rounds: round });
        }

        states1 = expand(&states1, shape1, field_size);
        states2 = expand(&states2, shape2, field_size);
        round += 1;
    }
}

fn first_common<'a>(left: &'a StateSet, right: &StateSet) -> Option<&'a Grid> {
    left.iter().find(|state| right.contains(*state))
}

/// Union of one merge of `shape` into every state
fn expand(states: &StateSet, shape: &Grid, field_size: usize) -> StateSet {
    states
        .iter()
        .flat_map(|state| merges_for(shape, state, field_size))
        .collect()
}
