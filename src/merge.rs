use indexmap::IndexSet;
use tracing::{trace, warn};

use crate::frontier::border_cells;
use crate::grid::Grid;
use crate::placement::{place_at_offset, place_with_anchor};

/// Canonical grids reached after some number of merge rounds.
///
/// Membership is structural, so equal shapes produced by different placements
/// are stored once. Iteration follows insertion order, which keeps
/// "first common shape" reproducible across runs.
pub type StateSet = IndexSet<Grid>;

/// Attach one copy of `shape` to `base` in every possible way.
///
/// Every occupied cell of `shape` is tried as an anchor on every border cell
/// of `base`. Placements that overlap or leave the grid are skipped, the
/// others are canonicalized into the returned set.
pub fn merge_round(base: &Grid, shape: &Grid) -> StateSet {
    let anchors: Vec<_> = shape.occupied_cells().collect();
    let mut states = StateSet::new();

    for border in border_cells(base) {
        for &anchor in anchors.iter() {
            match place_with_anchor(base, border, shape, anchor) {
                Ok(merged) => {
                    states.insert(merged.canonicalize());
                }
                Err(err) => trace!(?border, ?anchor, %err, "placement skipped"),
            }
        }
    }

    states
}

/// Seed an empty `field_size` square field with `base`, top-left corner on
/// the field's center, then run one [`merge_round`] of `shape` on it.
///
/// Returns an empty set when `base` does not fit in the field.
pub fn merges_for(shape: &Grid, base: &Grid, field_size: usize) -> StateSet {
    let field = match Grid::empty(field_size, field_size) {
        Ok(field) => field,
        Err(err) => {
            warn!(%err, "cannot allocate reference field");
            return StateSet::new();
        }
    };

    match place_at_offset(&field, field.center(), base) {
        Ok(seeded) => merge_round(&seeded, shape),
        Err(err) => {
            warn!(
                %err,
                rows = base.rows(),
                columns = base.columns(),
                field_size,
                "state does not fit in the reference field"
            );
            StateSet::new()
        }
    }
}
