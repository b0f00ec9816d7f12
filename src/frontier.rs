use std::collections::BTreeSet;

use crate::grid::Grid;
use crate::point::Point;

/// Return the empty cells that touch at least one occupied cell
/// (up, down, left or right).
///
/// Neighbours falling outside the grid are dropped. These are the only cells
/// a new shape may be anchored on during a merge round.
pub fn border_cells(grid: &Grid) -> BTreeSet<Point> {
    grid.occupied_cells()
        .flat_map(Point::neighbours)
        .filter(|&p| matches!(grid.get_at(p), Ok(false)))
        .collect()
}
