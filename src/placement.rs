use crate::error::PlacementError;
use crate::grid::Grid;
use crate::point::Point;

/// Stamp the occupied cells of `shape` onto a copy of `base`, with the
/// shape's `(0, 0)` landing on `offset`.
///
/// Fails if any target cell is outside `base` or already occupied. Neither
/// input is modified; on failure the scratch copy is dropped.
pub fn place_at_offset(base: &Grid, offset: Point, shape: &Grid) -> Result<Grid, PlacementError> {
    let mut scratch = base.clone();

    for cell in shape.occupied_cells() {
        let target = offset + cell;
        match scratch.get_at(target) {
            Ok(true) => return Err(PlacementError::Overlap(target)),
            Ok(false) => (),
            Err(_) => return Err(PlacementError::OutOfBounds(target)),
        }
        scratch
            .set_at(target, true)
            .map_err(|_| PlacementError::OutOfBounds(target))?;
    }

    Ok(scratch)
}

/// Place `shape` so that its cell `anchor_in_shape` lands on
/// `anchor_in_base`
pub fn place_with_anchor(
    base: &Grid,
    anchor_in_base: Point,
    shape: &Grid,
    anchor_in_shape: Point,
) -> Result<Grid, PlacementError> {
    place_at_offset(base, anchor_in_base - anchor_in_shape, shape)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::grid::strategy::arb_grid;

    fn block() -> Grid {
        Grid::from_lines(["**", "**"]).unwrap()
    }

    #[test]
    fn test_block_then_overlap() {
        let base = Grid::empty(3, 3).unwrap();
        let placed = place_at_offset(&base, Point::ORIGIN, &block()).unwrap();
        assert_eq!(placed, Grid::from_lines(["**+", "**+", "+++"]).unwrap());

        assert_eq!(
            place_at_offset(&placed, Point::ORIGIN, &block()),
            Err(PlacementError::Overlap(Point::new(0, 0)))
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let base = Grid::empty(3, 3).unwrap();
        assert_eq!(
            place_at_offset(&base, Point::new(2, 0), &block()),
            Err(PlacementError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(
            place_at_offset(&base, Point::new(-1, 0), &block()),
            Err(PlacementError::OutOfBounds(Point::new(-1, 0)))
        );
    }

    #[test]
    fn test_only_occupied_cells_are_targets() {
        let base = Grid::from_lines(["+++", "+++", "+++"]).unwrap();
        let shape = Grid::from_lines(["*+", "**"]).unwrap();
        let placed = place_at_offset(&base, Point::ORIGIN, &shape).unwrap();
        assert_eq!(placed, Grid::from_lines(["*++", "**+", "+++"]).unwrap());

        // The empty corner of the shape may hang over an occupied cell
        let base = Grid::from_lines(["+*+", "+++", "+++"]).unwrap();
        let placed = place_at_offset(&base, Point::ORIGIN, &shape).unwrap();
        assert_eq!(placed, Grid::from_lines(["**+", "**+", "+++"]).unwrap());
    }

    #[test]
    fn test_place_with_anchor() {
        let base = Grid::empty(4, 4).unwrap();
        let placed = place_with_anchor(&base, Point::new(1, 1), &block(), Point::new(0, 1)).unwrap();
        let expected = Grid::from_lines(["++++", "**++", "**++", "++++"]).unwrap();
        assert_eq!(placed, expected);
    }

    #[test]
    fn test_failure_leaves_base_untouched() {
        let base = Grid::from_lines(["+++", "++*", "+++"]).unwrap();
        let before = base.clone();
        let shape = Grid::from_lines(["***"]).unwrap();
        assert!(place_at_offset(&base, Point::new(1, 0), &shape).is_err());
        assert_eq!(base, before);
    }

    proptest! {
        #[test]
        fn placement_never_mutates_inputs(
            base in arb_grid(6),
            shape in arb_grid(3),
            row in -3i32..6,
            column in -3i32..6,
        ) {
            let base_before = base.clone();
            let shape_before = shape.clone();
            let result = place_at_offset(&base, Point::new(row, column), &shape);

            prop_assert_eq!(&base, &base_before);
            prop_assert_eq!(&shape, &shape_before);
            if let Ok(placed) = result {
                prop_assert_eq!(
                    placed.occupied_count(),
                    base.occupied_count() + shape.occupied_count()
                );
            }
        }
    }
}
