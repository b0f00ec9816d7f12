use std::{
    fmt::{self, Debug, Display, Write},
    str::FromStr,
};

use crate::error::GridError;
use crate::point::Point;

pub const OCCUPIED: char = '*';
pub const EMPTY: char = '+';

/// A finite rectangle of cells, each either occupied or empty.
///
/// A grid always has at least one row and one column, and every row has the
/// same length. Cells are stored row-major in an owned buffer, so `clone` is
/// a deep copy.
///
/// Equality, ordering and hashing are structural: two grids compare equal
/// iff they have the same dimensions and the same cells. This is what lets
/// [`StateSet`](crate::merge::StateSet) deduplicate merge results.
///
/// The text form uses `*` for occupied and `+` for empty cells, one line per
/// row:
///
/// ```text
/// +*
/// +*
/// **
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid of the given dimensions with all cells empty
    pub fn empty(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyDimension { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        })
    }

    /// Parse a grid from its line-oriented text form.
    /// Lines are separated by `\n`.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        Self::from_lines(text.split('\n'))
    }

    /// Parse a grid from one string per row
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = 0;
        let mut columns = 0;
        let mut cells = vec![];

        for (line_idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_no = line_idx + 1;
            let mut width = 0;

            for (col_idx, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    OCCUPIED => true,
                    EMPTY => false,
                    _ => {
                        return Err(GridError::UnknownSymbol {
                            symbol,
                            line: line_no,
                            column: col_idx + 1,
                        })
                    }
                };
                cells.push(cell);
                width += 1;
            }

            if width == 0 {
                return Err(GridError::NoColumns { line: line_no });
            }
            if rows == 0 {
                columns = width;
            } else if width != columns {
                return Err(GridError::RaggedRows {
                    line: line_no,
                    expected: columns,
                    found: width,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(GridError::NoRows);
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Render the grid in the same form accepted by [`Grid::from_text`]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The point `(rows / 2, columns / 2)`
    pub fn center(&self) -> Point {
        Point::new((self.rows / 2) as i32, (self.columns / 2) as i32)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.row >= 0
            && point.column >= 0
            && (point.row as usize) < self.rows
            && (point.column as usize) < self.columns
    }

    fn index_of(&self, row: i32, column: i32) -> Result<usize, GridError> {
        if !self.contains(Point::new(row, column)) {
            return Err(GridError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row as usize * self.columns + column as usize)
    }

    pub fn get(&self, row: i32, column: i32) -> Result<bool, GridError> {
        let idx = self.index_of(row, column)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: i32, column: i32, value: bool) -> Result<(), GridError> {
        let idx = self.index_of(row, column)?;
        self.cells[idx] = value;
        Ok(())
    }

    pub fn get_at(&self, point: Point) -> Result<bool, GridError> {
        self.get(point.row, point.column)
    }

    pub fn set_at(&mut self, point: Point, value: bool) -> Result<(), GridError> {
        self.set(point.row, point.column, value)
    }

    /// All occupied cells, in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(move |(idx, _)| Point::new((idx / columns) as i32, (idx % columns) as i32))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    fn row_is_empty(&self, row: usize) -> bool {
        !self.cells[row * self.columns..(row + 1) * self.columns].contains(&true)
    }

    fn column_is_empty(&self, column: usize) -> bool {
        (0..self.rows).all(|row| !self.cells[row * self.columns + column])
    }

    /// Trim every empty leading and trailing row and column.
    ///
    /// Trimming stops at a single row or column, so an all-empty grid
    /// collapses to a 1x1 empty grid rather than to nothing. Two grids holding
    /// the same pattern under different padding canonicalize to equal grids.
    pub fn canonicalize(&self) -> Grid {
        let (mut top, mut bottom) = (0, self.rows - 1);
        while top < bottom && self.row_is_empty(top) {
            top += 1;
        }
        while bottom > top && self.row_is_empty(bottom) {
            bottom -= 1;
        }

        let (mut left, mut right) = (0, self.columns - 1);
        while left < right && self.column_is_empty(left) {
            left += 1;
        }
        while right > left && self.column_is_empty(right) {
            right -= 1;
        }

        let rows = bottom - top + 1;
        let columns = right - left + 1;
        let mut cells = Vec::with_capacity(rows * columns);
        for row in top..=bottom {
            let start = row * self.columns;
            cells.extend_from_slice(&self.cells[start + left..=start + right]);
        }

        Grid {
            rows,
            columns,
            cells,
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.columns).enumerate() {
            if row != 0 {
                f.write_char('\n')?;
            }
            for &cell in cells {
                f.write_char(if cell { OCCUPIED } else { EMPTY })?;
            }
        }

        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.rows, self.columns)?;
        Display::fmt(self, f)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

#[cfg(test)]
pub(crate) mod strategy {
    use proptest::prelude::*;

    use super::Grid;

    /// Arbitrary grids up to `max` cells on each side
    pub fn arb_grid(max: usize) -> impl Strategy<Value = Grid> {
        (1..=max, 1..=max).prop_flat_map(|(rows, columns)| {
            proptest::collection::vec(any::<bool>(), rows * columns).prop_map(move |cells| Grid {
                rows,
                columns,
                cells,
            })
        })
    }
}
