use std::ops::{Add, Sub};

/// A `(row, column)` coordinate. Components are signed so that offsets
/// computed during placement may point outside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: i32,
    pub column: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { row: 0, column: 0 };

    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Up, down, left and right neighbours, without any bounds check
    pub fn neighbours(self) -> [Point; 4] {
        [
            Point::new(self.row - 1, self.column),
            Point::new(self.row + 1, self.column),
            Point::new(self.row, self.column - 1),
            Point::new(self.row, self.column + 1),
        ]
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, column): (i32, i32)) -> Self {
        Self { row, column }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.row + rhs.row, self.column + rhs.column)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.row - rhs.row, self.column - rhs.column)
    }
}
