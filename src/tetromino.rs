use std::fmt;

use crate::error::GridError;
use crate::grid::Grid;

/// The 19 fixed tetrominoes: every orientation counted separately,
/// reflections included.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tetromino {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
    L7,
    L8,
    Z1,
    Z2,
    S1,
    S2,
    T1,
    T2,
    T3,
    T4,
    I1,
    I2,
    O1,
}

impl Tetromino {
    pub const ALL: [Tetromino; 19] = [
        Tetromino::L1,
        Tetromino::L2,
        Tetromino::L3,
        Tetromino::L4,
        Tetromino::L5,
        Tetromino::L6,
        Tetromino::L7,
        Tetromino::L8,
        Tetromino::Z1,
        Tetromino::Z2,
        Tetromino::S1,
        Tetromino::S2,
        Tetromino::T1,
        Tetromino::T2,
        Tetromino::T3,
        Tetromino::T4,
        Tetromino::I1,
        Tetromino::I2,
        Tetromino::O1,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tetromino::L1 => "L1",
            Tetromino::L2 => "L2",
            Tetromino::L3 => "L3",
            Tetromino::L4 => "L4",
            Tetromino::L5 => "L5",
            Tetromino::L6 => "L6",
            Tetromino::L7 => "L7",
            Tetromino::L8 => "L8",
            Tetromino::Z1 => "Z1",
            Tetromino::Z2 => "Z2",
            Tetromino::S1 => "S1",
            Tetromino::S2 => "S2",
            Tetromino::T1 => "T1",
            Tetromino::T2 => "T2",
            Tetromino::T3 => "T3",
            Tetromino::T4 => "T4",
            Tetromino::I1 => "I1",
            Tetromino::I2 => "I2",
            Tetromino::O1 => "O1",
        }
    }

    /// Text rows of the shape
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Tetromino::L1 => &["+*", "+*", "**"],
            Tetromino::L2 => &["**", "+*", "+*"],
            Tetromino::L3 => &["***", "++*"],
            Tetromino::L4 => &["++*", "***"],
            Tetromino::L5 => &["**", "*+", "*+"],
            Tetromino::L6 => &["*+", "*+", "**"],
            Tetromino::L7 => &["*++", "***"],
            Tetromino::L8 => &["***", "*++"],
            Tetromino::Z1 => &["+**", "**+"],
            Tetromino::Z2 => &["**+", "+**"],
            Tetromino::S1 => &["*+", "**", "+*"],
            Tetromino::S2 => &["+*", "**", "*+"],
            Tetromino::T1 => &["***", "+*+"],
            Tetromino::T2 => &["+*+", "***"],
            Tetromino::T3 => &["*+", "**", "*+"],
            Tetromino::T4 => &["+*", "**", "+*"],
            Tetromino::I1 => &["****"],
            Tetromino::I2 => &["*", "*", "*", "*"],
            Tetromino::O1 => &["**", "**"],
        }
    }

    pub fn grid(self) -> Result<Grid, GridError> {
        Grid::from_lines(self.lines())
    }
}

impl fmt::Display for Tetromino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every unordered pair of distinct tetrominoes, in catalogue order
pub fn combinations() -> Vec<(Tetromino, Tetromino)> {
    let mut pairs = Vec::with_capacity(171);
    for (i, &first) in Tetromino::ALL.iter().enumerate() {
        for &second in Tetromino::ALL[i + 1..].iter() {
            pairs.push((first, second));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalogue_is_well_formed() {
        let grids: HashSet<Grid> = Tetromino::ALL
            .iter()
            .map(|t| t.grid().unwrap())
            .collect();

        // No two orientations coincide
        assert_eq!(grids.len(), 19);
        for grid in grids.iter() {
            assert_eq!(grid.occupied_count(), 4);
            assert_eq!(&grid.canonicalize(), grid);
        }
    }

    #[test]
    fn test_combinations() {
        let pairs = combinations();
        assert_eq!(pairs.len(), 171);
        assert_eq!(pairs[0], (Tetromino::L1, Tetromino::L2));
        assert_eq!(pairs[170], (Tetromino::I2, Tetromino::O1));

        let unordered: HashSet<(Tetromino, Tetromino)> = pairs
            .iter()
            .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
            .collect();
        assert_eq!(unordered.len(), 171);
        assert!(pairs.iter().all(|(a, b)| a != b));
    }
}
