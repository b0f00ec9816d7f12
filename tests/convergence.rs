use paste::paste;
use polymerge::merge::merges_for;
use polymerge::tetromino::{combinations, Tetromino};
use polymerge::{solve, Grid, SearchConfig, SearchOutcome};

macro_rules! converges {
    ($first:ident, $second:ident, $rounds:literal, $expected:expr) => {
        paste! {
            #[test]
            #[allow(non_snake_case)]
            fn [<converges_ $first _ $second _ $rounds>]() {
                let outcome = solve(
                    &Tetromino::$first.grid().unwrap(),
                    &Tetromino::$second.grid().unwrap(),
                    &SearchConfig::new($rounds),
                )
                .unwrap();
                let expected = Grid::from_lines($expected).unwrap();
                assert_eq!(outcome.into_grid(), Some(expected));
            }
        }
    };
}

macro_rules! diverges {
    ($first:ident, $second:ident, $rounds:literal) => {
        paste! {
            #[test]
            #[allow(non_snake_case)]
            fn [<diverges_ $first _ $second _ $rounds>]() {
                let outcome = solve(
                    &Tetromino::$first.grid().unwrap(),
                    &Tetromino::$second.grid().unwrap(),
                    &SearchConfig::new($rounds),
                )
                .unwrap();
                assert_eq!(outcome, SearchOutcome::NotFound { rounds: $rounds });
            }
        }
    };
}

converges!(I1, O1, 0, ["****", "****"]);
converges!(I2, O1, 0, ["**", "**", "**", "**"]);
// Four bars each way only meet as the full 4x4 square
converges!(I1, I2, 2, ["****", "****", "****", "****"]);

diverges!(I1, I2, 0);
diverges!(I1, I2, 1);

#[test]
fn every_tetromino_converges_with_itself() {
    for t in Tetromino::ALL {
        let shape = t.grid().unwrap();
        let outcome = solve(&shape, &shape, &SearchConfig::new(0)).unwrap();
        assert!(outcome.is_found(), "{t} did not converge with itself");
    }
}

#[test]
fn first_round_solutions_are_reachable_from_both_sides() {
    let field = SearchConfig::DEFAULT_FIELD_SIZE;

    for (first, second) in combinations() {
        let shape1 = first.grid().unwrap();
        let shape2 = second.grid().unwrap();

        if let SearchOutcome::Found { grid, round } =
            solve(&shape1, &shape2, &SearchConfig::new(0)).unwrap()
        {
            assert_eq!(round, 0);
            assert_eq!(grid.occupied_count(), 8, "{first} + {second}");
            assert_eq!(grid.canonicalize(), grid);
            assert!(merges_for(&shape1, &shape1, field).contains(&grid));
            assert!(merges_for(&shape2, &shape2, field).contains(&grid));
        }
    }
}
