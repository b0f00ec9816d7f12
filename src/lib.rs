//! Grow two polyominoes out of copies of themselves and look for a
//! silhouette both can reach.
//!
//! Each shape is merged with itself round after round ([`merge`]); the
//! search ([`search::solve`]) stops at the first canonical grid present on
//! both sides, or when the round bound is hit.

pub mod batch;
pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod merge;
pub mod placement;
pub mod point;
pub mod progress;
pub mod search;
pub mod tetromino;

pub use config::SearchConfig;
pub use error::{BatchError, ConfigError, GridError, PlacementError};
pub use grid::Grid;
pub use point::Point;
pub use search::{solve, SearchOutcome};
