//! Search configuration parameters.

use crate::error::ConfigError;

/// Bounds for one convergence search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of extra merge rounds after the initial one.
    ///
    /// Default: 2. Cost grows combinatorially with this value.
    pub max_rounds: u32,

    /// Side length of the square reference grid every state is reseeded into
    /// before a merge round.
    ///
    /// Default: 25. Must be at least 1. States that no longer fit with their
    /// top-left corner at the grid's center produce no successors.
    pub field_size: usize,
}

impl SearchConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 2;

    pub const DEFAULT_FIELD_SIZE: usize = 25;

    /// Create a config with the given round bound and the default field size
    pub fn new(max_rounds: u32) -> Self {
        Self {
            max_rounds,
            field_size: Self::DEFAULT_FIELD_SIZE,
        }
    }

    pub fn with_field_size(mut self, field_size: usize) -> Self {
        self.field_size = field_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_size == 0 {
            return Err(ConfigError::FieldTooSmall(self.field_size));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ROUNDS)
    }
}
