//! Growable array configuration parameters.

use strata_core::{ArrayError, Result};

/// Configuration for a [`GrowableArray`](crate::GrowableArray).
///
/// Controls the initial backing capacity and the ceiling that growth and
/// explicit resizes may not cross. Validated at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Length of the first backing store.
    ///
    /// Default: 4. Zero is allowed; the first append then grows to one slot.
    pub initial_capacity: usize,

    /// Upper bound on the backing store length.
    ///
    /// Default: `isize::MAX as usize`, i.e. no practical limit. Doubling
    /// growth is clamped to this value.
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Default maximum capacity.
    pub const DEFAULT_MAX_CAPACITY: usize = isize::MAX as usize;

    /// Create a config with the given initial capacity and no practical
    /// maximum.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Set the maximum capacity.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > self.max_capacity {
            return Err(ArrayError::invalid_argument(format!(
                "initial capacity {} exceeds maximum capacity {}",
                self.initial_capacity, self.max_capacity
            )));
        }
        Ok(())
    }

    /// Capacity after one growth step from `capacity`.
    ///
    /// Doubles, grows an empty store to one slot, and clamps to
    /// `max_capacity`.
    pub fn grown(&self, capacity: usize) -> usize {
        capacity
            .saturating_mul(2)
            .max(1)
            .min(self.max_capacity)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Whether a resize may drop live elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataLoss {
    /// Fail with `DataLossWarning` instead of truncating.
    #[default]
    Refuse,
    /// Truncate live elements that no longer fit.
    Accept,
}
