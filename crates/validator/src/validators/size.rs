//! Item count validators
//!
//! `minItems` and `maxItems` as one validator over a slice of JSON values.

use crate::foundation::{Validate, ValidationError};
use serde_json::Value;

// ============================================================================
// ITEM COUNT
// ============================================================================

/// Validates the element count of a JSON array against optional bounds.
///
/// The lower bound is checked first; when it fails the upper bound is not
/// consulted, so an inverted pair (`min > max`) always reports
/// `min_items` for short arrays and `max_items` for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemCount {
    min: Option<usize>,
    max: Option<usize>,
}

impl ItemCount {
    /// Creates a validator from optional bounds; `None` means unbounded.
    #[must_use]
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Only a lower bound (`minItems`).
    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self::new(Some(min), None)
    }

    /// Only an upper bound (`maxItems`).
    #[must_use]
    pub const fn at_most(max: usize) -> Self {
        Self::new(None, Some(max))
    }

    /// Both bounds, inclusive.
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// The lower bound, if any.
    #[must_use]
    pub const fn min(&self) -> Option<usize> {
        self.min
    }

    /// The upper bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// Returns true when neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl Validate for ItemCount {
    type Input = [Value];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let count = input.len();
        if let Some(min) = self.min
            && count < min
        {
            return Err(ValidationError::too_few_items(min, count));
        }
        if let Some(max) = self.max
            && count > max
        {
            return Err(ValidationError::too_many_items(max, count));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
