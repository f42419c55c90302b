//! Collection element validators

use crate::canonical::to_canonical_bytes;
use crate::foundation::{Validate, ValidationError};
use serde_json::Value;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

// ============================================================================
// UNIQUE ITEMS
// ============================================================================

/// Validates that no two elements of a JSON array share a canonical form.
///
/// Equality is textual, see [`crate::canonical`]: objects that differ only
/// in member order are duplicates, `1` and `1.0` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UniqueItems;

impl Validate for UniqueItems {
    type Input = [Value];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.len() < 2 {
            return Ok(());
        }

        let mut seen: HashMap<Vec<u8>, usize> = HashMap::with_capacity(input.len());
        for (index, item) in input.iter().enumerate() {
            match seen.entry(to_canonical_bytes(item)) {
                Entry::Occupied(first) => {
                    return Err(ValidationError::duplicate_items(*first.get(), index));
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }
        Ok(())
    }
}

/// Creates a validator that rejects repeated elements.
#[must_use]
pub const fn unique_items() -> UniqueItems {
    UniqueItems
}

// ============================================================================
// TESTS
// ============================================================================
