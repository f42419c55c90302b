//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `AsValidatable`
//! - **Errors**: `ValidationError`, `ErrorKind`, `ValidationErrors`
//! - **Types**: `JsonType`
//!
//! # Fail-fast vs. collect-all
//!
//! Each keyword validator stops at its first violated constraint and returns
//! exactly one error. A dispatch layer that runs several keyword validators
//! over the same value can collect their errors with [`validate_with_all`].
//!
//! ```
//! use nebula_json_validator::foundation::{Validate, validate_with_all};
//! use nebula_json_validator::schema::ArraySchema;
//! use serde_json::{Value, json};
//!
//! let short = ArraySchema::builder().max_items(1).build();
//! let unique = ArraySchema::builder().unique_items(true).build();
//! let validators: [&dyn Validate<Input = Value>; 2] = [&short, &unique];
//!
//! let errors = validate_with_all(&json!([1, 1]), &validators).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{ErrorKind, ErrorParams, ValidationError, ValidationErrors};
pub use traits::Validate;
pub use validatable::{AsValidatable, JsonType, as_array};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators.
///
/// Every validator runs; the result holds one error per failing validator.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    errors.into_result(())
}

/// Validates a value with multiple validators (at least one must pass).
///
/// An empty validator list fails with an empty error collection.
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

// ============================================================================
// TESTS
// ============================================================================
