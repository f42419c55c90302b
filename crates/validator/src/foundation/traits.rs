//! Core traits for the validation system
//!
//! This module defines the capability contract every keyword validator
//! implements, whether it lives in this crate or in a sibling crate.

use crate::foundation::validatable::AsValidatable;
use std::borrow::Borrow;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// The trait is generic over the input type. Keyword validators that accept
/// any JSON value (the array schema, and its object/string/number siblings)
/// use `Input = serde_json::Value`, which lets an external dispatcher hold
/// them behind `&dyn Validate<Input = Value>`.
///
/// # Examples
///
/// ```
/// use nebula_json_validator::foundation::{Validate, ValidationError};
/// use serde_json::{Value, json};
///
/// struct AlwaysNull;
///
/// impl Validate for AlwaysNull {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         if input.is_null() {
///             Ok(())
///         } else {
///             Err(ValidationError::custom("expected null"))
///         }
///     }
/// }
///
/// assert!(AlwaysNull.is_valid(&json!(null)));
/// assert!(!AlwaysNull.is_valid(&json!(1)));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `[Value]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns the first violated constraint as a [`ValidationError`].
    ///
    /// [`ValidationError`]: crate::foundation::ValidationError
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Returns `true` if the input passes validation.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// The conversion itself may fail: a slice validator handed a JSON
    /// string rejects it with a `type_mismatch` error before any of its own
    /// checks run.
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_json_validator::foundation::Validate;
    /// use nebula_json_validator::validators::ItemCount;
    /// use serde_json::json;
    ///
    /// let count = ItemCount::at_least(2);
    /// assert!(count.validate_any(&json!([1, 2])).is_ok());
    /// assert!(count.validate_any(&json!("[1, 2]")).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

impl<V> Validate for &V
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}

impl<V> Validate for std::sync::Arc<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use serde_json::{Value, json};
    use std::sync::Arc;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = Value;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = Value;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::custom("always fails"))
        }
    }

    #[test]
    fn test_is_valid_follows_validate() {
        assert!(AlwaysValid.is_valid(&json!(1)));
        assert!(!AlwaysFails.is_valid(&json!(1)));
    }

    #[test]
    fn test_trait_object_dispatch() {
        let validators: Vec<Box<dyn Validate<Input = Value>>> =
            vec![Box::new(AlwaysValid), Box::new(AlwaysFails)];
        let outcomes: Vec<bool> = validators.iter().map(|v| v.is_valid(&json!([]))).collect();
        assert_eq!(outcomes, vec![true, false]);
    }

    #[test]
    fn test_shared_validator() {
        let shared: Arc<dyn Validate<Input = Value>> = Arc::new(AlwaysFails);
        let by_ref = &shared;
        assert!(by_ref.validate(&json!(null)).is_err());
    }
}
