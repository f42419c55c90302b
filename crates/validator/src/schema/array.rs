//! The `array` keyword schema: `minItems`, `maxItems` and `uniqueItems`.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the candidate must be a JSON array (`type_mismatch`);
//! 2. `minItems`, then `maxItems` (`min_items` / `max_items`);
//! 3. `uniqueItems`, when enabled (`unique_items`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SchemaError;
use crate::foundation::{Validate, ValidationError, as_array};
use crate::validators::{ItemCount, UniqueItems};

// =============================================================================
// Rules
// =============================================================================

/// Configuration of an [`ArraySchema`], named after the JSON Schema keywords.
///
/// # Examples
///
/// ```
/// use nebula_json_validator::schema::ArrayRules;
///
/// let rules: ArrayRules = serde_json::from_str(r#"{"minItems": 1, "uniqueItems": true}"#).unwrap();
/// assert_eq!(rules.min_items, Some(1));
/// assert_eq!(rules.max_items, None);
/// assert!(rules.unique_items);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ArrayRules {
    /// Inclusive lower bound on the element count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    /// Inclusive upper bound on the element count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Reject arrays with repeated elements.
    pub unique_items: bool,
}

impl ArrayRules {
    /// Returns the inverted pair when both bounds are set and `min > max`.
    fn inverted_bounds(&self) -> Option<(usize, usize)> {
        match (self.min_items, self.max_items) {
            (Some(min), Some(max)) if min > max => Some((min, max)),
            _ => None,
        }
    }
}

// =============================================================================
// ArraySchema
// =============================================================================

/// Immutable validator for array-typed values.
///
/// # Examples
///
/// ```
/// use nebula_json_validator::foundation::{ErrorKind, Validate};
/// use nebula_json_validator::schema::ArraySchema;
/// use serde_json::json;
///
/// let schema = ArraySchema::builder().min_items(1).max_items(3).unique_items(true).build();
///
/// assert!(schema.validate(&json!([1, 2, 3])).is_ok());
///
/// let err = schema.validate(&json!([1, 1])).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DuplicateItems);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArraySchema {
    rules: ArrayRules,
}

impl ArraySchema {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> ArraySchemaBuilder {
        ArraySchemaBuilder::new()
    }

    /// Wraps an existing rule set without any checks.
    #[must_use]
    pub const fn new(rules: ArrayRules) -> Self {
        Self { rules }
    }

    /// The configured rules.
    #[must_use]
    pub const fn rules(&self) -> &ArrayRules {
        &self.rules
    }

    fn item_count(&self) -> ItemCount {
        ItemCount::new(self.rules.min_items, self.rules.max_items)
    }

    fn check_items(&self, items: &[Value]) -> Result<(), ValidationError> {
        self.item_count().validate(items)?;
        if self.rules.unique_items {
            UniqueItems.validate(items)?;
        }
        Ok(())
    }
}

impl From<ArrayRules> for ArraySchema {
    fn from(rules: ArrayRules) -> Self {
        Self::new(rules)
    }
}

impl Validate for ArraySchema {
    type Input = Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let result = as_array(input).and_then(|items| self.check_items(items));

        match &result {
            Ok(()) => tracing::trace!(
                items = input.as_array().map_or(0, Vec::len),
                "array schema passed"
            ),
            Err(error) => tracing::debug!(
                code = error.code(),
                reason = %error.message,
                "array schema rejected candidate"
            ),
        }

        result
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`ArraySchema`].
///
/// Setters replace earlier values; nothing is validated until
/// [`try_build`](Self::try_build) or, for [`build`](Self::build), until the
/// schema sees its first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArraySchemaBuilder {
    rules: ArrayRules,
}

impl ArraySchemaBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound on the element count
    #[must_use]
    pub fn min_items(mut self, min_items: usize) -> Self {
        self.rules.min_items = Some(min_items);
        self
    }

    /// Set the inclusive upper bound on the element count
    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.rules.max_items = Some(max_items);
        self
    }

    /// Set whether elements must be pairwise distinct
    #[must_use]
    pub fn unique_items(mut self, unique_items: bool) -> Self {
        self.rules.unique_items = unique_items;
        self
    }

    /// Build the schema.
    ///
    /// Accepts every configuration, including `min_items > max_items`; such a
    /// schema rejects every array.
    #[must_use]
    pub fn build(&self) -> ArraySchema {
        ArraySchema::new(self.rules)
    }

    /// Build the schema, rejecting bounds that no array can satisfy.
    pub fn try_build(&self) -> Result<ArraySchema, SchemaError> {
        if let Some((min, max)) = self.rules.inverted_bounds() {
            tracing::warn!(min, max, "rejecting array schema with inverted item bounds");
            return Err(SchemaError::InvertedBounds { min, max });
        }
        Ok(self.build())
    }
}

// =============================================================================
// Tests
// =============================================================================
