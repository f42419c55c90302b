//! AsValidatable trait with GAT for universal type conversion
//!
//! Validators declare the exact input they check (`[Value]` for the item
//! validators). `AsValidatable` lets callers hand them a broader type, such
//! as an arbitrary `serde_json::Value`, and turns a structural mismatch into
//! a `type_mismatch` error.

use crate::foundation::ValidationError;
use serde_json::Value;
use std::borrow::Borrow;
use std::fmt;

// ============================================================================
// JSON TYPE MARKERS
// ============================================================================

/// The six primitive JSON types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// Any JSON number, integer or not
    Number,
    /// A JSON string
    String,
    /// An ordered sequence of values
    Array,
    /// A map from string keys to values
    Object,
}

impl JsonType {
    /// Returns the type marker of a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lowercase name, as written in a schema's `type` keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses GAT to allow returning either borrowed reference or owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

// ============================================================================
// REFLEXIVE IMPLEMENTATIONS
// ============================================================================

impl AsValidatable<Value> for Value {
    type Output<'a>
        = &'a Value
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&Value, ValidationError> {
        Ok(self)
    }
}

impl<T> AsValidatable<[T]> for [T] {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self)
    }
}

impl<T> AsValidatable<[T]> for Vec<T> {
    type Output<'a>
        = &'a [T]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[T], ValidationError> {
        Ok(self.as_slice())
    }
}

// ============================================================================
// SERDE JSON VALUE CONVERSIONS
// ============================================================================

/// Borrows the elements of a JSON array, or reports what was found instead.
///
/// The error carries the expected and actual type markers plus the
/// candidate's JSON text.
pub fn as_array(value: &Value) -> Result<&[Value], ValidationError> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(
            ValidationError::type_mismatch(JsonType::Array.as_str(), JsonType::of(other).as_str())
                .with_instance(other.to_string()),
        ),
    }
}

impl AsValidatable<[Value]> for Value {
    type Output<'a>
        = &'a [Value]
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&[Value], ValidationError> {
        as_array(self)
    }
}
