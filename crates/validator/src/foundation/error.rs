//! Error types for validation failures
//!
//! A validation failure is data, not an exceptional condition: every keyword
//! validator returns at most one [`ValidationError`], carrying a stable
//! [`ErrorKind`], a human-readable message and a short list of parameters
//! that an external aggregation layer can render or translate.
//!
//! Message and parameter strings use `Cow<'static, str>` so static messages
//! never allocate.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Ordered key/value parameters attached to an error (typically 0-3).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of reasons an array keyword validation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The candidate is not of the expected JSON type.
    TypeMismatch,
    /// The array has fewer elements than `minItems`.
    TooFewItems,
    /// The array has more elements than `maxItems`.
    TooManyItems,
    /// `uniqueItems` is set and two elements share a canonical form.
    DuplicateItems,
    /// Raised by validators outside the array keyword family.
    Custom,
}

impl ErrorKind {
    /// Stable machine-readable code, named after the JSON Schema keyword.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::TooFewItems => "min_items",
            Self::TooManyItems => "max_items",
            Self::DuplicateItems => "unique_items",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single, terminal validation failure.
///
/// # Examples
///
/// ```
/// use nebula_json_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::too_few_items(2, 1);
/// assert_eq!(error.kind(), ErrorKind::TooFewItems);
/// assert_eq!(error.message, "expected minimum item count: 2, found: 1");
/// assert_eq!(error.param("min"), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Parameters for the error message template.
    ///
    /// Example: `[("min", "2"), ("actual", "1")]`
    pub params: ErrorParams,

    /// JSON text of the rejected candidate, kept for type mismatches only.
    instance: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            params: SmallVec::new(),
            instance: None,
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attaches the JSON text of the offending candidate.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// The failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Machine-readable code, shorthand for `self.kind().code()`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The rejected candidate, rendered as JSON text.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.code(), self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new(
            ErrorKind::TypeMismatch,
            format!("expected type: {expected}, found: {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// Creates a "min_items" error.
    pub fn too_few_items(min: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::TooFewItems,
            format!("expected minimum item count: {min}, found: {actual}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_items" error.
    pub fn too_many_items(max: usize, actual: usize) -> Self {
        Self::new(
            ErrorKind::TooManyItems,
            format!("expected maximum item count: {max}, found: {actual}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "unique_items" error naming the repeated element and its
    /// earlier occurrence.
    pub fn duplicate_items(first_index: usize, index: usize) -> Self {
        Self::new(ErrorKind::DuplicateItems, "array items are not unique")
            .with_param("first_index", first_index.to_string())
            .with_param("index", index.to_string())
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Custom, message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
///
/// The array validator itself is fail-fast; this type exists for the
/// dispatch layer that runs several keyword validators over one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
