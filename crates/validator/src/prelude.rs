//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_json_validator::prelude::*;` import that
//! brings in the validation contract, the error types and the array schema.

// ============================================================================
// FOUNDATION: Core traits, errors
// ============================================================================

pub use crate::foundation::{
    AsValidatable, ErrorKind, JsonType, Validate, ValidationError, ValidationErrors,
    validate_with_all, validate_with_any,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{ItemCount, UniqueItems, unique_items};

// ============================================================================
// SCHEMA
// ============================================================================

pub use crate::schema::{ArrayRules, ArraySchema, ArraySchemaBuilder, SchemaError};
