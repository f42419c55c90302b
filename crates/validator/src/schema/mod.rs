//! Keyword schemas
//!
//! A schema is a configured rule set for one JSON type keyword. Schemas are
//! built once, never mutated, and validate any number of candidate values
//! through [`Validate`](crate::foundation::Validate) with
//! `Input = serde_json::Value`. Sibling schemas for objects, strings and
//! numbers plug into the same contract from outside this crate.

pub mod array;

pub use array::{ArrayRules, ArraySchema, ArraySchemaBuilder};

use thiserror::Error;

/// Schema configuration errors.
///
/// Only raised by the strict construction paths; the plain builders accept
/// every configuration and defer problems to validation time.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// `minItems` is greater than `maxItems`, so no array can ever pass.
    #[error("minItems ({min}) is greater than maxItems ({max})")]
    InvertedBounds {
        /// The configured lower bound
        min: usize,
        /// The configured upper bound
        max: usize,
    },
}
