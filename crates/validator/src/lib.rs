//! # nebula-json-validator
//!
//! The `array` keyword of a JSON Schema validator: `minItems`, `maxItems`
//! and `uniqueItems`, applied to `serde_json::Value` candidates.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_json_validator::prelude::*;
//! use serde_json::json;
//!
//! let tags = ArraySchema::builder().min_items(1).max_items(3).unique_items(true).build();
//!
//! assert!(tags.validate(&json!(["a", "b"])).is_ok());
//!
//! let err = tags.validate(&json!([])).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::TooFewItems);
//! assert_eq!(err.message, "expected minimum item count: 1, found: 0");
//! ```
//!
//! ## Semantics
//!
//! Validation is fail-fast: the type check, then the item count, then
//! uniqueness, and the first failure is returned. Uniqueness compares the
//! [canonical](canonical) JSON text of the elements.
//!
//! ## Building Blocks
//!
//! - **Schema**: [`ArraySchema`](schema::ArraySchema), built with
//!   [`ArraySchemaBuilder`](schema::ArraySchemaBuilder)
//! - **Validators**: [`ItemCount`](validators::ItemCount),
//!   [`UniqueItems`](validators::UniqueItems) over `[Value]`
//! - **Foundation**: [`Validate`](foundation::Validate),
//!   [`ValidationError`](foundation::ValidationError)

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod canonical;
pub mod foundation;
pub mod prelude;
pub mod schema;
pub mod validators;
