//! Built-in validators
//!
//! Slice-level validators for the array keywords. Each one checks a single
//! concern over `[Value]`; [`ArraySchema`](crate::schema::ArraySchema)
//! composes them in keyword order.
//!
//! # Examples
//!
//! ```
//! use nebula_json_validator::foundation::Validate;
//! use nebula_json_validator::validators::{ItemCount, unique_items};
//! use serde_json::json;
//!
//! let tags = json!(["a", "b"]);
//! assert!(ItemCount::between(1, 10).validate_any(&tags).is_ok());
//! assert!(unique_items().validate_any(&tags).is_ok());
//! ```

pub mod elements;
pub mod size;

pub use elements::{UniqueItems, unique_items};
pub use size::ItemCount;
