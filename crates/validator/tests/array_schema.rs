//! Scenario tests for the `array` keyword schema.

use nebula_json_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn rules(min: Option<usize>, max: Option<usize>, unique: bool) -> ArraySchema {
    ArraySchema::new(ArrayRules {
        min_items: min,
        max_items: max,
        unique_items: unique,
    })
}

// ============================================================================
// KEYWORD SCENARIOS
// ============================================================================

#[rstest]
#[case::too_few(rules(Some(2), None, false), json!([1]), Some(ErrorKind::TooFewItems))]
#[case::too_many(rules(None, Some(2), false), json!([1, 2, 3]), Some(ErrorKind::TooManyItems))]
#[case::duplicate(rules(None, None, true), json!([1, 2, 2]), Some(ErrorKind::DuplicateItems))]
#[case::empty_unique(rules(None, None, true), json!([]), None)]
#[case::all_rules_pass(rules(Some(1), Some(3), true), json!([1, 2, 3]), None)]
#[case::not_an_array(rules(Some(1), None, false), json!("not an array"), Some(ErrorKind::TypeMismatch))]
#[case::exact_bounds(rules(Some(2), Some(2), false), json!([[], {}]), None)]
#[case::duplicates_allowed(rules(None, None, false), json!([1, 1, 1]), None)]
fn validates_keyword_scenarios(
    #[case] schema: ArraySchema,
    #[case] candidate: Value,
    #[case] expected: Option<ErrorKind>,
) {
    let outcome = schema.validate(&candidate).err().map(|e| e.kind());
    assert_eq!(outcome, expected);
}

#[rstest]
#[case(json!(null), "null")]
#[case(json!(false), "boolean")]
#[case(json!(0), "number")]
#[case(json!("[]"), "string")]
#[case(json!({"items": []}), "object")]
fn rejects_every_non_array(#[case] candidate: Value, #[case] actual: &str) {
    let schema = ArraySchema::builder().build();
    let err = schema.validate(&candidate).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.param("expected"), Some("array"));
    assert_eq!(err.param("actual"), Some(actual));
    assert_eq!(err.instance(), Some(candidate.to_string().as_str()));
}

// ============================================================================
// ERROR RENDERING
// ============================================================================

#[test]
fn too_few_items_message() {
    let err = rules(Some(2), None, false).validate(&json!([1])).unwrap_err();
    assert_eq!(err.message, "expected minimum item count: 2, found: 1");
    insta::assert_snapshot!(
        err.to_string(),
        @"min_items: expected minimum item count: 2, found: 1 (params: [min=2, actual=1])"
    );
}

#[test]
fn too_many_items_message_names_the_maximum() {
    let err = rules(Some(1), Some(2), false)
        .validate(&json!([1, 2, 3]))
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"max_items: expected maximum item count: 2, found: 3 (params: [max=2, actual=3])"
    );
}

#[test]
fn duplicate_items_message() {
    let err = rules(None, None, true)
        .validate(&json!(["x", {"a": 1, "b": 2}, {"b": 2, "a": 1}]))
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"unique_items: array items are not unique (params: [first_index=1, index=2])"
    );
}

#[test]
fn type_mismatch_message() {
    let err = rules(None, None, false).validate(&json!(42)).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"type_mismatch: expected type: array, found: number (params: [expected=array, actual=number])"
    );
}

// ============================================================================
// DISPATCH
// ============================================================================

/// A sibling keyword validator, standing in for the object/string variants
/// a dispatcher would hold next to the array schema.
struct NonNull;

impl Validate for NonNull {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if input.is_null() {
            Err(ValidationError::custom("value must not be null"))
        } else {
            Ok(())
        }
    }
}

#[test]
fn array_schema_dispatches_as_trait_object() {
    let array = ArraySchema::builder().max_items(1).build();
    let variants: [&dyn Validate<Input = Value>; 2] = [&array, &NonNull];

    let errors = validate_with_all(&json!([1, 2]), &variants).unwrap_err();
    let kinds: Vec<ErrorKind> = errors.errors().iter().map(ValidationError::kind).collect();
    assert_eq!(kinds, vec![ErrorKind::TooManyItems]);

    assert!(validate_with_any(&json!(null), &variants).is_err());
    assert!(validate_with_any(&json!("text"), &variants).is_ok());
}

#[test]
fn schema_is_reusable_across_threads() {
    let schema = std::sync::Arc::new(ArraySchema::builder().min_items(1).unique_items(true).build());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || schema.validate(&json!([i, i + 1])).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn rules_load_from_keyword_json() {
    let rules: ArrayRules =
        serde_json::from_value(json!({"minItems": 1, "maxItems": 3, "uniqueItems": true})).unwrap();
    let schema = ArraySchema::from(rules);

    assert_eq!(
        schema,
        ArraySchema::builder()
            .min_items(1)
            .max_items(3)
            .unique_items(true)
            .build()
    );
    assert!(schema.validate(&json!([1, 2, 3])).is_ok());
}

#[test]
fn strict_build_reports_inverted_bounds() {
    let err = ArraySchema::builder()
        .min_items(5)
        .max_items(2)
        .try_build()
        .unwrap_err();
    assert_eq!(err, SchemaError::InvertedBounds { min: 5, max: 2 });
}
