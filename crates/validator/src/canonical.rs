//! Canonical textual representation of JSON values.
//!
//! Two values are treated as equal by `uniqueItems` iff their canonical
//! forms are identical. Object members are emitted in ascending key order
//! so the result does not depend on the map's iteration order; numbers and
//! strings are emitted exactly as `serde_json` writes them, which keeps `1`
//! and `1.0` distinct.

use serde_json::Value;

/// Renders `value` in canonical form as UTF-8 bytes.
///
/// This is the form the uniqueness check compares; it avoids the UTF-8
/// round trip of [`to_canonical_string`].
#[must_use]
pub fn to_canonical_bytes(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_canonical(&mut out, value);
    out
}

/// Renders `value` in canonical form.
///
/// # Examples
///
/// ```
/// use nebula_json_validator::canonical::to_canonical_string;
/// use serde_json::json;
///
/// assert_eq!(to_canonical_string(&json!({"b": 1, "a": [true, null]})), r#"{"a":[true,null],"b":1}"#);
/// ```
#[must_use]
pub fn to_canonical_string(value: &Value) -> String {
    match String::from_utf8(to_canonical_bytes(value)) {
        Ok(text) => text,
        // serde_json only emits UTF-8, so this arm is never taken.
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

fn write_canonical(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(b) => out.extend_from_slice(if *b { &b"true"[..] } else { &b"false"[..] }),
        Value::Number(n) => write_json(out, n),
        Value::String(s) => write_json(out, s.as_str()),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(out, item);
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut members: Vec<(&String, &Value)> = map.iter().collect();
            members.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

            out.push(b'{');
            for (i, (key, item)) in members.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_json(out, key.as_str());
                out.push(b':');
                write_canonical(out, item);
            }
            out.push(b'}');
        }
    }
}

/// Serializes a scalar straight into the buffer.
fn write_json<T: serde::Serialize + ?Sized>(out: &mut Vec<u8>, scalar: &T) {
    // Writing a number or string into a Vec cannot fail.
    let _ = serde_json::to_writer(&mut *out, scalar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    #[test]
    fn scalars_match_serde_json() {
        for value in [json!(null), json!(true), json!(-3), json!(2.5), json!("a\"b\n")] {
            assert_eq!(to_canonical_string(&value), value.to_string());
        }
    }

    #[test]
    fn bytes_and_string_agree() {
        let value = json!({"k": ["é", 1, {"z": null}]});
        assert_eq!(to_canonical_bytes(&value), to_canonical_string(&value).into_bytes());
    }

    #[test]
    fn integer_and_float_spellings_differ() {
        assert_ne!(to_canonical_string(&json!(1)), to_canonical_string(&json!(1.0)));
    }

    #[test]
    fn object_keys_are_sorted_at_every_level() {
        let value = json!({"z": {"y": 1, "x": 2}, "a": []});
        assert_eq!(to_canonical_string(&value), r#"{"a":[],"z":{"x":2,"y":1}}"#);
    }

    #[test]
    fn insertion_order_does_not_leak_into_canonical_form() {
        // Tests build serde_json with `preserve_order`, so the map keeps "b" first.
        let mut reversed = Map::new();
        reversed.insert("b".to_owned(), json!(2));
        reversed.insert("a".to_owned(), json!(1));
        let reversed = Value::Object(reversed);
        assert_eq!(reversed.to_string(), r#"{"b":2,"a":1}"#);

        let sorted = json!({"a": 1, "b": 2});
        assert_eq!(to_canonical_string(&reversed), r#"{"a":1,"b":2}"#);
        assert_eq!(to_canonical_bytes(&reversed), to_canonical_bytes(&sorted));
    }

    #[test]
    fn array_order_is_significant() {
        assert_ne!(to_canonical_string(&json!([1, 2])), to_canonical_string(&json!([2, 1])));
    }

    #[test]
    fn string_is_not_confused_with_its_contents() {
        assert_ne!(to_canonical_string(&json!("1")), to_canonical_string(&json!(1)));
    }
}
