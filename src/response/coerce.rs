// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lenient scalar coercion for nested JSON fields.
//!
//! The state service is loose about scalar types (numbers sometimes arrive
//! as strings, pins as `0`/`1`), so each field is looked up by path and
//! coerced to the type the mirror expects.

use serde_json::Value;

use crate::error::ParseError;

/// Looks up a nested field by path.
pub(crate) fn lookup<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value, ParseError> {
    path.iter()
        .try_fold(root, |value, key| value.get(key))
        .ok_or_else(|| ParseError::MissingField(path.join(".")))
}

fn invalid(path: &[&str], message: impl Into<String>) -> ParseError {
    ParseError::InvalidValue {
        field: path.join("."),
        message: message.into(),
    }
}

/// Integer: integers, floats (truncated), numeric strings and booleans.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn int(root: &Value, path: &[&str]) -> Result<i64, ParseError> {
    match lookup(root, path)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < 9.2e18)
                    .map(|f| f.trunc() as i64)
            })
            .ok_or_else(|| invalid(path, format!("{n} does not fit an integer"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|e| invalid(path, format!("{s:?} is not an integer: {e}"))),
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(invalid(path, format!("expected integer, got {other}"))),
    }
}

/// Float: any number, numeric strings and booleans.
pub(crate) fn float(root: &Value, path: &[&str]) -> Result<f64, ParseError> {
    match lookup(root, path)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| invalid(path, format!("{n} is not a float"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|e| invalid(path, format!("{s:?} is not a float: {e}"))),
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        other => Err(invalid(path, format!("expected float, got {other}"))),
    }
}

/// String: strings as-is, numbers and booleans as their JSON text, null as empty.
pub(crate) fn string(root: &Value, path: &[&str]) -> Result<String, ParseError> {
    match lookup(root, path)? {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        v @ (Value::Number(_) | Value::Bool(_)) => Ok(v.to_string()),
        other => Err(invalid(path, format!("expected string, got {other}"))),
    }
}

/// Boolean by truthiness: zero, empty and null are false.
pub(crate) fn boolean(root: &Value, path: &[&str]) -> Result<bool, ParseError> {
    Ok(match lookup(root, path)? {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lookup_reports_full_path() {
        let root = json!({"job": {}});
        let err = lookup(&root, &["job", "mode"]).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref p) if p == "job.mode"));
    }

    #[test]
    fn int_accepts_loose_forms() {
        let root = json!({"a": 3600, "b": "42", "c": 12.9, "d": true});
        assert_eq!(int(&root, &["a"]).unwrap(), 3600);
        assert_eq!(int(&root, &["b"]).unwrap(), 42);
        assert_eq!(int(&root, &["c"]).unwrap(), 12);
        assert_eq!(int(&root, &["d"]).unwrap(), 1);
    }

    #[test]
    fn int_rejects_garbage() {
        let root = json!({"a": "soon", "b": [1]});
        assert!(matches!(
            int(&root, &["a"]),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            int(&root, &["b"]),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn float_accepts_numbers_and_strings() {
        let root = json!({"a": 60, "b": "57.5"});
        assert!((float(&root, &["a"]).unwrap() - 60.0).abs() < f64::EPSILON);
        assert!((float(&root, &["b"]).unwrap() - 57.5).abs() < f64::EPSILON);
    }

    #[test]
    fn string_renders_scalars() {
        let root = json!({"a": "C", "b": 7, "c": null});
        assert_eq!(string(&root, &["a"]).unwrap(), "C");
        assert_eq!(string(&root, &["b"]).unwrap(), "7");
        assert_eq!(string(&root, &["c"]).unwrap(), "");
    }

    #[test]
    fn boolean_uses_truthiness() {
        let root = json!({"t": true, "one": 1, "zero": 0, "s": "x", "empty": "", "n": null});
        assert!(boolean(&root, &["t"]).unwrap());
        assert!(boolean(&root, &["one"]).unwrap());
        assert!(!boolean(&root, &["zero"]).unwrap());
        assert!(boolean(&root, &["s"]).unwrap());
        assert!(!boolean(&root, &["empty"]).unwrap());
        assert!(!boolean(&root, &["n"]).unwrap());
    }
}
