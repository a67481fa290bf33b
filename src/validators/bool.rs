//! Boolean validators

use crate::builder::{named_allow, named_transform};
use crate::predicate::is_bool;
use crate::validator::Validator;
use crate::value::Value;

/// Accept only booleans. No coercion: see [`truthy`] and [`falsy`] for that.
pub fn is() -> Validator {
    named_allow("bool.is", is_bool(), "value is not a boolean")
}

/// Accept only `true`.
pub fn truth() -> Validator {
    named_allow(
        "bool.truth",
        |v: &Value| matches!(v, Value::Bool(true)),
        "value is not true",
    )
}

/// Accept only `false`.
pub fn falseness() -> Validator {
    named_allow(
        "bool.falseness",
        |v: &Value| matches!(v, Value::Bool(false)),
        "value is not false",
    )
}

/// Coerce any value to its truthiness.
pub fn truthy() -> Validator {
    named_transform("bool.truthy", |v| Ok(Value::Bool(v.is_truthy())))
}

/// Coerce any value to the negation of its truthiness.
pub fn falsy() -> Validator {
    named_transform("bool.falsy", |v| Ok(Value::Bool(!v.is_truthy())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_invalid, assert_transforms, assert_valid, bag, list};

    #[test]
    fn test_is() {
        assert_valid!(is(), [Value::from(true), Value::from(false)]);
        assert_invalid!(is(), [Value::from(0), Value::from("true"), bag! {}]);
    }

    #[test]
    fn test_truth_and_falseness() {
        assert_valid!(truth(), [Value::from(true)]);
        assert_invalid!(truth(), [Value::from(false), Value::from(1)]);
        assert_valid!(falseness(), [Value::from(false)]);
        assert_invalid!(falseness(), [Value::from(true), Value::from(0), Value::from("")]);
    }

    #[test]
    fn test_truthy() {
        assert_transforms!(truthy(), [
            Value::from(1) => Value::from(true),
            Value::from("") => Value::from(false),
            Value::from(f64::NAN) => Value::from(false),
            list![] => Value::from(true),
        ]);
    }

    #[test]
    fn test_falsy() {
        assert_transforms!(falsy(), [
            Value::from(0) => Value::from(true),
            Value::from("x") => Value::from(false),
            bag! {} => Value::from(false),
        ]);
    }
}
