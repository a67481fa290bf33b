//! Validators that accept values of any variant

use crate::builder::{named_allow, named_transform};
use crate::predicate::one_of;
use crate::validator::Validator;
use crate::value::Value;

/// Identity. Accepts every value unchanged.
pub fn is() -> Validator {
    named_transform("any.is", Ok)
}

/// Accept only values strictly equal to one of `values`.
///
/// # Examples
///
/// ```
/// use toi::validators::any;
/// use toi::Value;
///
/// let role = any::only(["admin", "member"]);
/// assert!(role.validate(Value::from("admin")).is_ok());
///
/// let err = role.validate(Value::from("root")).unwrap_err();
/// assert_eq!(err.to_string(), "value is not one of admin, member");
/// ```
pub fn only<V, I>(values: I) -> Validator
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    let listed = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    named_allow(
        "any.only",
        one_of(values),
        format!("value is not one of {listed}"),
    )
}

/// Alias of [`only`].
pub fn values<V, I>(values: I) -> Validator
where
    V: Into<Value>,
    I: IntoIterator<Item = V>,
{
    only(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_invalid, assert_valid, bag, list};

    #[test]
    fn test_is_accepts_everything_unchanged() {
        let shared = bag! { "a" => 1 };
        let out = is().validate(shared.clone()).unwrap();
        assert!(out.strict_eq(&shared));
        assert_valid!(is(), [Value::Null, Value::Undefined, Value::from(f64::NAN), list![]]);
    }

    #[test]
    fn test_only() {
        assert_valid!(only([1, 2, 3]), [Value::from(1), Value::from(3)]);
        assert_invalid!(only([1, 2, 3]), [Value::from(0), Value::from("1"), list![1]]);
    }

    #[test]
    fn test_only_mixed_literals() {
        let v = values([Value::from("a"), Value::from(true), Value::Null]);
        assert_valid!(v, [Value::from("a"), Value::from(true)]);
        assert_invalid!(v, [Value::from("b"), Value::from(false)]);
    }

    #[test]
    fn test_only_message_lists_values() {
        let err = only([1.5, 2.0]).validate(Value::from(0)).unwrap_err();
        assert_eq!(err.to_string(), "value is not one of 1.5, 2");
    }
}
