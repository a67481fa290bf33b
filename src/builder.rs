//! Building validators from predicates and mapping functions
//!
//! Nearly every primitive validator is one of two shapes:
//!
//! - [`allow`] checks membership without reshaping: the value comes back
//!   unchanged or the call fails.
//! - [`transform`] reshapes: the value comes back mapped.
//!
//! Both pass `Null` and `Undefined` straight through without calling the
//! predicate or mapping function. Whether a nullish value is acceptable is
//! decided elsewhere in the chain, by [`required`](crate::required) or
//! [`optional`](crate::optional).

use crate::error::Result;
use crate::predicate::Predicate;
use crate::validator::{reject, Validator};
use crate::value::Value;

/// Build a validator that passes values satisfying `predicate` and rejects
/// the rest with `failure` (or the override message, when one is set).
///
/// # Examples
///
/// ```
/// use toi::{allow, Value};
///
/// let positive = allow(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0), "value is not positive");
///
/// assert_eq!(positive.validate(Value::from(3)).unwrap(), Value::from(3));
/// assert_eq!(positive.validate(Value::from(-3)).unwrap_err().to_string(), "value is not positive");
/// assert_eq!(positive.validate(Value::Undefined).unwrap(), Value::Undefined);
/// ```
pub fn allow<P>(predicate: P, failure: impl Into<String>) -> Validator
where
    P: Predicate<Value> + 'static,
{
    named_allow("allow", predicate, failure)
}

/// [`allow`] with a diagnostic name.
pub fn named_allow<P>(name: impl Into<String>, predicate: P, failure: impl Into<String>) -> Validator
where
    P: Predicate<Value> + 'static,
{
    let failure = failure.into();
    Validator::wrap(name, move |value, message| {
        if value.is_nullish() || predicate.check(&value) {
            Ok(value)
        } else {
            Err(reject(message, failure.as_str(), value))
        }
    })
}

/// Build a validator that maps every non-nullish value through `mapper`.
///
/// `mapper` may itself reject the value; its error is returned as-is.
///
/// # Examples
///
/// ```
/// use toi::{transform, Value};
///
/// let double = transform(|v: Value| Ok(Value::from(v.to_number() * 2.0)));
///
/// assert_eq!(double.validate(Value::from(21)).unwrap(), Value::from(42));
/// assert_eq!(double.validate(Value::Null).unwrap(), Value::Null);
/// ```
pub fn transform<F>(mapper: F) -> Validator
where
    F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
{
    named_transform("transform", mapper)
}

/// [`transform`] with a diagnostic name.
pub fn named_transform<F>(name: impl Into<String>, mapper: F) -> Validator
where
    F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
{
    Validator::wrap(name, move |value, _| {
        if value.is_nullish() {
            Ok(value)
        } else {
            mapper(value)
        }
    })
}

/// Accept anything except `Null` and `Undefined`. Usually the head of a chain.
///
/// # Examples
///
/// ```
/// use toi::{required, Value};
///
/// assert!(required().validate(Value::from(0)).is_ok());
/// let err = required().validate(Value::Null).unwrap_err();
/// assert_eq!(err.to_string(), "value is null or undefined");
/// ```
pub fn required() -> Validator {
    Validator::wrap("required", |value, message| {
        if value.is_nullish() {
            Err(reject(message, "value is null or undefined", value))
        } else {
            Ok(value)
        }
    })
}

/// Accept every value, nullish included.
///
/// Marks a chain as nullable where nothing else needs checking at this point.
pub fn optional() -> Validator {
    Validator::wrap("optional", |value, _| Ok(value))
}
