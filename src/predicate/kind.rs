//! Variant predicates
//!
//! Each predicate holds for exactly the [`Value`] variants it names.

use super::combinators::Predicate;
use crate::Value;

/// Predicate that checks for a `Bool`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBool;

impl Predicate<Value> for IsBool {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }
}

/// Create a predicate that checks for a `Bool`.
pub fn is_bool() -> IsBool {
    IsBool
}

/// Predicate that checks for a `Number`, optionally admitting `NaN`.
#[derive(Clone, Copy, Debug)]
pub struct IsNumber {
    allow_nan: bool,
}

impl Predicate<Value> for IsNumber {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        match value {
            Value::Number(n) => self.allow_nan || !n.is_nan(),
            _ => false,
        }
    }
}

/// Create a predicate that checks for a number other than `NaN`.
///
/// # Example
///
/// ```rust
/// use toi::predicate::*;
/// use toi::Value;
///
/// assert!(is_number().check(&Value::from(1.5)));
/// assert!(!is_number().check(&Value::from(f64::NAN)));
/// assert!(is_number_type().check(&Value::from(f64::NAN)));
/// ```
pub fn is_number() -> IsNumber {
    IsNumber { allow_nan: false }
}

/// Create a predicate that checks for any number, `NaN` included.
pub fn is_number_type() -> IsNumber {
    IsNumber { allow_nan: true }
}

/// Predicate that checks for a `String`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsString;

impl Predicate<Value> for IsString {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        matches!(value, Value::String(_))
    }
}

/// Create a predicate that checks for a `String`.
pub fn is_string() -> IsString {
    IsString
}

/// Predicate that checks for an `Array`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsArray;

impl Predicate<Value> for IsArray {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        matches!(value, Value::Array(_))
    }
}

/// Create a predicate that checks for an `Array`.
pub fn is_array() -> IsArray {
    IsArray
}

/// Predicate that checks for a bag or a list. Lists count as objects.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsObject;

impl Predicate<Value> for IsObject {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        matches!(value, Value::Object(_) | Value::Array(_))
    }
}

/// Create a predicate that checks for a bag or a list.
pub fn is_object() -> IsObject {
    IsObject
}

/// Predicate that checks for a plain bag: no fallback chain, no `__proto__`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsPlainBag;

impl Predicate<Value> for IsPlainBag {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_bag().is_some_and(|bag| bag.is_plain())
    }
}

/// Create a predicate that checks for a plain bag.
pub fn is_plain_bag() -> IsPlainBag {
    IsPlainBag
}
