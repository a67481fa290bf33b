//! Number predicates
//!
//! These hold only for `Number` values; comparisons with `NaN` are false.

use super::combinators::Predicate;
use crate::Value;

/// Predicate for an inclusive lower bound.
#[derive(Clone, Copy, Debug)]
pub struct AtLeast(pub f64);

impl Predicate<Value> for AtLeast {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_f64().is_some_and(|n| n >= self.0)
    }
}

/// Create a predicate that checks if a number is at least `min`.
///
/// # Example
///
/// ```rust
/// use toi::predicate::*;
/// use toi::Value;
///
/// assert!(num_at_least(5.0).check(&Value::from(5)));
/// assert!(!num_at_least(5.0).check(&Value::from(4.9)));
/// assert!(!num_at_least(5.0).check(&Value::from("6")));
/// ```
pub fn num_at_least(min: f64) -> AtLeast {
    AtLeast(min)
}

/// Predicate for an inclusive upper bound.
#[derive(Clone, Copy, Debug)]
pub struct AtMost(pub f64);

impl Predicate<Value> for AtMost {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_f64().is_some_and(|n| n <= self.0)
    }
}

/// Create a predicate that checks if a number is at most `max`.
pub fn num_at_most(max: f64) -> AtMost {
    AtMost(max)
}

/// Predicate for finite, integral numbers.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsInteger;

impl Predicate<Value> for IsInteger {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value
            .as_f64()
            .is_some_and(|n| n.is_finite() && n.trunc() == n)
    }
}

/// Create a predicate that checks for an integral number.
pub fn is_integer() -> IsInteger {
    IsInteger
}
