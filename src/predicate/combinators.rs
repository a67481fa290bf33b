//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and logical
//! combinators for composing predicates.

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use toi::predicate::*;
/// use toi::Value;
///
/// let short_string = is_string().and(str_len_max(3));
/// assert!(short_string.check(&Value::from("abc")));
/// assert!(!short_string.check(&Value::from("abcd")));
/// assert!(!short_string.check(&Value::from(1)));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// The right-hand predicate is only consulted when the left one holds, so
    /// it may assume whatever the left one checked.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{is_number, is_string, num_at_least, num_at_most};
    use crate::Value;

    #[test]
    fn test_and() {
        let p = num_at_least(0.0).and(num_at_most(10.0));
        assert!(p.check(&Value::from(5)));
        assert!(p.check(&Value::from(0)));
        assert!(!p.check(&Value::from(-1)));
        assert!(!p.check(&Value::from(11)));
    }

    #[test]
    fn test_or() {
        let p = is_string().or(is_number());
        assert!(p.check(&Value::from("a")));
        assert!(p.check(&Value::from(1)));
        assert!(!p.check(&Value::from(true)));
    }

    #[test]
    fn test_not() {
        let p = is_string().not();
        assert!(p.check(&Value::Null));
        assert!(!p.check(&Value::from("")));
    }

    #[test]
    fn test_complex_chain() {
        // not (number and 0 <= x <= 10) or string
        let p = is_number()
            .and(num_at_least(0.0))
            .and(num_at_most(10.0))
            .not()
            .or(is_string());
        assert!(p.check(&Value::from(50)));
        assert!(p.check(&Value::from("5")));
        assert!(!p.check(&Value::from(5)));
    }

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |v: &Value| v.as_f64().is_some_and(|n| n % 2.0 == 0.0);
        assert!(is_even.check(&Value::from(4)));
        assert!(!is_even.check(&Value::from(3)));

        let even_and_small = is_even.and(num_at_most(10.0));
        assert!(even_and_small.check(&Value::from(4)));
        assert!(!even_and_small.check(&Value::from(12)));
    }
}
