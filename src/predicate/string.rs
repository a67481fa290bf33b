//! String predicates
//!
//! These hold only for `String` values. Lengths are counted in characters.

use regex::Regex;

use super::combinators::Predicate;
use crate::Value;

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<Value> for NotEmpty {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| !s.is_empty())
    }
}

/// Create a predicate that checks if a string is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks string length is in range.
#[derive(Clone, Copy, Debug)]
pub struct StrLen {
    min: usize,
    max: usize,
}

impl Predicate<Value> for StrLen {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| {
            let len = s.chars().count();
            len >= self.min && len <= self.max
        })
    }
}

/// Create a predicate that checks if string length is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use toi::predicate::*;
/// use toi::Value;
///
/// let p = str_len_between(3, 5);
/// assert!(!p.check(&Value::from("ab")));
/// assert!(p.check(&Value::from("abc")));
/// assert!(p.check(&Value::from("héllo")));
/// assert!(!p.check(&Value::from("toolong")));
/// ```
pub fn str_len_between(min: usize, max: usize) -> StrLen {
    StrLen { min, max }
}

/// Create a predicate that checks if string length is at least min.
pub fn str_len_min(min: usize) -> StrLen {
    StrLen {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
pub fn str_len_max(max: usize) -> StrLen {
    StrLen { min: 0, max }
}

/// Predicate that checks a string against a regular expression.
#[derive(Clone, Debug)]
pub struct Matches(pub Regex);

impl Predicate<Value> for Matches {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| self.0.is_match(s))
    }
}

/// Create a predicate that checks if a string matches `pattern` anywhere.
pub fn matches(pattern: Regex) -> Matches {
    Matches(pattern)
}

/// Predicate that checks a string is exactly equal to a fixed string.
#[derive(Clone, Debug)]
pub struct StrEquals(pub String);

impl Predicate<Value> for StrEquals {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value.as_str() == Some(self.0.as_str())
    }
}

/// Create a predicate that checks for string equality.
pub fn str_equals(test: impl Into<String>) -> StrEquals {
    StrEquals(test.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().check(&Value::from("a")));
        assert!(!not_empty().check(&Value::from("")));
        assert!(!not_empty().check(&Value::from(1)));
    }

    #[test]
    fn test_len_bounds() {
        assert!(str_len_min(2).check(&Value::from("ab")));
        assert!(!str_len_min(2).check(&Value::from("a")));
        assert!(str_len_max(2).check(&Value::from("")));
        assert!(!str_len_max(2).check(&Value::from("abc")));
        assert!(!str_len_max(2).check(&Value::from(1)));
    }

    #[test]
    fn test_matches() {
        let p = matches(Regex::new("^[a-z]+$").unwrap());
        assert!(p.check(&Value::from("abc")));
        assert!(!p.check(&Value::from("abc1")));
        assert!(!p.check(&Value::Null));
    }

    #[test]
    fn test_str_equals() {
        assert!(str_equals("yes").check(&Value::from("yes")));
        assert!(!str_equals("yes").check(&Value::from("Yes")));
    }
}
