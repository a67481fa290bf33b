//! List and membership predicates

use super::combinators::Predicate;
use crate::Value;

/// Predicate that checks the item count of a list is in range.
#[derive(Clone, Copy, Debug)]
pub struct ItemCount {
    min: usize,
    max: usize,
}

impl Predicate<Value> for ItemCount {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        value
            .as_array()
            .is_some_and(|items| items.len() >= self.min && items.len() <= self.max)
    }
}

/// Create a predicate that checks if a list has between min and max items (inclusive).
pub fn items_between(min: usize, max: usize) -> ItemCount {
    ItemCount { min, max }
}

/// Create a predicate that checks if a list has at least min items.
pub fn items_min(min: usize) -> ItemCount {
    ItemCount {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if a list has at most max items.
pub fn items_max(max: usize) -> ItemCount {
    ItemCount { min: 0, max }
}

/// Predicate that checks membership in a fixed set, by strict equality.
#[derive(Clone, Debug)]
pub struct OneOf(pub Vec<Value>);

impl Predicate<Value> for OneOf {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.iter().any(|candidate| candidate.strict_eq(value))
    }
}

/// Create a predicate that checks if a value is one of `values`.
///
/// # Example
///
/// ```rust
/// use toi::predicate::*;
/// use toi::Value;
///
/// let p = one_of([Value::from("a"), Value::from(1)]);
/// assert!(p.check(&Value::from(1)));
/// assert!(!p.check(&Value::from("1")));
/// ```
pub fn one_of(values: impl IntoIterator<Item = Value>) -> OneOf {
    OneOf(values.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_item_count() {
        assert!(items_min(1).check(&list![1]));
        assert!(!items_min(1).check(&list![]));
        assert!(items_max(1).check(&list![]));
        assert!(!items_max(1).check(&list![1, 2]));
        assert!(items_between(1, 2).check(&list![1, 2]));
        assert!(!items_between(1, 2).check(&Value::from("ab")));
    }

    #[test]
    fn test_one_of_uses_strict_equality() {
        let shared = list![1];
        let p = one_of([shared.clone(), Value::from(f64::NAN)]);
        assert!(p.check(&shared));
        assert!(!p.check(&list![1]));
        assert!(!p.check(&Value::from(f64::NAN)));
    }
}
