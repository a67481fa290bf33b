//! Validation failures as error trees
//!
//! A failing validator produces one [`ValidationError`]. Aggregating validators
//! (`obj::keys`, `array::items`, `obj::and`, `str::password`) attach the errors
//! of their children as [`Reasons`], so the error mirrors the shape of the
//! input: list reasons for list contexts, field reasons for bag contexts.
//!
//! Validators return [`Error`], which separates the two ways a call can go
//! wrong. [`Error::Invalid`] is an ordinary rejection and is collected by
//! aggregating validators. [`Error::Fault`] is a bug in caller-supplied code
//! and is never collected: it aborts the whole validation.
//!
//! # Examples
//!
//! ```
//! use toi::{Reasons, ValidationError, Value};
//!
//! let inner = ValidationError::new("value is not string", Value::from(0));
//! let err = ValidationError::new("value does not match structure", Value::Null)
//!     .with_reasons(Reasons::fields([("name", inner)]));
//!
//! assert_eq!(err.reason_for("name").map(|e| e.text()), Some("value is not string"));
//! assert_eq!(err.leaves()[0].0, "name");
//! ```

use std::error::Error as StdError;
use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::value::Value;

/// A node in a validation error tree.
///
/// A leaf has no reasons. An aggregate carries child errors keyed by list
/// position or by field name; each child is itself a full tree.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{text}")]
pub struct ValidationError {
    text: String,
    value: Value,
    reasons: Option<Reasons>,
    index: Option<usize>,
    field: Option<String>,
}

/// Nested detail of an aggregate [`ValidationError`].
#[derive(Debug, Clone, PartialEq)]
pub enum Reasons {
    /// Child errors in list order. Children produced by `array::items` carry
    /// the index of the failing item.
    Items(Vec<ValidationError>),
    /// Child errors keyed by field name, in the order they were found.
    Fields(IndexMap<String, ValidationError>),
}

impl Reasons {
    /// Build field reasons from `(name, error)` pairs.
    pub fn fields<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ValidationError)>,
    {
        Reasons::Fields(entries.into_iter().map(|(k, e)| (k.into(), e)).collect())
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        match self {
            Reasons::Items(items) => items.len(),
            Reasons::Fields(fields) => fields.len(),
        }
    }

    /// Whether there are no direct children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Direct children, in order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &ValidationError> + '_> {
        match self {
            Reasons::Items(items) => Box::new(items.iter()),
            Reasons::Fields(fields) => Box::new(fields.values()),
        }
    }
}

impl ValidationError {
    /// Create a leaf error for the offending `value`.
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        ValidationError {
            text: text.into(),
            value: value.into(),
            reasons: None,
            index: None,
            field: None,
        }
    }

    /// Attach nested reasons, turning this into an aggregate.
    pub fn with_reasons(mut self, reasons: Reasons) -> Self {
        self.reasons = Some(reasons);
        self
    }

    /// Mark this error as describing the list item at `index`.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Associate this error with a field name.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Human-readable message.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The offending input.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Nested detail, absent on leaves.
    pub fn reasons(&self) -> Option<&Reasons> {
        self.reasons.as_ref()
    }

    /// Position of the failing list item, when this error describes one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Associated field name, when this error describes one.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Whether this error has no nested reasons.
    pub fn is_leaf(&self) -> bool {
        self.reasons.is_none()
    }

    /// The field reason for `field`, if this is a field aggregate.
    pub fn reason_for(&self, field: &str) -> Option<&ValidationError> {
        match &self.reasons {
            Some(Reasons::Fields(fields)) => fields.get(field),
            _ => None,
        }
    }

    /// The list reason at `position` (not item index), if this is a list
    /// aggregate.
    pub fn reason_at(&self, position: usize) -> Option<&ValidationError> {
        match &self.reasons {
            Some(Reasons::Items(items)) => items.get(position),
            _ => None,
        }
    }

    /// Every leaf of the tree with a path to it.
    ///
    /// Paths join field names with `.` and render item indices as `[i]`. A
    /// child without an index (such as a password rule) shares its parent's
    /// path. The root's own path is the empty string.
    pub fn leaves(&self) -> Vec<(String, &ValidationError)> {
        let mut out = Vec::new();
        self.walk(|path, err| {
            if err.is_leaf() {
                out.push((path.to_owned(), err));
            }
        });
        out
    }

    /// Visit every node of the tree depth-first, parents before children,
    /// with the same paths as [`leaves`](Self::leaves).
    ///
    /// ```
    /// use toi::{Reasons, ValidationError, Value};
    ///
    /// let err = ValidationError::new("value is an array of invalid items", Value::Null)
    ///     .with_reasons(Reasons::Items(vec![
    ///         ValidationError::new("value is not a number", "x").with_index(1),
    ///     ]));
    ///
    /// let mut seen = Vec::new();
    /// err.walk(|path, e| seen.push(format!("{path}: {}", e.text())));
    /// assert_eq!(seen, [": value is an array of invalid items", "[1]: value is not a number"]);
    /// ```
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&str, &'a ValidationError),
    {
        self.walk_from(String::new(), &mut visit);
    }

    fn walk_from<'a, F>(&'a self, path: String, visit: &mut F)
    where
        F: FnMut(&str, &'a ValidationError),
    {
        visit(&path, self);
        match &self.reasons {
            None => {}
            Some(Reasons::Items(items)) => {
                for child in items {
                    let child_path = match child.index {
                        Some(i) => format!("{path}[{i}]"),
                        None => path.clone(),
                    };
                    child.walk_from(child_path, visit);
                }
            }
            Some(Reasons::Fields(fields)) => {
                for (name, child) in fields {
                    let child_path = if path.is_empty() {
                        name.clone()
                    } else {
                        format!("{path}.{name}")
                    };
                    child.walk_from(child_path, visit);
                }
            }
        }
    }
}

/// A fault raised by caller-supplied code, as opposed to a rejected value.
///
/// Faults pass through every aggregating validator untouched.
#[derive(Debug)]
pub struct Fault(Box<dyn StdError + Send + Sync + 'static>);

impl Fault {
    /// Wrap any error (or message) as a fault.
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Fault(error.into())
    }

    /// Borrow the underlying error as a concrete type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Consume and return the underlying error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Error returned by every validator call.
#[derive(Debug, Error)]
pub enum Error {
    /// The value was rejected.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Caller-supplied code failed; validation was aborted.
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl Error {
    /// Shorthand for `Error::Fault(Fault::new(error))`.
    pub fn fault(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Error::Fault(Fault::new(error))
    }

    /// Whether this is a rejection rather than a fault.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Error::Invalid(_))
    }

    /// The rejection, if this is one.
    pub fn as_invalid(&self) -> Option<&ValidationError> {
        match self {
            Error::Invalid(e) => Some(e),
            Error::Fault(_) => None,
        }
    }

    /// The rejection, if this is one.
    pub fn into_invalid(self) -> Option<ValidationError> {
        match self {
            Error::Invalid(e) => Some(e),
            Error::Fault(_) => None,
        }
    }

    /// The fault, if this is one.
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Error::Fault(f) => Some(f),
            Error::Invalid(_) => None,
        }
    }
}

/// Result of a validator call.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    fn leaf(text: &str) -> ValidationError {
        ValidationError::new(text, Value::Undefined)
    }

    #[test]
    fn test_leaf_accessors() {
        let err = ValidationError::new("value is not string", 5);
        assert_eq!(err.text(), "value is not string");
        assert_eq!(err.value(), &Value::from(5));
        assert!(err.is_leaf());
        assert_eq!(err.index(), None);
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "value is not string");
    }

    #[test]
    fn test_builders() {
        let err = leaf("x").with_index(3).with_field("name");
        assert_eq!(err.index(), Some(3));
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_reason_lookup() {
        let fields = leaf("top").with_reasons(Reasons::fields([("a", leaf("bad a"))]));
        assert_eq!(fields.reason_for("a").map(ValidationError::text), Some("bad a"));
        assert!(fields.reason_for("b").is_none());
        assert!(fields.reason_at(0).is_none());

        let items = leaf("top").with_reasons(Reasons::Items(vec![leaf("bad").with_index(4)]));
        assert_eq!(items.reason_at(0).and_then(ValidationError::index), Some(4));
        assert!(items.reason_for("0").is_none());
    }

    #[test]
    fn test_leaves_paths() {
        let password = leaf("value is an invalid password").with_reasons(Reasons::Items(vec![
            leaf("password length is less than 8"),
            leaf("password must include at least one number"),
        ]));
        let tags = leaf("value is an array of invalid items")
            .with_reasons(Reasons::Items(vec![leaf("value is not string").with_index(2)]));
        let reset = leaf("value does not match structure")
            .with_reasons(Reasons::fields([("password", password)]));
        let root = ValidationError::new("value does not match structure", list![])
            .with_reasons(Reasons::fields([("reset", reset), ("tags", tags)]));

        let paths: Vec<_> = root
            .leaves()
            .into_iter()
            .map(|(path, e)| (path, e.text().to_owned()))
            .collect();

        assert_eq!(
            paths,
            vec![
                (
                    "reset.password".to_owned(),
                    "password length is less than 8".to_owned()
                ),
                (
                    "reset.password".to_owned(),
                    "password must include at least one number".to_owned()
                ),
                ("tags[2]".to_owned(), "value is not string".to_owned()),
            ]
        );
    }

    #[test]
    fn test_leaves_of_leaf_is_self() {
        let err = leaf("alone");
        let leaves = err.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].0, "");
    }

    #[test]
    fn test_walk_visits_parents_first() {
        let root = leaf("root").with_reasons(Reasons::fields([
            ("a", leaf("a").with_reasons(Reasons::Items(vec![leaf("a0").with_index(0)]))),
            ("b", leaf("b")),
        ]));

        let mut seen = Vec::new();
        root.walk(|path, e| seen.push((path.to_owned(), e.text().to_owned())));
        let expected = [("", "root"), ("a", "a"), ("a[0]", "a0"), ("b", "b")];
        assert_eq!(seen.len(), expected.len());
        for ((path, text), (want_path, want_text)) in seen.iter().zip(expected) {
            assert_eq!(path, want_path);
            assert_eq!(text, want_text);
        }
    }

    #[test]
    fn test_reasons_iter_and_len() {
        let reasons = Reasons::fields([("a", leaf("1")), ("b", leaf("2"))]);
        assert_eq!(reasons.len(), 2);
        assert!(!reasons.is_empty());
        let texts: Vec<_> = reasons.iter().map(ValidationError::text).collect();
        assert_eq!(texts, ["1", "2"]);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn test_fault_downcast() {
        let err = Error::fault(Boom);
        assert!(!err.is_invalid());
        assert!(err.as_invalid().is_none());
        let fault = err.as_fault().expect("fault");
        assert!(fault.downcast_ref::<Boom>().is_some());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_fault_from_message() {
        let err = Error::fault("predicate exploded");
        assert_eq!(err.to_string(), "predicate exploded");

        let inner = match err {
            Error::Fault(fault) => fault.into_inner(),
            other => panic!("expected fault, got {other:?}"),
        };
        assert_eq!(inner.to_string(), "predicate exploded");
    }

    #[test]
    fn test_invalid_conversion() {
        let err: Error = leaf("nope").into();
        assert!(err.is_invalid());
        assert_eq!(err.into_invalid().map(|e| e.text().to_owned()), Some("nope".to_owned()));
    }
}
