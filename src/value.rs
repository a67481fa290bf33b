//! Dynamic input values
//!
//! Validators operate on untyped input, the kind of data that arrives in a
//! request body before anything has narrowed it. This module provides that
//! input space as a closed tagged union, [`Value`], together with [`Bag`], the
//! property-bag used for object-shaped input.
//!
//! Lists and bags are reference-counted. Cloning a `Value` is therefore cheap
//! and reference identity is observable through [`Value::strict_eq`], which is
//! how `array::items` reports that it left its input untouched.
//!
//! # Examples
//!
//! ```
//! use toi::{bag, list, Value};
//!
//! let body = bag! {
//!     "to" => 5,
//!     "content" => "hi",
//!     "tags" => list!["a", "b"],
//! };
//!
//! let bag = body.as_bag().unwrap();
//! assert_eq!(bag.get_own("to"), Some(&Value::from(5)));
//! assert_eq!(bag.keys().collect::<Vec<_>>(), ["to", "content", "tags"]);
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

/// An untyped input value.
///
/// `Undefined` and `Null` are distinct: `Undefined` is what a missing key
/// looks like, `Null` is an explicit null. Both are "nullish" and are passed
/// through untouched by every predicate and transform validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value at all, e.g. a key that is absent.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integers and floats share one representation.
    Number(f64),
    /// A string.
    String(String),
    /// A homogeneous list.
    Array(Arc<Vec<Value>>),
    /// A property-bag.
    Object(Arc<Bag>),
}

impl Value {
    /// `true` for `Null` and `Undefined`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// `true` only for `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `true` only for `Undefined`.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// The boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string slice, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The items, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The bag, if this is an `Object`.
    pub fn as_bag(&self) -> Option<&Bag> {
        match self {
            Value::Object(bag) => Some(bag),
            _ => None,
        }
    }

    /// Truthiness: `false`, `0`, `NaN`, `""`, null and undefined are falsy,
    /// everything else (including empty lists and bags) is truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use toi::{list, Value};
    ///
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// assert!(list![].is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Numeric coercion.
    ///
    /// Strings are trimmed; an empty string is `0`, `Infinity` and the
    /// `0x`/`0o`/`0b` radix prefixes are understood, and anything that is not
    /// a decimal literal is `NaN`. Booleans map to `1`/`0`, null to `0`,
    /// undefined, lists and bags to `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toi::Value;
    ///
    /// assert_eq!(Value::from(" 42 ").to_number(), 42.0);
    /// assert_eq!(Value::from("0x1A").to_number(), 26.0);
    /// assert_eq!(Value::from("").to_number(), 0.0);
    /// assert!(Value::from("not-a-number").to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::String(s) => parse_number(s),
            Value::Array(_) | Value::Object(_) => f64::NAN,
        }
    }

    /// Strict equality.
    ///
    /// Primitives compare by value (`NaN` is never equal to anything, `0` and
    /// `-0` are equal). Lists and bags compare by reference, so two clones of
    /// the same list are equal while two separately built lists with the same
    /// items are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use toi::{list, Value};
    ///
    /// let items = list![1, 2];
    /// assert!(items.strict_eq(&items.clone()));
    /// assert!(!items.strict_eq(&list![1, 2]));
    /// assert!(!Value::from(f64::NAN).strict_eq(&Value::from(f64::NAN)));
    /// ```
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            if digits.is_empty() {
                return f64::NAN;
            }
            return digits
                .chars()
                .try_fold(0.0, |acc, c| {
                    c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
                })
                .unwrap_or(f64::NAN);
        }
    }

    // f64::from_str also accepts "inf" and "nan", which are not numbers here
    let decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{n:.0}")
    } else {
        write!(f, "{n}")
    }
}

/// Template-string rendering: integral numbers have no fraction, lists are
/// comma-joined with nullish items rendered empty, bags are `[object Object]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => format_number(*n, f),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

/// A property-bag with an optional fallback chain.
///
/// The fallback is an explicit ancestor bag consulted when a key is not found
/// on the bag itself. Chains are finite: a bag owns its fallback through an
/// `Arc` and bags are immutable once shared, so no cycle can be built.
///
/// # Examples
///
/// ```
/// use toi::{Bag, Value};
///
/// let mut defaults = Bag::new();
/// defaults.insert("role", "member");
///
/// let mut user = Bag::new().with_fallback(defaults);
/// user.insert("name", "ada");
///
/// assert_eq!(user.get_own("role"), None);
/// assert_eq!(user.lookup("role"), Some(&Value::from("member")));
/// assert_eq!(user.enumerable_keys(), ["name", "role"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bag {
    fields: IndexMap<String, Value>,
    fallback: Option<Arc<Bag>>,
}

impl Bag {
    /// Create an empty, plain bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a fallback bag, replacing any existing one.
    pub fn with_fallback(mut self, fallback: impl Into<Arc<Bag>>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Insert an own field, returning the previous own value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look up an own field only.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether `key` is an own field. The value may be nullish.
    pub fn contains_own(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Look up a field on this bag, then on each fallback in turn.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.ancestors().find_map(|bag| bag.fields.get(key))
    }

    /// The bag itself followed by its fallback chain.
    pub fn ancestors(&self) -> impl Iterator<Item = &Bag> {
        std::iter::successors(Some(self), |bag| bag.fallback())
    }

    /// The direct fallback, if any.
    pub fn fallback(&self) -> Option<&Bag> {
        self.fallback.as_deref()
    }

    /// Own keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Own fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Own keys first, then inherited keys not already seen, nearest ancestor
    /// first.
    pub fn enumerable_keys(&self) -> Vec<&str> {
        let mut seen = IndexSet::new();
        for bag in self.ancestors() {
            seen.extend(bag.keys());
        }
        seen.into_iter().collect()
    }

    /// Number of own fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the bag has no own fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A plain bag has no fallback chain and no own `__proto__` field.
    pub fn is_plain(&self) -> bool {
        self.fallback.is_none() && !self.fields.contains_key("__proto__")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Bag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl From<Bag> for Value {
    fn from(bag: Bag) -> Self {
        Value::Object(Arc::new(bag))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::from(iter.into_iter().map(Into::into).collect::<Vec<Value>>())
    }
}

/// Build a bag [`Value`] from `key => value` pairs.
///
/// ```
/// use toi::{bag, Value};
///
/// let v = bag! { "a" => 1, "b" => bag! { "c" => true } };
/// assert!(matches!(v, Value::Object(_)));
/// ```
#[macro_export]
macro_rules! bag {
    () => {
        $crate::Value::from($crate::Bag::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut bag = $crate::Bag::new();
        $( bag.insert($key, $value); )+
        $crate::Value::from(bag)
    }};
}

/// Build a list [`Value`] from items convertible into `Value`.
///
/// ```
/// use toi::{list, Value};
///
/// let v = list![1, "two", Value::Null];
/// assert_eq!(v.as_array().map(<[Value]>::len), Some(3));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::from(::std::vec::Vec::<$crate::Value>::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Value::from(::std::vec![$($crate::Value::from($value)),*])
    };
}
