//! Bag validators
//!
//! [`keys`] is the structural validator: it checks a bag against a declared
//! shape and builds a fresh bag from the validated fields. Its output never
//! carries the input's fallback chain or any undeclared key, so code that only
//! reads the output is insulated from whatever else the raw input carried.
//!
//! [`xor`] and [`and`] check which keys are present, whatever their values.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::builder::{named_allow, named_transform};
use crate::error::{Error, Reasons, ValidationError};
use crate::predicate::{is_object, is_plain_bag};
use crate::validator::{reject, text_or, Validator};
use crate::value::{Bag, Value};

const NOT_OBJECT: &str = "value is not an object type";

/// Accept bags and lists.
pub fn is() -> Validator {
    named_allow("obj.is", is_object(), NOT_OBJECT)
}

/// Accept bags with no fallback chain and no own `__proto__` key.
pub fn isplain() -> Validator {
    named_allow(
        "obj.isplain",
        is_plain_bag(),
        "value is not an object or it has a fallback chain",
    )
}

/// Options for [`keys_with`].
///
/// The default is strict: every declared key must be present (on the bag or
/// its fallback chain) and no undeclared key may appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeysOptions {
    missing: Vec<String>,
    own: bool,
    lenient: bool,
}

impl KeysOptions {
    /// Strict options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys that may be absent.
    ///
    /// The field validator still runs on `Undefined` for an absent key, so a
    /// [`required`](crate::required) field fails even when listed here.
    pub fn missing<K, I>(mut self, keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        self.missing.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Look up declared keys on the bag itself only, not its fallback chain.
    pub fn own(mut self, own: bool) -> Self {
        self.own = own;
        self
    }

    /// Tolerate undeclared keys. They are still left out of the output.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}

/// Validate a bag against `structure` with strict [`KeysOptions`].
///
/// # Examples
///
/// ```
/// use toi::prelude::*;
/// use toi::validators::{num, obj, str};
/// use toi::bag;
///
/// let message = obj::keys([
///     ("to", required().and(num::is())),
///     ("content", required().and(str::is())),
/// ]);
///
/// let out = message.validate(bag! { "to" => 5, "content" => "hi" }).unwrap();
/// assert_eq!(out, bag! { "to" => 5, "content" => "hi" });
///
/// let err = message.validate(bag! { "to" => "5", "extra" => 1 }).unwrap_err();
/// let err = err.as_invalid().unwrap();
/// assert_eq!(err.text(), "value does not match structure");
/// assert_eq!(err.reasons().map(|r| r.len()), Some(3));
/// ```
pub fn keys<K, I>(structure: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    keys_with(structure, KeysOptions::default())
}

/// Validate a bag against `structure`.
///
/// Every declared key is checked and every undeclared key reported before the
/// validator decides, so one failure lists all field-level violations. A
/// [`Fault`](crate::Fault) from a field validator aborts immediately.
pub fn keys_with<K, I>(structure: I, options: KeysOptions) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Validator)>,
{
    let structure: IndexMap<String, Validator> = structure
        .into_iter()
        .map(|(key, validator)| (key.into(), validator))
        .collect();
    let missing: HashSet<String> = options.missing.into_iter().collect();
    let own = options.own;
    let lenient = options.lenient;

    Validator::wrap("obj.keys", move |value, message| {
        let input = match &value {
            Value::Null | Value::Undefined => return Ok(value),
            Value::Object(bag) => Arc::clone(bag),
            _ => return Err(reject(message, NOT_OBJECT, value)),
        };

        let mut output = Bag::new();
        let mut reasons: IndexMap<String, ValidationError> = IndexMap::new();

        for (key, validator) in &structure {
            let found = if own {
                input.get_own(key)
            } else {
                input.lookup(key)
            };

            let result = match found {
                Some(field) => validator.run(field.clone(), None),
                None if missing.contains(key) => validator.run(Value::Undefined, None),
                None if own => Err(ValidationError::new(
                    format!("own key {key} in value is missing"),
                    key.as_str(),
                )
                .into()),
                None => Err(ValidationError::new(
                    format!("key {key} in value (and fallback chain) is missing"),
                    key.as_str(),
                )
                .into()),
            };

            match result {
                Ok(out) => {
                    output.insert(key.as_str(), out);
                }
                Err(Error::Invalid(err)) => {
                    reasons.insert(key.clone(), err.with_field(key.as_str()));
                }
                Err(fault) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(key = %key, error = %fault, "obj.keys aborted by fault");
                    return Err(fault);
                }
            }
        }

        if !lenient {
            for key in input.enumerable_keys() {
                if !structure.contains_key(key) {
                    reasons.insert(
                        key.to_owned(),
                        ValidationError::new(
                            format!("key {key} found in value but not in structure"),
                            key,
                        )
                        .with_field(key),
                    );
                }
            }
        }

        if reasons.is_empty() {
            return Ok(Value::from(output));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(failed = reasons.len(), "obj.keys rejected value");

        Err(ValidationError::new(text_or(message, "value does not match structure"), value)
            .with_reasons(Reasons::Fields(reasons))
            .into())
    })
}

/// Overlay the value's own fields on `def`.
///
/// Always returns a fresh bag without a fallback chain.
///
/// ```
/// use toi::validators::obj;
/// use toi::{bag, Bag, Value};
///
/// let def: Bag = [("page", 1), ("size", 20)].into_iter().collect();
/// let out = obj::defaults(def).validate(bag! { "size" => 50 }).unwrap();
/// assert_eq!(out, bag! { "page" => 1, "size" => 50 });
/// ```
pub fn defaults(def: Bag) -> Validator {
    named_transform("obj.defaults", move |value| {
        let bag = match value {
            Value::Object(bag) => bag,
            other => return Err(ValidationError::new(NOT_OBJECT, other).into()),
        };
        let mut out = Bag::new();
        for (key, field) in def.iter().chain(bag.iter()) {
            out.insert(key, field.clone());
        }
        Ok(Value::from(out))
    })
}

/// Accept bags with exactly one of `fields` as an own key.
///
/// Presence means the key exists; its value may be nullish.
///
/// ```
/// use toi::validators::obj;
/// use toi::{bag, Value};
///
/// let one = obj::xor(["email", "reset"]);
/// assert!(one.validate(bag! { "email" => 1 }).is_ok());
/// assert!(one.validate(bag! { "reset" => Value::Null }).is_ok());
/// assert!(one.validate(bag! {}).is_err());
/// assert!(one.validate(bag! { "email" => 1, "reset" => 1 }).is_err());
/// ```
pub fn xor<K, I>(fields: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    let failure = format!(
        "value must have only one field present of {}",
        fields.join(", ")
    );
    named_allow(
        "obj.xor",
        move |value: &Value| {
            let present = value.as_bag().map_or(0, |bag| {
                fields.iter().filter(|field| bag.contains_own(field)).count()
            });
            present == 1
        },
        failure,
    )
}

/// Accept bags with every one of `fields` as an own key.
///
/// Each absent field is reported as a separate reason.
pub fn and<K, I>(fields: I) -> Validator
where
    K: Into<String>,
    I: IntoIterator<Item = K>,
{
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    let failure = format!(
        "value must contain all of the fields {}",
        fields.join(", ")
    );

    Validator::wrap("obj.and", move |value, message| {
        if value.is_nullish() {
            return Ok(value);
        }

        let bag = value.as_bag();
        let reasons: IndexMap<String, ValidationError> = fields
            .iter()
            .filter(|field| !bag.is_some_and(|bag| bag.contains_own(field)))
            .map(|field| {
                let seen = bag
                    .and_then(|bag| bag.lookup(field))
                    .cloned()
                    .unwrap_or_default();
                let reason = ValidationError::new("field must be present", seen)
                    .with_field(field.as_str());
                (field.clone(), reason)
            })
            .collect();

        if reasons.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(text_or(message, failure.as_str()), value)
                .with_reasons(Reasons::Fields(reasons))
                .into())
        }
    })
}
