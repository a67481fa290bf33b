//! Serde support (feature-gated)
//!
//! Request bodies usually arrive as JSON. This module converts
//! `serde_json::Value` into [`Value`], serializes values and error trees back
//! out, and decodes validated output into typed structs with
//! [`Validator::validate_into`].
//!
//! # Example
//!
//! ```rust
//! use serde::Deserialize;
//! use toi::prelude::*;
//! use toi::validators::{num, obj, str};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Message {
//!     to: u32,
//!     content: String,
//! }
//!
//! let schema = obj::keys([
//!     ("to", required().and(num::parse()).and(num::is_integer())),
//!     ("content", required().and(str::is())),
//! ]);
//!
//! let body = serde_json::json!({ "to": "5", "content": "hi" });
//! let message: Message = schema.validate_into(Value::from(body)).unwrap();
//! assert_eq!(message, Message { to: 5, content: "hi".into() });
//! ```

use serde::de::DeserializeOwned;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Reasons, ValidationError};
use crate::validator::Validator;
use crate::value::{Bag, Value};

// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(fields) => {
                Value::from(fields.into_iter().collect::<Bag>())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items.iter()),
            Value::Object(bag) => serializer.collect_map(bag.iter()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl Serialize for Reasons {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reasons::Items(items) => serializer.collect_seq(items),
            Reasons::Fields(fields) => serializer.collect_map(fields),
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2
            + usize::from(self.reasons().is_some())
            + usize::from(self.index().is_some())
            + usize::from(self.field().is_some());
        let mut state = serializer.serialize_struct("ValidationError", len)?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("text", self.text())?;
        match self.reasons() {
            Some(reasons) => state.serialize_field("reasons", reasons)?,
            None => state.skip_field("reasons")?,
        }
        match self.index() {
            Some(index) => state.serialize_field("index", &index)?,
            None => state.skip_field("index")?,
        }
        match self.field() {
            Some(field) => state.serialize_field("field", field)?,
            None => state.skip_field("field")?,
        }
        state.end()
    }
}

impl Validator {
    /// Validate `value`, then decode the output into `T`.
    ///
    /// A rejected value is an [`Error::Invalid`]. Output that does not decode
    /// into `T` means the validator and `T` disagree, and is reported as an
    /// [`Error::Fault`].
    pub fn validate_into<T: DeserializeOwned>(&self, value: Value) -> crate::Result<T> {
        let out = self.validate(value)?;
        let json = serde_json::to_value(&out).map_err(Error::fault)?;
        serde_json::from_value(json).map_err(Error::fault)
    }
}
