//! The validator contract and its composition operators
//!
//! Every combinator in this crate is a [`Validator`]: an immutable, named
//! function from a [`Value`] to either an output `Value` or an [`Error`].
//! Validators are built once and called any number of times, from any
//! number of threads.
//!
//! # Composition
//!
//! [`Validator::and`] chains two validators left to right. The first failing
//! step ends the chain; later steps never run.
//!
//! ```
//! use toi::prelude::*;
//! use toi::validators::{num, str};
//!
//! let id_param = required()
//!     .and(str::is())
//!     .and(num::parse())
//!     .and(num::is())
//!     .and(num::is_integer());
//!
//! assert_eq!(id_param.validate(Value::from("42")).unwrap(), Value::from(42));
//! assert!(id_param.validate(Value::from("4.2")).is_err());
//! assert_eq!(
//!     id_param.name(),
//!     "required.and(str.is).and(num.parse).and(num.is).and(num.isInteger)"
//! );
//! ```
//!
//! # Override messages
//!
//! [`Validator::with_message`] replaces the message of the step it is attached
//! to. Attached to a chain, that step is the head of the chain: failures of
//! later links keep their own text.
//!
//! ```
//! use toi::prelude::*;
//! use toi::validators::str;
//!
//! let name = required()
//!     .and(str::is())
//!     .and(str::length(1, 30).with_message("name length must be between 1 and 30"));
//!
//! let err = name.validate(Value::from("")).unwrap_err();
//! assert_eq!(err.to_string(), "name length must be between 1 and 30");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ValidationError};
use crate::value::Value;

type ValidateFn = dyn Fn(Value, Option<&str>) -> Result<Value> + Send + Sync;

/// A named, immutable validation and transformation step.
///
/// Cloning a validator is cheap and shares the underlying function; nothing
/// about a validator can change after it is built.
#[derive(Clone)]
pub struct Validator {
    name: Arc<str>,
    message: Option<Arc<str>>,
    func: Arc<ValidateFn>,
}

impl Validator {
    /// Build a validator from a raw function.
    ///
    /// The function receives the input and the override message, if one was
    /// set with [`with_message`](Self::with_message) or passed down by an
    /// enclosing chain. It decides for itself whether the override applies to
    /// the failures it raises.
    ///
    /// # Examples
    ///
    /// ```
    /// use toi::{Validator, ValidationError, Value};
    ///
    /// let even = Validator::wrap("even", |value, message| match value.as_f64() {
    ///     Some(n) if n % 2.0 == 0.0 => Ok(value),
    ///     _ => Err(ValidationError::new(message.unwrap_or("value is not even"), value).into()),
    /// });
    ///
    /// assert!(even.validate(Value::from(4)).is_ok());
    /// assert!(even.validate(Value::from(3)).is_err());
    /// ```
    pub fn wrap<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value, Option<&str>) -> Result<Value> + Send + Sync + 'static,
    {
        Validator {
            name: Arc::from(name.into()),
            message: None,
            func: Arc::new(func),
        }
    }

    /// Diagnostic name, e.g. `"str.is"` or `"required.and(str.is)"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The override message set by [`with_message`](Self::with_message).
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Run the validator on `value`.
    pub fn validate(&self, value: Value) -> Result<Value> {
        let result = self.run(value, None);

        #[cfg(feature = "tracing")]
        if let Err(crate::Error::Invalid(err)) = &result {
            tracing::debug!(validator = %self.name, text = %err.text(), "value rejected");
        }

        result
    }

    /// Run the validator with an explicit override message.
    ///
    /// This is the call combinators make on their children; it skips the
    /// logging done by [`validate`](Self::validate).
    pub fn run(&self, value: Value, message: Option<&str>) -> Result<Value> {
        let message = self.message.as_deref().or(message);
        (self.func)(value, message)
    }

    /// Chain `next` after this validator.
    ///
    /// `next` receives this validator's output. An override message handed to
    /// the chain goes to this validator only.
    pub fn and(self, next: Validator) -> Validator {
        let name = format!("{}.and({})", self.name, next.name);
        Validator::wrap(name, move |value, message| {
            let out = self.run(value, message)?;
            next.run(out, None)
        })
    }

    /// Replace the message of failures raised by this step.
    ///
    /// A message set earlier on the same step takes precedence.
    pub fn with_message(self, message: impl Into<String>) -> Validator {
        let message: Arc<str> = Arc::from(message.into());
        Validator {
            name: Arc::from(format!("{}.withMessage({})", self.name, message)),
            message: Some(self.message.unwrap_or(message)),
            func: self.func,
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Pick the override message if present, otherwise the default text.
pub(crate) fn text_or(message: Option<&str>, default: impl Into<String>) -> String {
    match message {
        Some(m) => m.to_owned(),
        None => default.into(),
    }
}

/// Build a rejection for `value`, honouring an override message.
pub(crate) fn reject(message: Option<&str>, default: impl Into<String>, value: Value) -> crate::Error {
    ValidationError::new(text_or(message, default), value).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn failing(name: &str, text: &'static str) -> Validator {
        Validator::wrap(name, move |value, message| {
            Err(reject(message, text, value))
        })
    }

    fn counting(counter: Arc<AtomicUsize>) -> Validator {
        Validator::wrap("counting", move |value, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(value)
        })
    }

    fn add_one() -> Validator {
        Validator::wrap("add_one", |value, _| {
            Ok(Value::from(value.as_f64().unwrap_or_default() + 1.0))
        })
    }

    #[test]
    fn test_wrap_keeps_name() {
        let v = add_one();
        assert_eq!(v.name(), "add_one");
        assert_eq!(v.message(), None);
        assert_eq!(v.validate(Value::from(1)).unwrap(), Value::from(2));
    }

    #[test]
    fn test_and_feeds_output_forward() {
        let v = add_one().and(add_one()).and(add_one());
        assert_eq!(v.validate(Value::from(0)).unwrap(), Value::from(3));
        assert_eq!(v.name(), "add_one.and(add_one).and(add_one)");
    }

    #[test]
    fn test_and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let v = failing("fails", "nope").and(counting(calls.clone()));

        let err = v.validate(Value::from(1)).unwrap_err();
        assert_eq!(err.to_string(), "nope");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_and_propagates_second_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let v = counting(calls.clone()).and(failing("fails", "second"));

        let err = v.validate(Value::from(1)).unwrap_err();
        assert_eq!(err.to_string(), "second");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_with_message_overrides_own_failure() {
        let v = failing("fails", "default").with_message("custom");
        assert_eq!(v.message(), Some("custom"));
        assert_eq!(v.name(), "fails.withMessage(custom)");
        assert_eq!(v.validate(Value::Null).unwrap_err().to_string(), "custom");
    }

    #[test]
    fn test_with_message_reaches_head_of_chain_only() {
        let head_fails = failing("a", "a failed").and(failing("b", "b failed"));
        let err = head_fails
            .with_message("custom")
            .validate(Value::Null)
            .unwrap_err();
        assert_eq!(err.to_string(), "custom");

        let tail_fails = add_one().and(failing("b", "b failed")).with_message("custom");
        let err = tail_fails.validate(Value::from(1)).unwrap_err();
        assert_eq!(err.to_string(), "b failed");
    }

    #[test]
    fn test_with_message_on_link_is_scoped_to_link() {
        let v = failing("a", "a failed").and(failing("b", "b failed").with_message("b custom"));
        assert_eq!(v.validate(Value::Null).unwrap_err().to_string(), "a failed");

        let v = add_one().and(failing("b", "b failed").with_message("b custom"));
        assert_eq!(v.validate(Value::Null).unwrap_err().to_string(), "b custom");
    }

    #[test]
    fn test_innermost_message_wins() {
        let v = failing("a", "default")
            .with_message("inner")
            .with_message("outer");
        assert_eq!(v.validate(Value::Null).unwrap_err().to_string(), "inner");
    }

    #[test]
    fn test_faults_pass_through_and() {
        let v = Validator::wrap("faulty", |_, _| Err(Error::fault("bug"))).and(add_one());
        let err = v.validate(Value::from(1)).unwrap_err();
        assert!(err.as_fault().is_some());
    }

    #[test]
    fn test_validators_are_shareable_across_threads() {
        let v = add_one().and(add_one());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = v.clone();
                std::thread::spawn(move || v.validate(Value::from(i)).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Value::from(i + 2));
        }
    }

    #[test]
    fn test_debug_shows_name() {
        let debug = format!("{:?}", add_one());
        assert!(debug.contains("add_one"));
    }
}
