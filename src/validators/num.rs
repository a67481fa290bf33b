//! Number validators

use crate::builder::{named_allow, named_transform};
use crate::error::ValidationError;
use crate::predicate::{self, is_number, is_number_type, num_at_least, num_at_most};
use crate::validator::Validator;
use crate::value::Value;

/// Options for [`parse_options`] and [`parse_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    throw_on_nan: bool,
}

impl ParseOptions {
    /// Default options: `NaN` results are returned, not rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that do not parse to a number.
    pub fn throw_on_nan(mut self, throw_on_nan: bool) -> Self {
        self.throw_on_nan = throw_on_nan;
        self
    }
}

/// Accept numbers other than `NaN`.
pub fn is() -> Validator {
    named_allow("num.is", is_number(), "value is not a number")
}

/// Accept any number, `NaN` included.
pub fn is_nan() -> Validator {
    named_allow("num.isNaN", is_number_type(), "value is not a number type")
}

/// Accept integral numbers only.
pub fn is_integer() -> Validator {
    named_allow("num.isInteger", predicate::is_integer(), "value is not an integer")
}

/// Coerce a value, usually a string, to a number. Unparseable input becomes
/// `NaN`.
///
/// # Examples
///
/// ```
/// use toi::validators::num;
/// use toi::Value;
///
/// assert_eq!(num::parse().validate(Value::from("12.5")).unwrap(), Value::from(12.5));
/// assert!(num::parse().validate(Value::from("twelve")).unwrap().as_f64().unwrap().is_nan());
/// ```
pub fn parse() -> Validator {
    parse_options(ParseOptions::default())
}

/// [`parse`] with options.
///
/// ```
/// use toi::validators::num::{self, ParseOptions};
/// use toi::Value;
///
/// let strict = num::parse_options(ParseOptions::new().throw_on_nan(true));
/// assert!(strict.validate(Value::from("twelve")).is_err());
/// ```
pub fn parse_options(options: ParseOptions) -> Validator {
    parse_with(options, default_parser)
}

/// [`parse_options`] with a custom parser for string input. Other variants
/// are coerced the default way.
pub fn parse_with<F>(options: ParseOptions, parser: F) -> Validator
where
    F: Fn(&str) -> f64 + Send + Sync + 'static,
{
    let parsing = named_transform("num.parse", move |v| {
        let n = match &v {
            Value::String(s) => parser(s),
            other => other.to_number(),
        };
        Ok(Value::Number(n))
    });

    if options.throw_on_nan {
        parsing.and(is())
    } else {
        parsing
    }
}

fn default_parser(s: &str) -> f64 {
    Value::from(s).to_number()
}

/// Accept numbers of at least `m`.
pub fn min(m: impl Into<f64>) -> Validator {
    let m = m.into();
    named_allow(
        "num.min",
        num_at_least(m),
        format!("value is less than {}", Value::from(m)),
    )
}

/// Accept numbers of at most `m`.
pub fn max(m: impl Into<f64>) -> Validator {
    let m = m.into();
    named_allow(
        "num.max",
        num_at_most(m),
        format!("value is greater than {}", Value::from(m)),
    )
}

/// Truncate numbers toward zero.
pub fn integer() -> Validator {
    named_transform("num.integer", |v| match v {
        Value::Number(n) => Ok(Value::Number(n.trunc())),
        other => Err(ValidationError::new("value is not a number", other).into()),
    })
}
