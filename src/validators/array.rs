//! List validators

use std::sync::Arc;

use crate::builder::named_allow;
use crate::error::{Error, Reasons, ValidationError};
use crate::predicate::{is_array, items_between, items_max, items_min};
use crate::validator::{reject, text_or, Validator};
use crate::value::Value;

const NOT_ARRAY: &str = "value is not an array";

/// Accept lists.
pub fn is() -> Validator {
    named_allow("array.is", is_array(), NOT_ARRAY)
}

/// Accept lists with at least `m` items.
pub fn min(m: usize) -> Validator {
    named_allow(
        "array.min",
        items_min(m),
        format!("value.length is smaller than {m}"),
    )
}

/// Accept lists with at most `m` items.
pub fn max(m: usize) -> Validator {
    named_allow(
        "array.max",
        items_max(m),
        format!("value.length is greater than {m}"),
    )
}

/// Accept lists whose item count is in `[start, end]`.
pub fn length(start: usize, end: usize) -> Validator {
    named_allow(
        "array.length",
        items_between(start, end),
        format!("value.length is out of bounds [{start}, {end}]"),
    )
}

/// Validate every item of a list with `item`.
///
/// All items are checked before the validator decides; each failing item is
/// reported as a reason tagged with its index. A [`Fault`](crate::Fault)
/// aborts immediately.
///
/// When `item` leaves every element strictly equal to its input, the input
/// list itself is returned. Otherwise a new list is built holding the
/// transformed elements.
///
/// # Examples
///
/// ```
/// use toi::prelude::*;
/// use toi::validators::{array, num};
/// use toi::list;
///
/// let numbers = array::items(required().and(num::is()));
/// let input = list![1, 2, 3];
/// assert!(numbers.validate(input.clone()).unwrap().strict_eq(&input));
///
/// let err = numbers.validate(list![1, "two", Value::Null]).unwrap_err();
/// let err = err.as_invalid().unwrap();
/// assert_eq!(err.text(), "value is an array of invalid items");
/// assert_eq!(err.reason_at(0).and_then(|r| r.index()), Some(1));
/// assert_eq!(err.reason_at(1).and_then(|r| r.index()), Some(2));
///
/// let parsed = array::items(num::parse()).validate(list!["1", "2"]).unwrap();
/// assert_eq!(parsed, list![1, 2]);
/// ```
pub fn items(item: Validator) -> Validator {
    Validator::wrap("array.items", move |value, message| {
        let input = match &value {
            Value::Null | Value::Undefined => return Ok(value),
            Value::Array(list) => Arc::clone(list),
            _ => return Err(reject(message, NOT_ARRAY, value)),
        };

        let mut output: Option<Vec<Value>> = None;
        let mut reasons = Vec::new();

        for (index, element) in input.iter().enumerate() {
            match item.run(element.clone(), None) {
                Ok(out) => {
                    if output.is_none() && !out.strict_eq(element) {
                        output = Some(input[..index].to_vec());
                    }
                    if let Some(output) = output.as_mut() {
                        output.push(out);
                    }
                }
                Err(Error::Invalid(err)) => {
                    reasons.push(err.with_index(index));
                }
                Err(fault) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(index, error = %fault, "array.items aborted by fault");
                    return Err(fault);
                }
            }
        }

        if !reasons.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(failed = reasons.len(), "array.items rejected value");

            return Err(ValidationError::new(
                text_or(message, "value is an array of invalid items"),
                value,
            )
            .with_reasons(Reasons::Items(reasons))
            .into());
        }

        Ok(match output {
            Some(output) => Value::from(output),
            None => value,
        })
    })
}
