//! Testing utilities for validator fixtures
//!
//! Validators are usually tested as tables of inputs: values that must be
//! accepted, values that must be rejected, and input/output pairs for
//! transforms. The macros here keep those tables short and make failures name
//! the validator that misbehaved.
//!
//! # Examples
//!
//! ```rust
//! use toi::validators::{num, str};
//! use toi::{assert_invalid, assert_nullable, assert_transforms, assert_valid};
//!
//! assert_nullable!(str::is());
//! assert_valid!(str::is(), ["", "hello"]);
//! assert_invalid!(str::is(), [1, true]);
//! assert_transforms!(num::parse(), ["1" => 1, "2.5" => 2.5]);
//! ```
//!
//! With the `proptest` feature enabled, [`Value`](crate::Value) implements
//! `Arbitrary`, generating nested lists and bags up to a small depth.

/// Assert that a validator accepts every listed value.
///
/// Each value goes through `Value::from`, so literals can be listed
/// directly. The output is not inspected; use [`assert_transforms!`] for
/// that.
///
/// # Example
///
/// ```rust
/// use toi::validators::num;
/// use toi::{assert_valid, Value};
///
/// assert_valid!(num::is(), [1, 2.5, Value::from(-3)]);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, [$($value:expr),* $(,)?]) => {{
        let validator: &$crate::Validator = &$validator;
        $(
            let value = $crate::Value::from($value);
            if let Err(err) = validator.validate(value.clone()) {
                panic!(
                    "Expected {} to accept {:?}, got error: {}",
                    validator.name(),
                    value,
                    err
                );
            }
        )*
    }};
}

/// Assert that a validator rejects every listed value with a
/// [`ValidationError`](crate::ValidationError).
///
/// A [`Fault`](crate::Fault) does not count as a rejection.
///
/// # Example
///
/// ```rust
/// use toi::validators::num;
/// use toi::assert_invalid;
///
/// assert_invalid!(num::is(), ["1", true, f64::NAN]);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, [$($value:expr),* $(,)?]) => {{
        let validator: &$crate::Validator = &$validator;
        $(
            let value = $crate::Value::from($value);
            match validator.validate(value.clone()) {
                Err($crate::Error::Invalid(_)) => {}
                Err($crate::Error::Fault(fault)) => {
                    panic!(
                        "Expected {} to reject {:?}, got fault: {}",
                        validator.name(),
                        value,
                        fault
                    );
                }
                Ok(out) => {
                    panic!(
                        "Expected {} to reject {:?}, got Ok: {:?}",
                        validator.name(),
                        value,
                        out
                    );
                }
            }
        )*
    }};
}

/// Assert that a validator passes `Null` and `Undefined` through unchanged.
#[macro_export]
macro_rules! assert_nullable {
    ($validator:expr) => {{
        let validator: &$crate::Validator = &$validator;
        for value in [$crate::Value::Null, $crate::Value::Undefined] {
            match validator.validate(value.clone()) {
                Ok(out) => assert_eq!(
                    out,
                    value,
                    "Expected {} to pass {:?} through",
                    validator.name(),
                    value
                ),
                Err(err) => panic!(
                    "Expected {} to pass {:?} through, got error: {}",
                    validator.name(),
                    value,
                    err
                ),
            }
        }
    }};
}

/// Assert that a validator maps each input to the expected output.
///
/// # Example
///
/// ```rust
/// use toi::validators::str;
/// use toi::assert_transforms;
///
/// assert_transforms!(str::upper(), ["abc" => "ABC", "A1" => "A1"]);
/// ```
#[macro_export]
macro_rules! assert_transforms {
    ($validator:expr, [$($input:expr => $expected:expr),* $(,)?]) => {{
        let validator: &$crate::Validator = &$validator;
        $(
            let input = $crate::Value::from($input);
            let expected = $crate::Value::from($expected);
            match validator.validate(input.clone()) {
                Ok(out) => assert_eq!(
                    out,
                    expected,
                    "Expected {} to map {:?} to {:?}",
                    validator.name(),
                    input,
                    expected
                ),
                Err(err) => panic!(
                    "Expected {} to map {:?} to {:?}, got error: {}",
                    validator.name(),
                    input,
                    expected,
                    err
                ),
            }
        )*
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use crate::{Bag, Value};

        // NaN is left out: it never equals itself, which makes identity
        // properties meaningless.
        let leaf = prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1.0e6..1.0e6f64).prop_map(Value::Number),
            "[a-z0-9 ]{0,8}".prop_map(Value::String),
        ];

        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
                prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                    .prop_map(|fields| Value::from(fields.into_iter().collect::<Bag>())),
            ]
        })
        .boxed()
    }
}
