//! # Toi
//!
//! Composable validation and transformation of untyped input.
//!
//! A [`Validator`] takes a dynamic [`Value`] (typically a decoded request
//! body) and either returns a possibly reshaped `Value` or fails with a
//! [`ValidationError`]. Validators are small, immutable and chain left to
//! right with [`Validator::and`]; structural validators aggregate every
//! violation into a single error tree instead of stopping at the first.
//!
//! ## Quick Example
//!
//! ```rust
//! use toi::prelude::*;
//! use toi::validators::{num, obj, str};
//! use toi::bag;
//!
//! let send_message = required().and(obj::keys([
//!     ("to", required().and(num::is())),
//!     ("content", required().and(str::is()).and(str::min(1))),
//! ]));
//!
//! // Valid input comes back as a fresh bag holding the declared keys only.
//! let out = send_message
//!     .validate(bag! { "to" => 5, "content" => "hi" })
//!     .unwrap();
//! assert_eq!(out, bag! { "to" => 5, "content" => "hi" });
//!
//! // Every violation is reported at once, keyed by field.
//! let err = send_message
//!     .validate(bag! { "to" => "5", "content" => "", "admin" => true })
//!     .unwrap_err();
//! let err = err.as_invalid().unwrap();
//! let paths: Vec<_> = err.leaves().into_iter().map(|(path, _)| path).collect();
//! assert_eq!(paths, ["to", "content", "admin"]);
//! ```
//!
//! ## Null handling
//!
//! Almost every validator lets `Null` and `Undefined` through untouched, so
//! optional fields need no special casing. Put [`required`] at the head of a
//! chain to reject them.
//!
//! ## Faults
//!
//! A validator built from caller code can fail for reasons unrelated to the
//! input. Such failures are [`Fault`]s: aggregating validators never collect
//! them, they abort the whole call instead. See [`Error`].
//!
//! ## Features
//!
//! - `tracing`: log rejections and aborted aggregations with `tracing`
//! - `serde`: JSON conversion, error-tree serialization and
//!   [`Validator::validate_into`]
//! - `proptest`: `Arbitrary` for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod error;
pub mod predicate;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
pub mod validator;
pub mod validators;
pub mod value;

// Re-exports
pub use builder::{allow, named_allow, named_transform, optional, required, transform};
pub use error::{Error, Fault, Reasons, Result, ValidationError};
pub use validator::Validator;
pub use value::{Bag, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::{allow, optional, required, transform};
    pub use crate::error::{Error, ValidationError};
    pub use crate::validator::Validator;
    pub use crate::value::{Bag, Value};
}
