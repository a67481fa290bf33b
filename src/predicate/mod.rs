//! Predicate combinators for value checks
//!
//! Predicates are the boolean building blocks behind every "membership" style
//! validator. They can be combined using logical operators (`and`, `or`,
//! `not`) and turned into a validator with [`allow`](crate::allow).
//!
//! # Example
//!
//! ```rust
//! use toi::predicate::*;
//! use toi::{allow, Value};
//!
//! let slug = allow(
//!     is_string().and(str_len_between(3, 20)),
//!     "value is not a slug",
//! );
//!
//! assert!(slug.validate(Value::from("hello")).is_ok());
//! assert!(slug.validate(Value::from("hi")).is_err());
//! // nullish values never reach the predicate
//! assert!(slug.validate(Value::Null).is_ok());
//! ```

mod collection;
mod combinators;
mod kind;
mod number;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{And, Not, Or, Predicate, PredicateExt};

// Re-export variant predicates
pub use kind::{
    is_array, is_bool, is_number, is_number_type, is_object, is_plain_bag, is_string, IsArray,
    IsBool, IsNumber, IsObject, IsPlainBag, IsString,
};

// Re-export string predicates
pub use string::{
    matches, not_empty, str_equals, str_len_between, str_len_max, str_len_min, Matches, NotEmpty,
    StrEquals, StrLen,
};

// Re-export number predicates
pub use number::{is_integer, num_at_least, num_at_most, AtLeast, AtMost, IsInteger};

// Re-export list and membership predicates
pub use collection::{items_between, items_max, items_min, one_of, ItemCount, OneOf};
