//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use toi::predicate::prelude::*;
//! use toi::Value;
//!
//! let small = is_number().and(num_at_most(10.0));
//! assert!(small.check(&Value::from(3)));
//! ```

// Core trait
pub use super::combinators::{And, Not, Or, Predicate, PredicateExt};

// Variant predicates
pub use super::kind::{
    is_array, is_bool, is_number, is_number_type, is_object, is_plain_bag, is_string,
};

// String predicates
pub use super::string::{matches, not_empty, str_equals, str_len_between, str_len_max, str_len_min};

// Number predicates
pub use super::number::{is_integer, num_at_least, num_at_most};

// List and membership predicates
pub use super::collection::{items_between, items_max, items_min, one_of};
