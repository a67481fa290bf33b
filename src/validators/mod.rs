//! Ready-made validators, grouped by the kind of value they accept
//!
//! Each group is a module of constructor functions:
//!
//! - [`any`]: identity and literal membership
//! - [`bool`]: booleans and truthiness
//! - [`num`]: numbers, parsing and bounds
//! - [`str`]: strings, lengths, patterns, email and password checks
//! - [`obj`]: structural validation of bags and field-presence checks
//! - [`array`]: list lengths and per-item validation
//!
//! The module names follow the value kinds, so `bool` and `str` shadow the
//! primitive types when imported by name. Import the modules you use:
//!
//! ```
//! use toi::prelude::*;
//! use toi::validators::{array, obj, str};
//! use toi::{bag, list};
//!
//! let tags = required().and(array::items(required().and(str::nonempty())));
//! let post = obj::keys([("title", required().and(str::length(1, 80))), ("tags", tags)]);
//!
//! assert!(post.validate(bag! { "title" => "Hello", "tags" => list!["intro"] }).is_ok());
//! assert!(post.validate(bag! { "title" => "", "tags" => list![""] }).is_err());
//! ```

pub mod any;
pub mod array;
pub mod bool;
pub mod num;
pub mod obj;
pub mod str;
