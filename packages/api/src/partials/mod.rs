//! Ready-made transforms and predicates
//!
//! Predicates plug into [`Get::only_if`](crate::Get::only_if) and
//! [`filter_each`]; transforms are fallible and plug into
//! [`Get::try_apply`](crate::Get::try_apply), [`map_each`] and [`pipe`].
//! A transform applied to a value of the wrong kind fails, which the
//! retrieval reports as a missing result.
//!
//! ```
//! use dendro::Get;
//! use dendro::partials::{gt, keep, upper};
//! use serde_json::json;
//!
//! let source = json!({"name": "ada", "scores": [9, 7, 8], "age": 36});
//!
//! assert_eq!(Get::path("name").try_apply(upper()).from(&source)?, json!("ADA"));
//! assert_eq!(Get::path("scores").try_apply(keep(2)).from(&source)?, json!([9, 7]));
//! assert_eq!(Get::path("age").only_if(gt(40)).from(&source)?, json!(null));
//! # Ok::<(), dendro::GetError>(())
//! ```

mod compare;
mod predicates;
mod transforms;

pub use self::predicates::{
    contained_in, contains, equals, gt, gte, is_kind, length_is, lt, lte, not_contained_in,
    not_contains, not_equal,
};
pub use self::transforms::{
    add, add_before, divide, divide_before, echo, filter_each, index, keep, lower, map_each,
    multiply, multiply_before, pipe, subtract, subtract_before, upper,
};
