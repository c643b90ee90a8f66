//! Traversal engine and retrieval entry point
//!
//! [`resolve`] folds a compiled [`Path`](crate::path::Path) over a value and
//! reports either [`Outcome::Found`] or a structured [`Outcome::Missing`].
//! Absence is data here, never an error.
//!
//! [`retrieve`], [`get`] and [`get_node`] layer the `flatten`, `only_if`,
//! `apply`, `drop_level`, `strict` and `default` decorations on top.

mod engine;
mod options;
mod outcome;
mod retrieve;
mod segments;
pub mod strict;

pub use engine::{resolve, resolve_str};
pub use options::{GetOptions, Predicate, Transform};
pub use outcome::{MissingReason, Outcome};
pub use retrieve::{get, get_node, retrieve};
pub(crate) use retrieve::panic_message;
