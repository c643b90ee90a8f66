//! Mapper: build a new tree from a source tree
//!
//! A mapping function reads the source through [`get_node`](crate::traversal::get_node)
//! (or [`get`](crate::traversal::get)) and assembles a [`Node`] tree. The
//! mapper then runs one post-order cleanup:
//!
//! 1. [`Node::Drop`] markers null out the ancestor their [`DropLevel`] names.
//! 2. When enabled, nulls, empty strings and empty containers are removed
//!    bottom-up. The output root itself is always kept.
//! 3. [`Node::Keep`] values are unwrapped; they are exempt from step 2.
//!
//! The source is never mutated and markers never appear in the result.

mod cleanup;
mod core;
mod macros;
mod markers;
mod node;

pub use self::cleanup::remove_empty;
pub use self::core::{Mapper, MappingFn};
pub use self::markers::DropLevel;
pub use self::node::Node;
