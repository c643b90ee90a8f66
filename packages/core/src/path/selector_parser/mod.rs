//! Selector parser
//!
//! Consumes the token queue into [`PathSegment`](crate::path::PathSegment)s.
//! `core` holds the parser state and the segment loop, `bracket` handles
//! `[...]` contents and `slice` the `[start:end]` form.

mod bracket;
mod core;
mod slice;

pub(crate) use self::core::SelectorParser;
