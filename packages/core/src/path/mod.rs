//! Path expressions
//!
//! Compiles the compact path syntax (`some.deeply.nested[0].value`,
//! `items[*].id`, `user[id,name]`, `rows[1:3]`) into a [`Path`]: an ordered
//! list of [`PathSegment`]s the traversal engine folds over.
//!
//! Lexing and parsing are separate stages: the tokenizer turns the string into
//! [`Token`]s and the selector parser consumes them into segments. Compiled
//! paths are memoised by [`compile`] in a bounded process-wide cache.
//!
//! Field names cannot contain `.`, `[`, `]`, `,`, `:` or `*`; there is no
//! escaping mechanism.

pub mod ast;
pub mod cache;
pub mod compiler;
mod selector_parser;
pub mod tokenizer;
pub mod tokens;

pub use ast::{Path, PathSegment};
pub use cache::{CacheStats, PathCache, global_cache};
pub use compiler::{compile, parse};
pub use tokens::Token;
