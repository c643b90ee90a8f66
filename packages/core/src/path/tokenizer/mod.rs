//! Path tokenizer
//!
//! Lexical analysis turning a raw path string into a token queue, plus the
//! [`PathParser`] driver that hands the queue to the selector parser.

mod characters;
mod core;
mod names;

pub use self::core::PathParser;
