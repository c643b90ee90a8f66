//! Fluent retrieval builder
//!
//! [`Get`] collects decorations with chained calls and runs them with one of
//! the terminal methods.

pub mod core;
pub mod decorations;
pub mod terminal;

pub use self::core::Get;
