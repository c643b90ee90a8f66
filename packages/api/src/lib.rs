//! dendro public API
//!
//! Fault-tolerant retrieval from JSON-shaped trees with a fluent builder,
//! plus the mapper and validation engine of [`dendro_core`].
//!
//! ```
//! use dendro::prelude::*;
//! use serde_json::json;
//!
//! let source = json!({"patient": {"id": "abc123", "active": true}});
//!
//! let id = Get::path("patient.id").apply(|v| v).from(&source)?;
//! assert_eq!(id, json!("abc123"));
//!
//! let missing = Get::path("patient.name").default("unknown").from(&source)?;
//! assert_eq!(missing, json!("unknown"));
//! # Ok::<(), dendro::GetError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod partials;
pub mod prelude;

pub use builder::Get;

// Re-export the engine so callers only need one dependency
pub use dendro_core::{
    Config, ConfigError, DropLevel, GetError, GetOptions, Mapper, MapperError, MissingReason,
    Node, Outcome, ParseError, Path, PathSegment, Rule, RuleGroup, Value, ValueKind, compile,
    config, error, mapper, node, parse, path, traversal, validate, validation, value,
};

/// Start a retrieval builder for `path`
///
/// Shorthand for [`Get::path`]
#[must_use]
pub fn get(path: impl Into<String>) -> Get {
    Get::path(path)
}
