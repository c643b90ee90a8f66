//! # dendro_core
//!
//! Fault-tolerant access and transformation over JSON-shaped trees.
//!
//! - [`path`]: compile `a.b[0][*][x,y][1:]` style paths
//! - [`traversal`]: resolve paths with found/missing outcomes, plus the
//!   `get` entry point and its decorations
//! - [`mapper`]: build output trees with drop/keep semantics and empty removal
//! - [`validation`]: compose checks into rules and rule groups
//!
//! Everything operates on [`Value`](value::Value) (`serde_json::Value`).
//! No operation performs I/O and the source tree is never mutated, so all of
//! it is safe to call from many threads at once.

pub mod config;
pub mod error;
pub mod mapper;
pub mod path;
pub mod prelude;
pub mod traversal;
pub mod validation;
pub mod value;

pub use config::Config;
pub use error::{ConfigError, GetError, MapperError, ParseError};
pub use mapper::{DropLevel, Mapper, Node};
pub use path::{Path, PathSegment, compile, parse};
pub use traversal::{GetOptions, MissingReason, Outcome, get, get_node, resolve, retrieve};
pub use validation::{Rule, RuleGroup, validate};
pub use value::{Value, ValueKind};
