//! Commonly used names
//!
//! ```
//! use dendro_core::prelude::*;
//! ```

pub use crate::config::Config;
pub use crate::error::{ConfigError, GetError, MapperError, ParseError};
pub use crate::mapper::{DropLevel, Mapper, Node, remove_empty};
pub use crate::node;
pub use crate::path::{Path, PathSegment, compile, parse};
pub use crate::traversal::{
    GetOptions, MissingReason, Outcome, get, get_node, resolve, resolve_str, retrieve,
};
pub use crate::validation::{
    Check, Constraint, Equals, Field, GroupMode, InRange, InSet, IsOptional, IsRequired, IsType, Matches,
    MaxCount, MinCount, NotRequired, Predicate, Rule, RuleGroup, ValidationError,
    ValidationErrors, validate,
};
pub use crate::value::{Mapping, Value, ValueExt, ValueKind};
