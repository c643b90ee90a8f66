//! Error handling for path compilation, retrieval, mapping and configuration
//!
//! Absence of data is not an error in this crate: traversal reports it as a
//! [`Missing`](crate::traversal::Outcome::Missing) outcome. The types here
//! cover the remaining failures: malformed path syntax, strict-mode absence,
//! mapper programming errors and invalid configuration.

mod constructors;
mod types;

pub use constructors::malformed_path_error;
pub use types::{ConfigError, GetError, MapperError, ParseError, ParseResult};
