//! Error types

use thiserror::Error;

use crate::traversal::MissingReason;

/// Result type for path compilation
pub type ParseResult<T> = Result<T, ParseError>;

/// Path syntax error
///
/// Always fatal to the parse call; there is no partial path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The path string does not follow the path grammar
    #[error("malformed path '{path}': {reason} at position {position}")]
    Malformed {
        /// The offending path string
        path: String,
        /// What was wrong with it
        reason: String,
        /// Character offset where the problem was detected
        position: usize,
    },
}

/// Failure at the public retrieval boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GetError {
    /// The path string could not be compiled
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Strict retrieval resolved to nothing
    #[error("strict retrieval of '{path}' found nothing: {reason}")]
    Strict {
        /// Path that was requested
        path: String,
        /// Why nothing was found
        reason: MissingReason,
    },
}

/// Failure while running a [`Mapper`](crate::mapper::Mapper)
#[derive(Debug, Error)]
pub enum MapperError {
    /// The mapping function itself failed; surfaced unchanged
    #[error(transparent)]
    Mapping(#[from] anyhow::Error),

    /// A drop marker names a container above the output root
    #[error("drop level {level} reaches above the output root (marker is {depth} levels deep)")]
    DropOutOfBounds {
        /// Requested level
        level: crate::mapper::DropLevel,
        /// Containers between the marker and the root, inclusive
        depth: usize,
    },
}

/// Invalid or unreadable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds a value outside its accepted range
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// Explanation
        message: String,
    },

    /// Configuration JSON could not be deserialized
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment variable held an unparseable value
    #[error("environment variable {var} has invalid value '{value}'")]
    Env {
        /// Variable name
        var: &'static str,
        /// Raw value found
        value: String,
    },
}
