//! Error constructor helpers

use super::types::ParseError;

impl ParseError {
    /// Creates a malformed path error
    ///
    /// # Arguments
    /// * `path` - The path string being parsed
    /// * `reason` - Specific reason why the path is invalid
    /// * `position` - Character position where the error was detected
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>, position: usize) -> Self {
        ParseError::Malformed {
            path: path.into(),
            reason: reason.into(),
            position,
        }
    }

    /// Character position recorded in the error
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            ParseError::Malformed { position, .. } => *position,
        }
    }

    /// Human-readable reason without the path prefix
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            ParseError::Malformed { reason, .. } => reason,
        }
    }
}

/// Creates a malformed path error
///
/// Free-function form of [`ParseError::malformed`] for use in parser internals.
#[inline]
pub fn malformed_path_error(
    path: impl Into<String>,
    reason: impl Into<String>,
    position: usize,
) -> ParseError {
    ParseError::malformed(path, reason, position)
}
