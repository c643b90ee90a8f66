//! Core `Get` builder structure

use std::fmt;

use dendro_core::GetOptions;

/// Retrieval of a single path with optional decorations
///
/// A `Get` is reusable: terminals borrow it, so one builder can be evaluated
/// against many sources (typically inside a mapping function).
#[derive(Clone)]
pub struct Get {
    /// Path string, compiled through the global path cache on each run
    pub(crate) path: String,
    /// Decorations forwarded to the retrieval entry points
    pub(crate) options: GetOptions,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl Get {
    /// Start building a retrieval of `path`
    #[must_use]
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            options: GetOptions::default(),
            debug_enabled: false,
        }
    }

    /// Start from already assembled options
    #[must_use]
    pub fn with_options(path: impl Into<String>, options: GetOptions) -> Self {
        Self {
            path: path.into(),
            options,
            debug_enabled: false,
        }
    }

    /// Log every evaluation of this builder at debug level
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// The path this builder retrieves
    #[inline]
    #[must_use]
    pub fn path_str(&self) -> &str {
        &self.path
    }

    /// The collected decorations
    #[inline]
    #[must_use]
    pub fn options(&self) -> &GetOptions {
        &self.options
    }
}

impl fmt::Debug for Get {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Get")
            .field("path", &self.path)
            .field("options", &self.options)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
