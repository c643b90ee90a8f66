//! Decoration methods
//!
//! Each call consumes and returns the builder. Transforms run in the order
//! they are added.

use dendro_core::traversal::Transform;
use dendro_core::{DropLevel, Value};

use crate::builder::core::Get;

impl Get {
    /// Append an infallible transform
    ///
    /// # Examples
    /// ```
    /// use dendro::Get;
    /// use serde_json::json;
    ///
    /// let source = json!({"n": 20});
    /// let doubled = Get::path("n")
    ///     .apply(|v| json!(v.as_i64().unwrap_or_default() * 2))
    ///     .from(&source)?;
    /// assert_eq!(doubled, json!(40));
    /// # Ok::<(), dendro::GetError>(())
    /// ```
    #[must_use]
    pub fn apply<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.options = self.options.apply(f);
        self
    }

    /// Append a fallible transform; an `Err` makes the retrieval missing
    #[must_use]
    pub fn try_apply<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.options = self.options.try_apply(f);
        self
    }

    /// Append an already shared transform
    #[must_use]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.options = self.options.with_transform(transform);
        self
    }

    /// Keep the found value only when `predicate` holds
    #[must_use]
    pub fn only_if<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.options = self.options.only_if(predicate);
        self
    }

    /// Turn a missing result into a drop marker when used through [`Get::node`]
    #[must_use]
    pub fn drop_level(mut self, level: DropLevel) -> Self {
        self.options = self.options.drop_level(level);
        self
    }

    /// Flatten a sequence of sequences by one level
    #[must_use]
    pub fn flatten(mut self) -> Self {
        self.options = self.options.flatten(true);
        self
    }

    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.options = self.options.default_value(value);
        self
    }

    /// Fail with `GetError::Strict` instead of returning a missing result
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict(true);
        self
    }
}
