//! Retrieval decorations

use std::fmt;
use std::sync::Arc;

use crate::mapper::DropLevel;
use crate::value::Value;

/// Caller-supplied transform applied to a found value
///
/// Failures never reach the caller: an `Err`, a panic or a null result turns
/// the retrieval into `Missing(TransformFailed)`.
pub type Transform = Arc<dyn Fn(Value) -> anyhow::Result<Value> + Send + Sync>;

/// Caller-supplied condition a found value must satisfy
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Optional decorations for a single retrieval
///
/// Applied in order: `flatten`, `only_if`, the `apply` chain, then at the
/// boundary `strict`, `drop_level` and `default`.
#[derive(Clone, Default)]
pub struct GetOptions {
    /// Transforms applied in order to a found value
    pub apply: Vec<Transform>,
    /// Keep the value only when this returns true
    pub only_if: Option<Predicate>,
    /// How far a missing result nulls out the mapper output
    pub drop_level: DropLevel,
    /// Flatten a sequence of sequences by one level
    pub flatten: bool,
    /// Value returned for missing results (null when unset)
    pub default: Option<Value>,
    /// Turn a missing result into [`GetError::Strict`](crate::error::GetError::Strict)
    pub strict: bool,
}

impl GetOptions {
    /// No decorations
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an infallible transform
    #[must_use]
    pub fn apply<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.apply.push(Arc::new(move |value| Ok(f(value))));
        self
    }

    /// Append a fallible transform
    #[must_use]
    pub fn try_apply<F>(mut self, f: F) -> Self
    where
        F: Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.apply.push(Arc::new(f));
        self
    }

    /// Append an already shared transform
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.apply.push(transform);
        self
    }

    #[must_use]
    pub fn only_if<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.only_if = Some(Arc::new(predicate));
        self
    }

    #[must_use]
    pub fn drop_level(mut self, level: DropLevel) -> Self {
        self.drop_level = level;
        self
    }

    #[must_use]
    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    #[must_use]
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl fmt::Debug for GetOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetOptions")
            .field("apply", &self.apply.len())
            .field("only_if", &self.only_if.is_some())
            .field("drop_level", &self.drop_level)
            .field("flatten", &self.flatten)
            .field("default", &self.default)
            .field("strict", &self.strict)
            .finish()
    }
}
