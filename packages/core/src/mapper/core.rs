//! Mapper runner

use std::fmt;

use super::cleanup::{apply_drops, finish};
use super::node::Node;
use crate::config::Config;
use crate::error::MapperError;
use crate::traversal::strict;
use crate::value::Value;

/// Tree-construction function run by a [`Mapper`]
pub type MappingFn = Box<dyn Fn(&Value) -> anyhow::Result<Node> + Send + Sync>;

/// Runs a mapping function and cleans up its output
///
/// ```
/// use dendro_core::prelude::*;
/// use serde_json::json;
///
/// let mapper = Mapper::new(|source| {
///     Ok(dendro_core::node!({
///         "name": get_node(source, "patient.name", &GetOptions::new())?,
///         "age": get_node(source, "patient.age", &GetOptions::new())?,
///     }))
/// });
/// let out = mapper.run(&json!({"patient": {"name": "Ada"}})).unwrap();
/// assert_eq!(out, json!({"name": "Ada"}));
/// ```
pub struct Mapper {
    mapping: MappingFn,
    remove_empty: bool,
    strict: bool,
}

impl Mapper {
    /// Create a mapper with empty removal on and strict mode off
    pub fn new<F>(mapping: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Node> + Send + Sync + 'static,
    {
        Self {
            mapping: Box::new(mapping),
            remove_empty: true,
            strict: false,
        }
    }

    /// Create a mapper using the defaults from `config`
    pub fn from_config<F>(config: &Config, mapping: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Node> + Send + Sync + 'static,
    {
        Self::new(mapping)
            .remove_empty(config.remove_empty)
            .strict(config.strict)
    }

    /// Whether to strip nulls, empty strings and empty containers
    #[must_use]
    pub fn remove_empty(mut self, remove_empty: bool) -> Self {
        self.remove_empty = remove_empty;
        self
    }

    /// Make every retrieval inside the mapping function strict
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the output tree for `source`
    ///
    /// # Errors
    /// * `MapperError::Mapping` when the mapping function fails; the error is
    ///   passed through unchanged
    /// * `MapperError::DropOutOfBounds` when a drop marker names a container
    ///   above the output root
    pub fn run(&self, source: &Value) -> Result<Value, MapperError> {
        let span = tracing::debug_span!(
            "mapper.run",
            remove_empty = self.remove_empty,
            strict = self.strict
        );
        let _enter = span.enter();

        let node = if self.strict {
            strict::scoped(|| (self.mapping)(source))
        } else {
            (self.mapping)(source)
        }?;

        let node = apply_drops(node)?;
        let output = finish(node, self.remove_empty);
        tracing::debug!(kind = %crate::value::ValueKind::of(&output), "mapper run complete");
        Ok(output)
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("remove_empty", &self.remove_empty)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}
