//! Terminal methods
//!
//! Execute the retrieval against a source tree.

use dendro_core::error::ParseResult;
use dendro_core::traversal;
use dendro_core::{GetError, Node, Outcome, Value};

use crate::builder::core::Get;

impl Get {
    /// Retrieve a plain value
    ///
    /// Missing results become the default (null when unset).
    ///
    /// # Errors
    /// * `GetError::Parse` when the path is malformed
    /// * `GetError::Strict` when the result is missing under strict retrieval
    pub fn from(&self, source: &Value) -> Result<Value, GetError> {
        if self.debug_enabled {
            log::debug!("Get builder: evaluating '{}' with {:?}", self.path, self.options);
        }
        traversal::get(source, &self.path, &self.options)
    }

    /// Retrieve a mapper output node
    ///
    /// Missing results with a drop level become [`Node::Drop`] markers.
    ///
    /// # Errors
    /// Same as [`Get::from`].
    pub fn node(&self, source: &Value) -> Result<Node, GetError> {
        if self.debug_enabled {
            log::debug!("Get builder: evaluating node '{}'", self.path);
        }
        traversal::get_node(source, &self.path, &self.options)
    }

    /// Retrieve the decorated outcome without applying default, drop or strict
    ///
    /// # Errors
    /// `ParseError::Malformed` when the path is malformed.
    pub fn outcome(&self, source: &Value) -> ParseResult<Outcome> {
        let outcome = traversal::retrieve(source, &self.path, &self.options)?;
        if self.debug_enabled {
            tracing::debug!(path = %self.path, found = outcome.is_found(), "Get builder outcome");
        }
        Ok(outcome)
    }

    /// Turn the builder into a transform usable inside another retrieval
    ///
    /// The nested retrieval runs against the transformed value, so
    /// `map_each(Get::path("id").into_transform())` extracts `id` from every
    /// element of a sequence.
    #[must_use]
    pub fn into_transform(self) -> impl Fn(Value) -> anyhow::Result<Value> + Clone + Send + Sync + 'static {
        move |value| Ok(self.from(&value)?)
    }
}
