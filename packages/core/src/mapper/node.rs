//! Mapper output tree

use super::markers::DropLevel;
use crate::value::{Mapping, Value};

/// A node of the tree a mapping function builds
///
/// Carries the out-of-band drop and keep annotations next to plain values.
/// Converted to a [`Value`] by the mapper's cleanup pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Plain value (may itself be a nested mapping or sequence)
    Value(Value),
    /// Mapping with unique keys in insertion order
    Map(Vec<(String, Node)>),
    /// Sequence
    List(Vec<Node>),
    /// A missing retrieval asking to null an ancestor
    Drop(DropLevel),
    /// A value exempt from empty removal
    Keep(Value),
}

impl Node {
    /// Empty mapping node
    #[inline]
    #[must_use]
    pub fn map() -> Self {
        Node::Map(Vec::new())
    }

    /// Null value node
    #[inline]
    #[must_use]
    pub fn null() -> Self {
        Node::Value(Value::Null)
    }

    /// Keep `value` even when it is empty
    #[inline]
    #[must_use]
    pub fn keep(value: impl Into<Value>) -> Self {
        Node::Keep(value.into())
    }

    /// Mapping node from entries; a repeated key replaces the earlier value in place
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Node)>) -> Self {
        let mut node = Node::map();
        for (key, value) in entries {
            node.insert(key, value);
        }
        node
    }

    /// Insert into a mapping node, returning the replaced node
    ///
    /// Inserting into anything else than [`Node::Map`] is a no-op returning `None`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        let Node::Map(entries) = self else {
            return None;
        };
        let key = key.into();
        let value = value.into();
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                entries.push((key, value));
                None
            }
        }
    }

    /// Lookup in a mapping node
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Map(entries) => entries
                .iter()
                .find_map(|(existing, value)| (existing == key).then_some(value)),
            _ => None,
        }
    }

    /// Whether this node is a drop marker
    #[inline]
    #[must_use]
    pub fn is_drop(&self) -> bool {
        matches!(self, Node::Drop(_))
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::null()
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::Value(value)
    }
}

impl From<Mapping> for Node {
    fn from(map: Mapping) -> Self {
        Node::Value(Value::Object(map))
    }
}

impl From<DropLevel> for Node {
    fn from(level: DropLevel) -> Self {
        Node::Drop(level)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(items)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Node::null, Into::into)
    }
}

macro_rules! node_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Value(Value::from(value))
                }
            }
        )*
    };
}

node_from_value!(bool, i32, i64, u32, u64, f64, &str, String);
