//! Post-order cleanup of the mapper output tree
//!
//! Drop markers are resolved first. Each marker becomes a pending request
//! that travels up the container chain until the container it names takes
//! it; that container (or one of its slots) is replaced by null. Empty
//! removal and keep unwrapping then happen in one bottom-up pass.

use super::markers::DropLevel;
use super::node::Node;
use crate::error::MapperError;
use crate::value::{Mapping, Value, ValueExt};

/// A drop request travelling towards its target container
#[derive(Debug, Clone, Copy)]
struct Pending {
    level: DropLevel,
    /// Containers still to climb for fixed-distance levels
    remaining: usize,
    /// Containers climbed so far
    depth: usize,
}

impl Pending {
    fn climbed(self) -> Self {
        Pending {
            remaining: self.remaining.saturating_sub(1),
            depth: self.depth + 1,
            ..self
        }
    }

    fn out_of_bounds(self) -> MapperError {
        MapperError::DropOutOfBounds {
            level: self.level,
            depth: self.depth,
        }
    }
}

/// Resolve every drop marker under `root`
///
/// Reaching exactly the root empties it; climbing past it is an error.
pub(super) fn apply_drops(root: Node) -> Result<Node, MapperError> {
    let (node, pending) = resolve_drops(root, true);
    match pending.into_iter().next() {
        Some(request) => Err(request.out_of_bounds()),
        None => Ok(node),
    }
}

/// Process one node, returning the rewritten node and requests for ancestors
fn resolve_drops(node: Node, is_root: bool) -> (Node, Vec<Pending>) {
    match node {
        Node::Drop(DropLevel::None) => (Node::null(), Vec::new()),
        Node::Drop(level) => {
            let request = Pending {
                level,
                remaining: level.climb().unwrap_or(0),
                depth: 0,
            };
            (Node::null(), vec![request])
        }
        Node::Map(entries) => {
            let mut up = Vec::new();
            let mut null_self = false;
            let entries = entries
                .into_iter()
                .map(|(key, child)| {
                    let (child, pending) = resolve_drops(child, false);
                    let child = route(child, pending, false, is_root, &mut null_self, &mut up);
                    (key, child)
                })
                .collect();
            finish_container(Node::Map(entries), null_self, is_root, up)
        }
        Node::List(items) => {
            let mut up = Vec::new();
            let mut null_self = false;
            let items = items
                .into_iter()
                .map(|child| {
                    let (child, pending) = resolve_drops(child, false);
                    route(child, pending, true, is_root, &mut null_self, &mut up)
                })
                .collect();
            finish_container(Node::List(items), null_self, is_root, up)
        }
        leaf @ (Node::Value(_) | Node::Keep(_)) => (leaf, Vec::new()),
    }
}

/// Decide, for each request raised by one child, whether this container takes it
fn route(
    child: Node,
    pending: Vec<Pending>,
    in_list: bool,
    is_root: bool,
    null_self: &mut bool,
    up: &mut Vec<Pending>,
) -> Node {
    let mut null_child = false;
    for request in pending {
        let request = request.climbed();
        match request.level {
            DropLevel::ThisListItem if in_list => null_child = true,
            DropLevel::ThisLevelRoot if is_root => null_child = true,
            DropLevel::ThisListItem | DropLevel::ThisLevelRoot => up.push(request),
            _ if request.remaining == 0 => *null_self = true,
            _ => up.push(request),
        }
    }
    if null_child { Node::null() } else { child }
}

fn finish_container(
    container: Node,
    null_self: bool,
    is_root: bool,
    up: Vec<Pending>,
) -> (Node, Vec<Pending>) {
    match (null_self, is_root) {
        (true, true) => (empty_like(&container), up),
        (true, false) => (Node::null(), up),
        (false, _) => (container, up),
    }
}

fn empty_like(node: &Node) -> Node {
    match node {
        Node::List(_) => Node::List(Vec::new()),
        _ => Node::map(),
    }
}

/// Convert a drop-free tree into a value, removing empties when asked
///
/// The root is always returned, possibly as an empty container.
pub(super) fn finish(root: Node, strip: bool) -> Value {
    match root {
        Node::Map(_) => finish_node(root, strip).unwrap_or_else(|| Value::Object(Mapping::new())),
        Node::List(_) => finish_node(root, strip).unwrap_or_else(|| Value::Array(Vec::new())),
        Node::Value(value) if strip => remove_empty(value),
        Node::Value(value) | Node::Keep(value) => value,
        Node::Drop(_) => Value::Null,
    }
}

fn finish_node(node: Node, strip: bool) -> Option<Value> {
    match node {
        Node::Keep(value) => Some(value),
        Node::Value(value) if strip => strip_empty(value),
        Node::Value(value) => Some(value),
        Node::Drop(_) => (!strip).then_some(Value::Null),
        Node::Map(entries) => {
            let map: Mapping = entries
                .into_iter()
                .filter_map(|(key, child)| finish_node(child, strip).map(|value| (key, value)))
                .collect();
            (!strip || !map.is_empty()).then_some(Value::Object(map))
        }
        Node::List(items) => {
            let list: Vec<Value> = items
                .into_iter()
                .filter_map(|child| finish_node(child, strip))
                .collect();
            (!strip || !list.is_empty()).then_some(Value::Array(list))
        }
    }
}

/// Recursively remove nulls, empty strings and empty containers
///
/// Works bottom-up, so a container emptied by removing its children is
/// removed too. The root itself is kept (a fully emptied mapping stays `{}`).
/// Idempotent: cleaning an already clean value changes nothing.
#[must_use]
pub fn remove_empty(value: Value) -> Value {
    match value {
        Value::Object(_) => strip_empty(value).unwrap_or_else(|| Value::Object(Mapping::new())),
        Value::Array(_) => strip_empty(value).unwrap_or_else(|| Value::Array(Vec::new())),
        scalar => scalar,
    }
}

fn strip_empty(value: Value) -> Option<Value> {
    let stripped = match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter_map(|(key, child)| strip_empty(child).map(|child| (key, child)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().filter_map(strip_empty).collect()),
        scalar => scalar,
    };
    (!stripped.is_empty_value()).then_some(stripped)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn marker_object(level: DropLevel) -> Node {
        Node::from_entries([(
            "object".to_string(),
            Node::from_entries([
                ("static_value".to_string(), Node::from("Some value")),
                ("maybe".to_string(), Node::Drop(level)),
            ]),
        )])
    }

    #[test]
    fn this_object_nulls_enclosing_mapping() {
        let dropped = apply_drops(marker_object(DropLevel::ThisObject)).unwrap();
        assert_eq!(finish(dropped, false), json!({"object": null}));
    }

    #[test]
    fn parent_reaching_root_empties_it() {
        let dropped = apply_drops(marker_object(DropLevel::Parent)).unwrap();
        assert_eq!(finish(dropped, false), json!({}));
    }

    #[test]
    fn climbing_past_root_is_an_error() {
        let err = apply_drops(marker_object(DropLevel::Grandparent)).unwrap_err();
        assert!(matches!(
            err,
            MapperError::DropOutOfBounds {
                level: DropLevel::Grandparent,
                depth: 2
            }
        ));
    }

    #[test]
    fn list_item_level_nulls_the_element() {
        let root = Node::from_entries([(
            "items".to_string(),
            Node::List(vec![
                Node::from_entries([
                    ("id".to_string(), Node::from(1)),
                    ("x".to_string(), Node::from_entries([("y".to_string(), Node::Drop(DropLevel::ThisListItem))])),
                ]),
                Node::from_entries([("id".to_string(), Node::from(2))]),
            ]),
        )]);
        let dropped = apply_drops(root).unwrap();
        assert_eq!(finish(dropped, true), json!({"items": [{"id": 2}]}));
    }

    #[test]
    fn level_root_nulls_top_level_entry() {
        let root = Node::from_entries([
            ("a".to_string(), Node::from_entries([("b".to_string(), Node::from_entries([("c".to_string(), Node::Drop(DropLevel::ThisLevelRoot))]))])),
            ("keep".to_string(), Node::from(1)),
        ]);
        let dropped = apply_drops(root).unwrap();
        assert_eq!(finish(dropped, false), json!({"a": null, "keep": 1}));
    }

    #[test]
    fn keep_survives_empty_removal() {
        let root = Node::from_entries([
            ("empty".to_string(), Node::from("")),
            ("kept".to_string(), Node::keep("")),
            ("nested".to_string(), Node::Value(json!({"a": {"b": []}}))),
        ]);
        assert_eq!(finish(root, true), json!({"kept": ""}));
    }

    #[test]
    fn remove_empty_is_idempotent() {
        let once = remove_empty(json!({"a": [null, "", {"b": {}}], "c": 0, "d": false}));
        assert_eq!(once, json!({"c": 0, "d": false}));
        assert_eq!(remove_empty(once.clone()), once);
    }
}
