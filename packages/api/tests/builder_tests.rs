//! Get builder tests

use dendro::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn source() -> Value {
    json!({
        "patient": {
            "id": "abc123",
            "active": true,
            "ints": [1, 2, 3],
            "visits": [
                {"codes": ["a", "b"]},
                {"codes": ["c"]},
            ],
        }
    })
}

#[test]
fn test_plain_retrieval() {
    let data = source();
    assert_eq!(Get::path("patient.id").from(&data).unwrap(), json!("abc123"));
    assert_eq!(dendro::get("patient.ints[-1]").from(&data).unwrap(), json!(3));
    assert_eq!(Get::path("patient.nope").from(&data).unwrap(), Value::Null);
}

#[test]
fn test_default_and_apply() {
    let data = source();
    let upper = |v: Value| json!(v.as_str().unwrap_or_default().to_uppercase());

    assert_eq!(
        Get::path("patient.id").apply(upper).from(&data).unwrap(),
        json!("ABC123")
    );
    // The default is returned as-is; transforms only see found values
    assert_eq!(
        Get::path("patient.name").default("n/a").apply(upper).from(&data).unwrap(),
        json!("n/a")
    );
}

#[test]
fn test_flatten_and_only_if() {
    let data = source();
    assert_eq!(
        Get::path("patient.visits[*].codes").from(&data).unwrap(),
        json!([["a", "b"], ["c"]])
    );
    assert_eq!(
        Get::path("patient.visits[*].codes").flatten().from(&data).unwrap(),
        json!(["a", "b", "c"])
    );
    assert_eq!(
        Get::path("patient.active")
            .only_if(|v| v == &json!(false))
            .default("inactive only")
            .from(&data)
            .unwrap(),
        json!("inactive only")
    );
}

#[test]
fn test_strict_and_outcome() {
    let data = source();
    let err = Get::path("patient.ints[10]").strict().from(&data).unwrap_err();
    assert!(matches!(
        err,
        GetError::Strict {
            reason: MissingReason::IndexOutOfBounds { index: 10, len: 3 },
            ..
        }
    ));

    let outcome = Get::path("patient.id.deeper").outcome(&data).unwrap();
    assert!(matches!(
        outcome,
        Outcome::Missing(MissingReason::TypeMismatch { .. })
    ));
}

#[test]
fn test_malformed_path_is_an_error() {
    let data = source();
    assert!(matches!(
        Get::path("patient..id").from(&data),
        Err(GetError::Parse(_))
    ));
    assert!(Get::path("patient[").outcome(&data).is_err());
}

#[test]
fn test_node_produces_drop_marker() {
    let data = source();
    let getter = Get::path("patient.nope").drop_level(DropLevel::Parent);
    assert_eq!(getter.node(&data).unwrap(), Node::Drop(DropLevel::Parent));
    assert_eq!(
        Get::path("patient.id").drop_level(DropLevel::Parent).node(&data).unwrap(),
        Node::Value(json!("abc123"))
    );
}

#[test]
fn test_builder_is_reusable() {
    let getter = Get::path("id").debug();
    let ids: Vec<Value> = [json!({"id": 1}), json!({"id": 2}), json!({})]
        .iter()
        .map(|item| getter.from(item).unwrap())
        .collect();
    assert_eq!(ids, vec![json!(1), json!(2), Value::Null]);
    assert_eq!(getter.path_str(), "id");
}

#[test]
fn test_nested_get_as_transform() {
    let data = source();
    let codes = Get::path("patient.visits")
        .try_apply(partials::map_each(Get::path("codes[0]").into_transform()))
        .from(&data)
        .unwrap();
    assert_eq!(codes, json!(["a", "c"]));
}
