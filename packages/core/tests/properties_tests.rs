//! Cross-cutting properties of parsing, traversal, mapping and validation

mod common;

use dendro_core::prelude::*;
use serde_json::json;

use common::{deep_nested_list, nested_data, simple_data};

const PATHS: &[&str] = &[
    "data",
    "data[0].patient.id",
    "data[*].patient.ints",
    "data[*].patient.dicts[*].[num, inner.msg]",
    "data[1:3].patient.dict.char",
    "data[-1].patient.ints[0]",
    "data[100]",
];

#[test]
fn test_resolution_is_deterministic() {
    let source = nested_data();
    for raw in PATHS {
        let first = resolve(&source, &parse(raw).unwrap());
        let second = resolve(&source, &parse(raw).unwrap());
        let cached = resolve_str(&source, raw).unwrap();
        assert_eq!(first, second, "{raw}");
        assert_eq!(first, cached, "{raw}");
    }
}

#[test]
fn test_single_key_round_trip() {
    let source = simple_data();
    let Value::Object(map) = &source else {
        panic!("fixture is a mapping");
    };
    for (key, value) in map {
        assert_eq!(resolve_str(&source, key).unwrap(), Outcome::Found(value.clone()));
    }
}

#[test]
fn test_wildcard_collects_present_keys() {
    let list = deep_nested_list();
    let mut expected = Vec::new();
    for item in list.as_array().into_iter().flatten() {
        if let Some(ints) = item["patient"].get("ints") {
            expected.push(ints.clone());
        }
    }
    let patients: Vec<Value> = list
        .as_array()
        .into_iter()
        .flatten()
        .map(|item| item["patient"].clone())
        .collect();
    assert_eq!(
        resolve_str(&Value::Array(patients), "[*].ints").unwrap(),
        Outcome::Found(Value::Array(expected))
    );
}

#[test]
fn test_empty_removal_is_idempotent() {
    let messy = json!({
        "a": {"b": null, "c": [{}, [], "", {"d": [null]}]},
        "e": [0, false, "x"],
        "f": {"g": {"h": {}}},
    });
    let once = remove_empty(messy);
    assert_eq!(once, json!({"e": [0, false, "x"]}));
    assert_eq!(remove_empty(once.clone()), once);
}

#[test]
fn test_and_composition_matches_individual_rules() {
    let r1 = || Rule::new("a", IsRequired);
    let r2 = || Rule::new("b", InRange::new(0, 10));
    for data in [
        json!({"a": 1, "b": 5}),
        json!({"b": 50}),
        json!({"a": 1, "b": 50}),
        json!({}),
    ] {
        let mut expected = Vec::new();
        for rule in [r1(), r2()] {
            if let Err(errors) = validate(&data, &rule) {
                expected.extend(errors.into_inner());
            }
        }
        let combined = validate(&data, &(r1() & r2()));
        match combined {
            Ok(_) => assert!(expected.is_empty()),
            Err(errors) => assert_eq!(errors.into_inner(), expected),
        }
    }
}
