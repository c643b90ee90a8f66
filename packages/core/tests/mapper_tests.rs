//! Mapper tests

mod common;

use dendro_core::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{nested_data, simple_data};

fn opts() -> GetOptions {
    GetOptions::new()
}

#[test]
fn test_drop_this_object_without_empty_removal() {
    let mapper = Mapper::new(|source| {
        Ok(node!({
            "object": {
                "static_value": "Some value",
                "maybe_present_value": get_node(
                    source,
                    "some.missing.key",
                    &GetOptions::new().drop_level(DropLevel::ThisObject),
                )?,
            }
        }))
    })
    .remove_empty(false);

    assert_eq!(mapper.run(&json!({"a": "b"})).unwrap(), json!({"object": null}));
}

#[test]
fn test_basic_mapping_removes_empty_values() {
    let mapper = Mapper::new(|source| {
        Ok(node!({
            "CASE_constant": 123,
            "CASE_single": get_node(source, "data.patient.id", &opts())?,
            "CASE_nested": {
                "id": get_node(source, "data.patient.id", &opts())?,
                "missing": get_node(source, "data.patient.nope", &opts())?,
            },
            "CASE_empty_list": [],
            "CASE_empty_string": "",
            "CASE_list": [null, get_node(source, "list_data[0].patient.id", &opts())?, {}],
        }))
    });

    assert_eq!(
        mapper.run(&simple_data()).unwrap(),
        json!({
            "CASE_constant": 123,
            "CASE_single": "abc123",
            "CASE_nested": {"id": "abc123"},
            "CASE_list": ["abc123"],
        })
    );
}

#[test]
fn test_keep_marker_survives_cleanup() {
    let mapper = Mapper::new(|_| {
        Ok(node!({
            "empty_kept": Node::keep(json!({})),
            "string_kept": Node::keep(""),
            "nested": {"inner": Node::keep(json!([]))},
            "dropped": "",
        }))
    });
    assert_eq!(
        mapper.run(&json!({})).unwrap(),
        json!({"empty_kept": {}, "string_kept": "", "nested": {"inner": []}})
    );
}

#[test]
fn test_drop_levels() {
    let drop = |level: DropLevel| GetOptions::new().drop_level(level);
    let source = json!({"present": 1});

    let parent = Mapper::new(move |source| {
        Ok(node!({
            "first": {
                "second": {
                    "value": get_node(source, "absent", &drop(DropLevel::Parent))?,
                    "other": 2,
                },
                "sibling": 3,
            },
            "root_sibling": get_node(source, "present", &GetOptions::new())?,
        }))
    });
    assert_eq!(
        parent.run(&source).unwrap(),
        json!({"root_sibling": 1})
    );

    let grandparent = Mapper::new(move |source| {
        Ok(node!({
            "first": {
                "second": {
                    "value": get_node(source, "absent", &drop(DropLevel::Grandparent))?,
                },
            },
            "root_sibling": 1,
        }))
    })
    .remove_empty(false);
    assert_eq!(grandparent.run(&source).unwrap(), json!({}));

    let too_far = Mapper::new(move |source| {
        Ok(node!({
            "first": {"value": get_node(source, "absent", &drop(DropLevel::GreatGrandparent))?}
        }))
    });
    assert!(matches!(
        too_far.run(&source),
        Err(MapperError::DropOutOfBounds {
            level: DropLevel::GreatGrandparent,
            ..
        })
    ));
}

#[test]
fn test_drop_present_values_keep_everything() {
    let mapper = Mapper::new(|source| {
        Ok(node!({
            "obj": {
                "a": get_node(source, "present", &GetOptions::new().drop_level(DropLevel::ThisObject))?,
                "b": 2,
            }
        }))
    });
    assert_eq!(mapper.run(&json!({"present": 1})).unwrap(), json!({"obj": {"a": 1, "b": 2}}));
}

#[test]
fn test_drop_this_list_item() {
    let mapper = Mapper::new(|source| {
        let items = source["data"]
            .as_array()
            .map(|patients| {
                patients
                    .iter()
                    .map(|patient| {
                        Ok(node!({
                            "id": get_node(patient, "patient.id", &opts())?,
                            "ints": {
                                "first": get_node(
                                    patient,
                                    "patient.ints[0]",
                                    &opts().drop_level(DropLevel::ThisListItem),
                                )?,
                            },
                        }))
                    })
                    .collect::<Result<Vec<Node>, GetError>>()
            })
            .transpose()?
            .unwrap_or_default();
        Ok(node!({ "patients": items }))
    });

    assert_eq!(
        mapper.run(&nested_data()).unwrap(),
        json!({
            "patients": [
                {"id": "abc123", "ints": {"first": 1}},
                {"id": "def456", "ints": {"first": 4}},
                {"id": "ghi789", "ints": {"first": 7}},
            ]
        })
    );
}

#[test]
fn test_mapping_errors_propagate_unchanged() {
    let mapper = Mapper::new(|_| Err(anyhow::anyhow!("upstream exploded")));
    let err = mapper.run(&json!({})).unwrap_err();
    assert!(matches!(err, MapperError::Mapping(_)));
    assert_eq!(err.to_string(), "upstream exploded");
}

#[test]
fn test_strict_mapper_fails_on_missing_keys() {
    let mapper = Mapper::new(|source| {
        Ok(node!({
            "id": get_node(source, "data.patient.id", &GetOptions::new())?,
            "nope": get_node(source, "data.patient.nope", &GetOptions::new())?,
        }))
    });

    assert_eq!(
        mapper.run(&simple_data()).unwrap(),
        json!({"id": "abc123"})
    );

    let strict = mapper.strict(true);
    let err = strict.run(&simple_data()).unwrap_err();
    let MapperError::Mapping(inner) = err else {
        panic!("expected mapping error");
    };
    assert!(matches!(
        inner.downcast_ref::<GetError>(),
        Some(GetError::Strict { .. })
    ));
    // strict scope ends with the run
    assert_eq!(
        get(&simple_data(), "data.patient.nope", &GetOptions::new()).unwrap(),
        Value::Null
    );
}

#[test]
fn test_mapper_is_idempotent() {
    let mapper = Mapper::new(|source| {
        Ok(node!({
            "ids": get_node(source, "list_data[*].patient.id", &opts())?,
            "empty": {"x": null},
        }))
    });
    let source = simple_data();
    let first = mapper.run(&source).unwrap();
    let second = mapper.run(&source).unwrap();
    assert_eq!(first, second);
    assert_eq!(remove_empty(first.clone()), first);
}

#[test]
fn test_root_is_always_returned() {
    let mapper = Mapper::new(|_| Ok(node!({"a": null, "b": {"c": ""}})));
    assert_eq!(mapper.run(&json!({})).unwrap(), json!({}));
}

#[test]
fn test_from_config() {
    let config = Config {
        remove_empty: false,
        ..Config::default()
    };
    let mapper = Mapper::from_config(&config, |_| Ok(node!({"a": null})));
    assert_eq!(mapper.run(&json!({})).unwrap(), json!({"a": null}));
}

#[test]
fn test_source_is_not_mutated() {
    let source = simple_data();
    let before = source.clone();
    let mapper = Mapper::new(|source| Ok(node!({"p": get_node(source, "data.patient", &opts())?})));
    let _ = mapper.run(&source).unwrap();
    assert_eq!(source, before);
}
