//! Shared fixtures for integration tests

#![allow(dead_code)]

use serde_json::{Value, json};

/// Initialise log output once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn simple_nested_list() -> Value {
    json!([
        {"patient": {"id": "abc123", "active": true}},
        {"patient": {"id": "def456", "active": true}},
        {"patient": {"id": "ghi789", "active": false}},
    ])
}

pub fn deep_nested_list() -> Value {
    json!([
        {
            "patient": {
                "id": "abc123",
                "active": true,
                "ints": [1, 2, 3],
                "dict": {"char": "a", "inner": {"msg": "A!"}},
                "dicts": [
                    {"num": 1, "text": "one", "inner": {"msg": "One!"}},
                    {"num": 2, "text": "two", "inner": {"msg": "Two!"}},
                ],
            }
        },
        {
            "patient": {
                "id": "def456",
                "active": false,
                "ints": [4, 5, 6],
                "dict": {"char": "b", "inner": {"msg": "B!"}},
                "dicts": [
                    {"num": 3, "text": "three", "inner": {"msg": "Three!"}},
                    {"num": 4, "text": "four", "inner": {"msg": "Four!"}},
                ],
            }
        },
        {
            "patient": {
                "id": "ghi789",
                "active": true,
                "ints": [7, 8, 9],
                "dict": {"char": "c", "inner": {"msg": "C!"}},
                "dicts": [
                    {"num": 5, "text": "five", "inner": {"msg": "Five!"}},
                    {"num": 6, "text": "six", "inner": {"msg": "Six!"}},
                ],
            }
        },
        {
            "patient": {
                "id": "jkl101112",
                "active": true,
                "dict": {"char": "d", "inner": {"msg": "D!"}},
                "dicts": [{"num": 7, "text": "seven", "inner": {"msg": "Seven!"}}],
            }
        },
    ])
}

pub fn simple_data() -> Value {
    json!({
        "data": {"patient": {"id": "abc123", "active": true}},
        "list_data": simple_nested_list(),
    })
}

pub fn nested_data() -> Value {
    json!({ "data": deep_nested_list() })
}
