//! Configuration tests

use std::collections::HashMap;

use dendro_core::config::{ENV_PATH_CACHE_CAPACITY, ENV_REMOVE_EMPTY, ENV_STRICT};
use dendro_core::{Config, ConfigError};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.path_cache_capacity, 4096);
    assert!(config.remove_empty);
    assert!(!config.strict);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_fills_defaults() {
    let config = Config::from_json_str(r#"{"strict": true}"#).unwrap();
    assert_eq!(
        config,
        Config {
            strict: true,
            ..Config::default()
        }
    );
}

#[test]
fn test_from_json_rejects_unknown_and_invalid() {
    assert!(matches!(
        Config::from_json_str(r#"{"strictly": true}"#),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_json_str(r#"{"path_cache_capacity": 0}"#),
        Err(ConfigError::InvalidValue {
            field: "path_cache_capacity",
            ..
        })
    ));
}

#[test]
fn test_from_lookup() {
    let config = Config::from_lookup(lookup(&[
        (ENV_PATH_CACHE_CAPACITY, "128"),
        (ENV_REMOVE_EMPTY, "false"),
        (ENV_STRICT, "1"),
    ]))
    .unwrap();
    assert_eq!(
        config,
        Config {
            path_cache_capacity: 128,
            remove_empty: false,
            strict: true,
        }
    );

    assert_eq!(Config::from_lookup(lookup(&[])).unwrap(), Config::default());
}

#[test]
fn test_from_lookup_rejects_bad_values() {
    let err = Config::from_lookup(lookup(&[(ENV_PATH_CACHE_CAPACITY, "lots")])).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Env {
            var: ENV_PATH_CACHE_CAPACITY,
            ..
        }
    ));
    assert!(Config::from_lookup(lookup(&[(ENV_STRICT, "sometimes")])).is_err());
}
