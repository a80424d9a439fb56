use rworkhours::config::{CONFIG_KEYS, Config};
use std::fs;

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = Config::load_from(&dir.path().join("absent.conf")).expect("defaults");
    assert_eq!(cfg.bind, "127.0.0.1:8080");
    assert!(cfg.cors_allow_any);
    assert!(cfg.app_pass_hash.is_none());
}

#[test]
fn test_partial_config_fills_defaults_and_reports_missing_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rworkhours.conf");
    let yaml = "database: /tmp/hours.sqlite\nbind: 0.0.0.0:9000\n";
    fs::write(&path, yaml).expect("write config");

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.database, "/tmp/hours.sqlite");
    assert_eq!(cfg.bind, "0.0.0.0:9000");
    assert_eq!(cfg.list_limit, 50);

    let missing = Config::missing_keys(yaml).expect("keys");
    assert_eq!(
        missing,
        ["app_pass_hash", "cors_allow_any", "log_filter", "list_limit"]
    );
}

#[test]
fn test_written_config_has_every_key() {
    let cfg = Config::from_yaml("database: hours.sqlite\n").expect("parse");
    let yaml = cfg.to_yaml().expect("serialize");
    assert!(Config::missing_keys(&yaml).expect("keys").is_empty());
    assert_eq!(CONFIG_KEYS.len(), 6);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(Config::from_yaml("database: [unterminated").is_err());
}
