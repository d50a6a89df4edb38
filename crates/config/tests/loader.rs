use std::fs;

use tempfile::tempdir;

use roundabout_config::loader::read_config;
use roundabout_config::validator::validate;

#[test]
fn reads_full_config_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roundabout.yaml");
    fs::write(
        &path,
        r#"
pool:
  num_servers: 4
  capacity:
    source: random
    default: 2
    min: 2
    max: 6
    seed: 99
load_balancing:
  type: weighted-round-robin
requests: 25
log:
  level: debug
  file: /tmp/roundabout.log
"#,
    )
    .unwrap();

    let config = read_config(path.to_str().unwrap()).unwrap();
    assert_eq!(config.pool.num_servers, 4);
    assert_eq!(config.pool.capacity.source, "random");
    assert_eq!(config.pool.capacity.default, 2);
    assert_eq!(config.pool.capacity.min, 2);
    assert_eq!(config.pool.capacity.max, 6);
    assert_eq!(config.pool.capacity.seed, Some(99));
    assert_eq!(config.load_balancing.lb_type, "weighted-round-robin");
    assert_eq!(config.requests, 25);
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.file.as_deref(), Some("/tmp/roundabout.log"));
    assert!(validate(&config));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = read_config(path.to_str().unwrap()).unwrap_err();
    assert!(err.starts_with("Failed to read config file"));
}

#[test]
fn malformed_yaml_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "pool: [unterminated\n").unwrap();

    let err = read_config(path.to_str().unwrap()).unwrap_err();
    assert!(err.starts_with("Could not parse YAML file"));
}

#[test]
fn invalid_values_fail_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero.yaml");
    fs::write(&path, "pool:\n  num_servers: 0\n").unwrap();

    let config = read_config(path.to_str().unwrap()).unwrap();
    assert!(!validate(&config));
}
