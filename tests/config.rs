use std::fs;
use std::path::Path;
use odom_ingest::{load_ingestor_conf, IngestorConfig, DEFAULT_BUFFER_SIZE, DEFAULT_TOPIC_NAME};

#[test]
fn test_full_config() {
    let config = IngestorConfig::from_yaml_str("topic_name: /synced_odom\nbuffer_size: 100\n").unwrap();
    assert_eq!(config, IngestorConfig { topic_name: String::from("/synced_odom"), buffer_size: 100 });
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config = IngestorConfig::from_yaml_str("topic_name: /gnss_odom\n").unwrap();
    assert_eq!(config.topic_name, "/gnss_odom");
    assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);

    let config = IngestorConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config.topic_name, DEFAULT_TOPIC_NAME);
}

#[test]
fn test_zero_buffer_size_rejected() {
    assert!(IngestorConfig::from_yaml_str("buffer_size: 0\n").is_err());
}

#[test]
fn test_malformed_yaml_rejected() {
    assert!(IngestorConfig::from_yaml_str("buffer_size: [1, 2\n").is_err());
    assert!(IngestorConfig::from_yaml_str("buffer_size: -3\n").is_err());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("odom_ingest_config_{}.yaml", std::process::id()));
    fs::write(&path, "topic_name: /lidar_odom\nbuffer_size: 7\n").unwrap();
    let config = load_ingestor_conf(&path);
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.topic_name, "/lidar_odom");
    assert_eq!(config.buffer_size, 7);
}

#[test]
fn test_missing_file_reported() {
    assert!(load_ingestor_conf(Path::new("/definitely/not/here/ingestor.yaml")).is_err());
}
