use super::*;

#[test]
fn default_config() {
    let config = EngineConfig::default();
    assert!(!config.dev_mode);
    assert_eq!(config.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
    assert_eq!(config.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
    assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
}

#[test]
fn durations_match_seconds() {
    let config = EngineConfig {
        poll_interval_secs: 7,
        cache_ttl_secs: 42,
        ..EngineConfig::default()
    };
    assert_eq!(config.poll_interval(), Duration::from_secs(7));
    assert_eq!(config.cache_ttl(), Duration::from_secs(42));
}

#[test]
fn zero_poll_interval_rejected() {
    let config = EngineConfig {
        poll_interval_secs: 0,
        ..EngineConfig::default()
    };
    assert!(matches!(config.validate(), Err(RagError::Config(_))));
}

#[test]
fn zero_cache_capacity_rejected() {
    let config = EngineConfig {
        cache_capacity: 0,
        ..EngineConfig::default()
    };
    assert!(matches!(config.validate(), Err(RagError::Config(_))));
}

#[test]
fn serde_round_trip_with_defaults() {
    let parsed: EngineConfig =
        serde_json::from_str(r#"{"dev_mode":true}"#).expect("partial config should parse");
    assert!(parsed.dev_mode);
    assert_eq!(parsed.cache_capacity, DEFAULT_CACHE_CAPACITY);
}
