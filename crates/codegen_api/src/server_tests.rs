//! Tests for server module

use super::*;
use serial_test::serial;

const VARIABLES: [&str; 4] = [
    "API_HOST",
    "API_PORT",
    "MAX_DATA_LENGTH",
    "REQUEST_TIMEOUT_SECS",
];

fn clear_env() {
    for variable in VARIABLES {
        env::remove_var(variable);
    }
}

#[test]
fn test_default_config() {
    let config = ApiConfig::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.max_data_length, 2048);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_server_creation() {
    let config = ApiConfig::default();
    let state = AppState::from_config(&config);
    let server = ApiServer::new(config, state);
    let _router = server.router();
    // Server and router creation should succeed
}

#[test]
#[serial]
fn test_from_env_uses_defaults_when_unset() {
    clear_env();

    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config, ApiConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    env::set_var("API_HOST", "127.0.0.1");
    env::set_var("API_PORT", "9090");
    env::set_var("MAX_DATA_LENGTH", "512");
    env::set_var("REQUEST_TIMEOUT_SECS", " 5 ");

    let config = ApiConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9090);
    assert_eq!(config.max_data_length, 512);
    assert_eq!(config.request_timeout_secs, 5);
}

#[test]
#[serial]
fn test_from_env_rejects_malformed_port() {
    clear_env();
    env::set_var("API_PORT", "not-a-port");

    let result = ApiConfig::from_env();
    clear_env();

    match result {
        Err(ConfigError::InvalidValue {
            variable, value, ..
        }) => {
            assert_eq!(variable, "API_PORT");
            assert_eq!(value, "not-a-port");
        }
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_from_env_rejects_zero_data_length() {
    clear_env();
    env::set_var("MAX_DATA_LENGTH", "0");

    let result = ApiConfig::from_env();
    clear_env();

    assert!(result.is_err());
}
