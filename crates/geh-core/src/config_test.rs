use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, "https://geh-backend.onrender.com");
    assert_eq!(cfg.image_base_url, "https://geh-backend.onrender.com");
    assert_eq!(cfg.api_layout, ApiLayout::Legacy);
    assert_eq!(cfg.detail_lookup, DetailLookup::Direct);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "geh/0.1 (storefront)");
    assert_eq!(cfg.currency, "GHC");
}

#[test]
fn image_base_url_follows_api_base_url_when_unset() {
    let mut map = HashMap::new();
    map.insert("GEH_API_BASE_URL", "http://localhost:8080/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:8080");
    assert_eq!(cfg.image_base_url, "http://localhost:8080");
}

#[test]
fn image_base_url_override() {
    let mut map = HashMap::new();
    map.insert("GEH_IMAGE_BASE_URL", "https://cdn.example.com/media/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.image_base_url, "https://cdn.example.com/media");
    assert_eq!(cfg.api_base_url, "https://geh-backend.onrender.com");
}

#[test]
fn api_base_url_must_be_http() {
    let mut map = HashMap::new();
    map.insert("GEH_API_BASE_URL", "ftp://example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GEH_API_BASE_URL"),
        "expected InvalidEnvVar(GEH_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn api_base_url_without_host_is_rejected() {
    let mut map = HashMap::new();
    map.insert("GEH_API_BASE_URL", "https://");
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_err(), "expected Err, got: {result:?}");
}

#[test]
fn api_layout_v1_is_case_insensitive() {
    let mut map = HashMap::new();
    map.insert("GEH_API_LAYOUT", "V1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_layout, ApiLayout::V1);
}

#[test]
fn api_layout_unknown_is_rejected() {
    let mut map = HashMap::new();
    map.insert("GEH_API_LAYOUT", "graphql");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GEH_API_LAYOUT"),
        "expected InvalidEnvVar(GEH_API_LAYOUT), got: {result:?}"
    );
}

#[test]
fn detail_lookup_listing() {
    let mut map = HashMap::new();
    map.insert("GEH_DETAIL_LOOKUP", "listing");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.detail_lookup, DetailLookup::Listing);
}

#[test]
fn detail_lookup_unknown_is_rejected() {
    let mut map = HashMap::new();
    map.insert("GEH_DETAIL_LOOKUP", "cache");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GEH_DETAIL_LOOKUP"),
        "expected InvalidEnvVar(GEH_DETAIL_LOOKUP), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("GEH_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("GEH_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GEH_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(GEH_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("GEH_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_err(), "expected Err, got: {result:?}");
}

#[test]
fn currency_and_user_agent_overrides() {
    let mut map = HashMap::new();
    map.insert("GEH_CURRENCY", "USD");
    map.insert("GEH_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}
