use std::collections::HashMap;
use std::time::Duration;
use tarot_copilot::error::ConfigError;
use tarot_copilot::{CopilotConfig, CopilotMode};

fn load(pairs: &[(&str, &str)]) -> Result<CopilotConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    CopilotConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_defaults_are_demo_mode() {
    let config = load(&[]).unwrap();
    assert!(config.enabled);
    assert_eq!(config.mode, CopilotMode::Demo);
    assert_eq!(config.endpoint, None);
    assert_eq!(config.timeout, Duration::from_secs(20));
    assert_eq!(config.demo_latency, Duration::from_millis(800));
    assert_eq!(config.spread_size, 3);
}

#[test]
fn test_live_mode_from_env() {
    let config = load(&[
        ("COPILOT_MODE", "Live"),
        ("COPILOT_ENDPOINT", "https://example.supabase.co/"),
        ("COPILOT_API_KEY", "anon-key"),
        ("COPILOT_TIMEOUT_SECS", "5"),
        ("COPILOT_SPREAD_SIZE", "5"),
    ])
    .unwrap();

    assert_eq!(config.mode, CopilotMode::Live);
    assert_eq!(config.endpoint.as_deref(), Some("https://example.supabase.co"), "Trailing slash trimmed");
    assert_eq!(config.api_key.as_deref(), Some("anon-key"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.spread_size, 5);
}

#[test]
fn test_live_mode_requires_endpoint() {
    let err = load(&[("COPILOT_MODE", "live")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing(ref key) if key == "COPILOT_ENDPOINT"));

    // Not required while the copilot is off.
    let config = load(&[("COPILOT_MODE", "live"), ("COPILOT_ENABLED", "false")]).unwrap();
    assert!(!config.enabled);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(load(&[("COPILOT_MODE", "mock")]), Err(ConfigError::Invalid { .. })));
    assert!(matches!(load(&[("COPILOT_ENABLED", "maybe")]), Err(ConfigError::Invalid { .. })));
    assert!(matches!(load(&[("COPILOT_TIMEOUT_SECS", "-1")]), Err(ConfigError::Invalid { .. })));
    assert!(matches!(load(&[("COPILOT_SPREAD_SIZE", "0")]), Err(ConfigError::Invalid { .. })));
}
