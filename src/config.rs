//! Copilot configuration.
//!
//! Demo vs live is an explicit field handed to whoever needs it, never a
//! process-wide toggle.

use std::str::FromStr;
use std::time::Duration;

use crate::deck::DEFAULT_SPREAD;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopilotMode {
    /// Serve the fixed demo record.
    Demo,
    /// Call the hosted interpretation function.
    Live,
}

impl FromStr for CopilotMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(CopilotMode::Demo),
            "live" => Ok(CopilotMode::Live),
            _ => Err(invalid("COPILOT_MODE", s, "expected 'demo' or 'live'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CopilotConfig {
    pub enabled: bool,
    pub mode: CopilotMode,
    /// Base URL of the hosted backend. Required in live mode.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
    /// Simulated latency for the demo record.
    pub demo_latency: Duration,
    pub spread_size: usize,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: CopilotMode::Demo,
            endpoint: None,
            api_key: None,
            timeout: Duration::from_secs(20),
            demo_latency: Duration::from_millis(800),
            spread_size: DEFAULT_SPREAD,
        }
    }
}

impl CopilotConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let enabled = match lookup("COPILOT_ENABLED") {
            Some(v) => parse_bool("COPILOT_ENABLED", &v)?,
            None => defaults.enabled,
        };
        let mode = match lookup("COPILOT_MODE") {
            Some(v) => v.parse()?,
            None => defaults.mode,
        };
        let endpoint = lookup("COPILOT_ENDPOINT")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        let api_key = lookup("COPILOT_API_KEY").filter(|v| !v.is_empty());
        let timeout = match lookup("COPILOT_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse_num("COPILOT_TIMEOUT_SECS", &v)?),
            None => defaults.timeout,
        };
        let demo_latency = match lookup("COPILOT_DEMO_LATENCY_MS") {
            Some(v) => Duration::from_millis(parse_num("COPILOT_DEMO_LATENCY_MS", &v)?),
            None => defaults.demo_latency,
        };
        let spread_size = match lookup("COPILOT_SPREAD_SIZE") {
            Some(v) => parse_num::<usize>("COPILOT_SPREAD_SIZE", &v)?,
            None => defaults.spread_size,
        };

        let config = Self { enabled, mode, endpoint, api_key, timeout, demo_latency, spread_size };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.mode == CopilotMode::Live && self.endpoint.is_none() {
            return Err(ConfigError::Missing("COPILOT_ENDPOINT".to_string()));
        }
        if self.spread_size == 0 {
            return Err(invalid("COPILOT_SPREAD_SIZE", "0", "a spread needs at least one card"));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "expected a boolean")),
    }
}

fn parse_num<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, value, "expected a non-negative integer"))
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
