use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::provider::{InsightsProvider, InterpretRequest};
use crate::config::CopilotConfig;
use crate::error::{ConfigError, CopilotError};
use crate::insights::InsightsRecord;

const FUNCTION_PATH: &str = "functions/v1/interpret-cards";

/// Calls the hosted `interpret-cards` function.
#[derive(Clone)]
pub struct HttpInsightsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpInsightsProvider {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Result<Self, CopilotError> {
        let client = Client::builder()
            .timeout(timeout) // network-level cap; callers may add their own
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &CopilotConfig) -> Result<Self, CopilotError> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| ConfigError::Missing("COPILOT_ENDPOINT".to_string()))?;
        Self::new(endpoint, config.api_key.clone(), config.timeout)
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url, FUNCTION_PATH)
    }
}

#[async_trait]
impl InsightsProvider for HttpInsightsProvider {
    async fn interpret(&self, request: &InterpretRequest) -> Result<InsightsRecord, CopilotError> {
        tracing::info!(cards = ?request.cards, has_client = request.user.is_some(), "Requesting insights");

        let mut builder = self.client.post(self.url()).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key).header("apikey", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Oracle returned an error status");
            return Err(CopilotError::Status { status, body });
        }

        // Decode from text so a contract mismatch surfaces as Decode, not Http.
        let text = response.text().await?;
        let record: InsightsRecord = serde_json::from_str(&text)?;
        tracing::debug!(themes = record.key_themes.len(), "Insights received");
        Ok(record)
    }

    fn name(&self) -> &'static str {
        "live"
    }
}
