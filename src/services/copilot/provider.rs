use async_trait::async_trait;
use serde::Serialize;

use super::client::HttpInsightsProvider;
use crate::client::ClientProfile;
use crate::config::{CopilotConfig, CopilotMode};
use crate::error::CopilotError;
use crate::insights::{demo_insights, InsightsRecord};
use std::time::Duration;

/// Oracle input: the question, the card names drawn, and the client if one is selected.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretRequest {
    pub question: String,
    pub cards: Vec<String>,
    pub user: Option<ClientProfile>,
}

/// Anything that turns a question and a spread into an insights record.
#[async_trait]
pub trait InsightsProvider: Send + Sync {
    async fn interpret(&self, request: &InterpretRequest) -> Result<InsightsRecord, CopilotError>;

    fn name(&self) -> &'static str;
}

/// Serves the fixed demo record after a short artificial delay.
#[derive(Debug, Clone)]
pub struct DemoInsightsProvider {
    latency: Duration,
}

impl DemoInsightsProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl InsightsProvider for DemoInsightsProvider {
    async fn interpret(&self, request: &InterpretRequest) -> Result<InsightsRecord, CopilotError> {
        tracing::debug!(cards = request.cards.len(), "Serving demo insights");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(demo_insights())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

/// Picks the provider for the configured mode.
pub fn provider_from_config(config: &CopilotConfig) -> Result<Box<dyn InsightsProvider>, CopilotError> {
    if !config.enabled {
        return Err(CopilotError::Disabled);
    }
    config.validate()?;

    let provider: Box<dyn InsightsProvider> = match config.mode {
        CopilotMode::Demo => Box::new(DemoInsightsProvider::new(config.demo_latency)),
        CopilotMode::Live => Box::new(HttpInsightsProvider::from_config(config)?),
    };
    tracing::info!(provider = provider.name(), "Copilot provider selected");
    Ok(provider)
}
