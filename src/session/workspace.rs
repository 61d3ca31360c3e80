use chrono::NaiveDate;
use rand::Rng;

use super::notes::{NewReading, SessionNotes};
use crate::client::ClientProfile;
use crate::config::CopilotConfig;
use crate::deck::{draw_spread, DrawnCard};
use crate::error::{CopilotError, SessionError};
use crate::insights::{soap_notes, summarize, InsightsRecord, InsightsSummary};
use crate::services::copilot::{provider_from_config, InsightsProvider, InterpretRequest};

/// Drives one reading: draw a spread, ask the oracle, keep the latest record.
pub struct ReadingWorkspace {
    config: CopilotConfig,
    /// `None` when the copilot is disabled.
    provider: Option<Box<dyn InsightsProvider>>,
    pub notes: SessionNotes,
    client: Option<ClientProfile>,
    cards: Vec<DrawnCard>,
    insights: Option<InsightsRecord>,
}

impl ReadingWorkspace {
    pub fn new(config: CopilotConfig) -> Result<Self, CopilotError> {
        let provider = if config.enabled { Some(provider_from_config(&config)?) } else { None };
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: CopilotConfig, provider: Option<Box<dyn InsightsProvider>>) -> Self {
        Self {
            config,
            provider,
            notes: SessionNotes::default(),
            client: None,
            cards: Vec::new(),
            insights: None,
        }
    }

    pub fn select_client(&mut self, client: ClientProfile) {
        tracing::debug!(client_id = %client.id, "Client selected");
        self.client = Some(client);
    }

    pub fn client(&self) -> Option<&ClientProfile> {
        self.client.as_ref()
    }

    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    pub fn insights(&self) -> Option<&InsightsRecord> {
        self.insights.as_ref()
    }

    pub fn summary(&self) -> Option<InsightsSummary> {
        self.insights.as_ref().map(summarize)
    }

    /// Replace the spread, then refresh insights.
    ///
    /// Disabled copilot clears the record. On oracle failure the new cards
    /// stay drawn, the previous record is kept, and the error is returned.
    pub async fn draw_cards<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&[DrawnCard], SessionError> {
        self.cards = draw_spread(rng, self.config.spread_size)?;
        let names: Vec<String> = self.cards.iter().map(|c| c.name().to_string()).collect();
        tracing::info!(cards = ?names, "Spread drawn");

        let Some(provider) = self.provider.as_ref() else {
            self.insights = None;
            return Ok(&self.cards);
        };

        let request = InterpretRequest {
            question: self.notes.question.clone(),
            cards: names,
            user: self.client.clone(),
        };

        let timeout = self.config.timeout;
        match tokio::time::timeout(timeout, provider.interpret(&request)).await {
            Ok(Ok(record)) => {
                self.insights = Some(record);
                Ok(&self.cards)
            }
            Ok(Err(e)) => {
                tracing::warn!("Copilot error: {}", e);
                Err(e.into())
            }
            Err(_) => {
                tracing::warn!(?timeout, "Copilot timeout");
                Err(CopilotError::Timeout(timeout).into())
            }
        }
    }

    /// Append every exportable insight to the assessment note. Returns how many were added.
    pub fn send_insights_to_notes(&mut self) -> usize {
        let Some(record) = self.insights.as_ref() else {
            return 0;
        };
        let entries = soap_notes(record);
        self.notes.append_to_assessment(&entries);
        entries.len()
    }

    /// Row to persist, or `None` while no client is selected.
    pub fn save_draft(&self, date: NaiveDate) -> Option<NewReading> {
        let client = self.client.as_ref()?;
        Some(NewReading::build(client.id, date, &self.notes, &self.cards))
    }
}
