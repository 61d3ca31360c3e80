use std::time::Duration;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Errors from the interpretation oracle.
#[derive(Debug, thiserror::Error)]
pub enum CopilotError {
    #[error("Copilot is disabled")]
    Disabled,

    #[error("Oracle request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Oracle returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Oracle response did not match the insights contract: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Oracle timed out after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Deck and spread errors.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Cannot draw {requested} cards from a deck of {available}")]
    SpreadTooLarge { requested: usize, available: usize },

    #[error("Unknown card: {0}")]
    UnknownCard(String),
}

/// Errors from a live reading session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("Copilot error: {0}")]
    Copilot(#[from] CopilotError),
}
