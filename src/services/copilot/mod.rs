//! The card-interpretation oracle, behind `InsightsProvider`.

pub mod client;
pub mod provider;

pub use client::HttpInsightsProvider;
pub use provider::*;
