pub mod personality;
pub mod insights;
pub mod deck;
pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod session;

// Re-export specific items if needed for convenient access
pub use config::{CopilotConfig, CopilotMode};
pub use session::ReadingWorkspace;
