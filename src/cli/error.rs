use std::fmt;

use crate::connectors::FetchError;
use crate::dashboard::DashboardError;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CliError: unified error hierarchy for all console commands
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug)]
pub enum CliError {
    // Config errors
    Config(config::ConfigError),

    // Load errors
    LoadFailed(DashboardError),
    Connector(FetchError),

    // Input errors
    UserNotFound { user_id: u64 },

    // Runtime errors
    Runtime(String),
    Prompt(dialoguer::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "Configuration error: {err}"),
            Self::LoadFailed(err) => write!(f, "{err}"),
            Self::Connector(err) => write!(f, "User source error: {err}"),
            Self::UserNotFound { user_id } => write!(f, "No user with id {user_id}"),
            Self::Runtime(msg) => write!(f, "Failed to create async runtime: {msg}"),
            Self::Prompt(err) => write!(f, "Prompt failed: {err}"),
            Self::Serialize(err) => write!(f, "Failed to serialize output: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<DashboardError> for CliError {
    fn from(err: DashboardError) -> Self {
        Self::LoadFailed(err)
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        Self::Connector(err)
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}
