use std::path::PathBuf;

use serde::Deserialize;

use crate::connectors::ConnectorConfig;
use crate::dashboard::USERS_PER_PAGE;
use crate::storage::FileStateStore;

/// Environment variable overriding the state file location.
pub const STATE_PATH_ENV: &str = "USERDASH_STATE_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub connectors: ConnectorConfig,
    pub storage: StorageSettings,
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connectors: ConnectorConfig::default(),
            storage: StorageSettings::default(),
            page_size: USERS_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// State file; `USERDASH_STATE_PATH` or the platform config dir when unset
    pub state_path: Option<PathBuf>,
}

impl StorageSettings {
    /// `USERDASH_STATE_PATH`, then `state_path`, then the platform default.
    pub fn resolved_path(&self) -> PathBuf {
        let from_env = std::env::var_os(STATE_PATH_ENV).map(PathBuf::from);
        self.path_with_override(from_env)
    }

    fn path_with_override(&self, from_env: Option<PathBuf>) -> PathBuf {
        from_env
            .or_else(|| self.state_path.clone())
            .unwrap_or_else(FileStateStore::default_path)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Optional `userdash.{yaml,toml,json}` in the working directory,
    // then USERDASH__SECTION__KEY environment overrides
    let settings = config::Config::builder()
        .add_source(config::File::with_name("userdash").required(false))
        .add_source(
            config::Environment::with_prefix("USERDASH")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    if config.page_size == 0 {
        tracing::warn!("page_size must be positive, using {}", USERS_PER_PAGE);
        config.page_size = USERS_PER_PAGE;
    }

    Ok(config)
}
