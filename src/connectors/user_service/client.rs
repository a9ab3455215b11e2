use crate::connectors::config::UserServiceConfig;
use crate::connectors::errors::FetchError;
use crate::models::User;

use tracing::Instrument;

use super::connector::UserSourceConnector;
use super::types::UsersResponse;

/// HTTP-based user source
pub struct UserSourceClient {
    pub(crate) users_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl UserSourceClient {
    /// Create new client. No timeout is applied unless `timeout_secs` is set.
    pub fn new(config: UserServiceConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| FetchError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            users_url: config.users_url,
            http_client,
        })
    }

    /// Client for a bare endpoint with default settings
    pub fn for_url(users_url: &str) -> Result<Self, FetchError> {
        let config = UserServiceConfig {
            users_url: users_url.to_string(),
            ..UserServiceConfig::default()
        };
        Self::new(config)
    }
}

#[async_trait::async_trait]
impl UserSourceConnector for UserSourceClient {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let span = tracing::info_span!("user_source_fetch_users", url = %self.users_url);

        let resp = self
            .http_client
            .get(&self.users_url)
            .send()
            .instrument(span.clone())
            .await
            .map_err(|e| {
                tracing::error!("fetch_users transport error: {:?}", e);
                FetchError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "fetch_users rejected by remote");
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = resp
            .text()
            .instrument(span)
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))?;
        let body = serde_json::from_str::<UsersResponse>(&text).map_err(|e| {
            tracing::error!("fetch_users undecodable body: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        tracing::info!(
            count = body.users.len(),
            total = ?body.total,
            "Fetched users from remote source"
        );

        Ok(body.users.into_iter().map(User::from).collect())
    }
}
