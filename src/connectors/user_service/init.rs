use std::sync::Arc;

use crate::connectors::config::ConnectorConfig;
use crate::connectors::errors::FetchError;
use crate::connectors::user_service::{mock, UserSourceClient, UserSourceConnector};

/// Initialize the user source connector from Settings
///
/// # Example
/// ```ignore
/// let source = connectors::user_service::init(&settings.connectors)?;
/// let dashboard = Dashboard::init(store, source.as_ref(), settings.page_size).await?;
/// ```
pub fn init(connector_config: &ConnectorConfig) -> Result<Arc<dyn UserSourceConnector>, FetchError> {
    let connector: Arc<dyn UserSourceConnector> = if let Some(config) =
        connector_config.user_service.as_ref().filter(|c| c.enabled)
    {
        tracing::info!("Initializing user source connector: {}", config.users_url);
        Arc::new(UserSourceClient::new(config.clone())?)
    } else {
        tracing::warn!("User source connector disabled - using mock");
        Arc::new(mock::MockUserSourceConnector::default())
    };

    Ok(connector)
}
