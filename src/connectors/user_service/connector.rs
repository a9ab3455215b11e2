use crate::connectors::errors::FetchError;
use crate::models::User;

/// Trait for the remote user listing
/// Allows mocking in tests and swapping implementations
#[async_trait::async_trait]
pub trait UserSourceConnector: Send + Sync {
    /// Fetch the remote list, projected into local users.
    /// Every user comes back as an active viewer: the remote has no notion of either.
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}
