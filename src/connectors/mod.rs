//! External Service Connectors
//!
//! Adapters for the remote user listing. The dashboard only ever sees the
//! [`UserSourceConnector`] trait, so it stays independent of HTTP and testable.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `connector.rs` → allows mocking in tests
//! 2. Implement HTTP client in `client.rs`
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. Inject trait object into the dashboard → it never depends on reqwest
//!
//! ## Testing
//!
//! ```ignore
//! let connector = MockUserSourceConnector::default();
//! let dashboard = Dashboard::init(MemoryStateStore::default(), &connector, 15).await?;
//! ```

pub mod config;
pub mod errors;
pub mod user_service;

pub use config::{ConnectorConfig, UserServiceConfig, DEFAULT_USERS_URL};
pub use errors::FetchError;
pub use user_service::{
    MockUserSourceConnector, RemoteUser, UserSourceClient, UserSourceConnector, UsersResponse,
};

pub use user_service::init as init_user_service;
