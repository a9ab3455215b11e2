pub mod client;
pub mod connector;
pub mod init;
pub mod mock;
pub mod types;


pub use client::UserSourceClient;
pub use connector::UserSourceConnector;
pub use init::init;
pub use mock::MockUserSourceConnector;
pub use types::{RemoteUser, UsersResponse};
