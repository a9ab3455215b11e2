use crate::connectors::errors::FetchError;
use crate::models::{Role, User};

use super::UserSourceConnector;

/// Mock user source for testing and offline use - serves a fixed list
#[derive(Debug, Clone)]
pub struct MockUserSourceConnector {
    users: Vec<User>,
}

impl MockUserSourceConnector {
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl Default for MockUserSourceConnector {
    fn default() -> Self {
        let seed = [
            (1, "Emily", "Johnson", "emily.johnson@x.dummyjson.com"),
            (2, "Michael", "Williams", "michael.williams@x.dummyjson.com"),
            (3, "Sophia", "Brown", "sophia.brown@x.dummyjson.com"),
            (4, "James", "Davis", "james.davis@x.dummyjson.com"),
            (5, "Emma", "Miller", "emma.miller@x.dummyjson.com"),
        ];

        let users = seed
            .into_iter()
            .map(|(id, first, last, email)| User {
                id,
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                role: Role::Viewer,
                is_active: true,
            })
            .collect();

        Self { users }
    }
}

#[async_trait::async_trait]
impl UserSourceConnector for MockUserSourceConnector {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        Ok(self.users.clone())
    }
}

/// Source that always fails, for exercising the load error path
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingUserSourceConnector;

#[async_trait::async_trait]
impl UserSourceConnector for FailingUserSourceConnector {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        Err(FetchError::Status(500))
    }
}
