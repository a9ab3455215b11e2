use serde::{Deserialize, Serialize};

use crate::models::{Role, User};

/// Body of the remote listing: `{ users, total, skip, limit }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<RemoteUser>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// One remote record. Only these four fields are consumed; the rest is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<RemoteUser> for User {
    fn from(remote: RemoteUser) -> Self {
        Self {
            id: remote.id,
            first_name: remote.first_name,
            last_name: remote.last_name,
            email: remote.email,
            role: Role::Viewer,
            is_active: true,
        }
    }
}
