//! Keys and codecs for the persisted session.
//!
//! Every decoder here is lenient: a value that does not parse is reported
//! and the caller falls back to its default.

use std::collections::HashSet;

use crate::models::{RoleFilter, User};

pub const USERS_KEY: &str = "users";
pub const CURRENT_PAGE_KEY: &str = "currentPage";
pub const SEARCH_TERM_KEY: &str = "searchTerm";
pub const ROLE_FILTER_KEY: &str = "roleFilter";

pub fn encode_users(users: &[User]) -> Result<String, serde_json::Error> {
    serde_json::to_string(users)
}

/// Parse a cached collection. Unknown roles, missing fields and duplicate ids
/// all make the cache unusable.
pub fn decode_users(raw: &str) -> Result<Vec<User>, String> {
    let users: Vec<User> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut seen = HashSet::with_capacity(users.len());
    if let Some(dup) = users.iter().find(|u| !seen.insert(u.id)) {
        return Err(format!("duplicate user id {}", dup.id));
    }

    Ok(users)
}

/// Keep the first occurrence of every id.
pub fn dedupe_by_id(users: Vec<User>) -> Vec<User> {
    let mut seen = HashSet::with_capacity(users.len());
    users.into_iter().filter(|u| seen.insert(u.id)).collect()
}

pub fn decode_page(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|page| *page >= 1)
}

pub fn decode_role_filter(raw: &str) -> Option<RoleFilter> {
    raw.parse().ok()
}
