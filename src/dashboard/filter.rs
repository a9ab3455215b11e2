use crate::models::{RoleFilter, User};

/// Search term plus role selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search_term: String,
    pub role: RoleFilter,
}

impl FilterSpec {
    /// Case-insensitive substring match on `"first last"` or email, and the role selector.
    /// An empty term matches everyone.
    pub fn matches(&self, user: &User) -> bool {
        let needle = self.search_term.to_lowercase();
        let matches_search = user.full_name().to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);

        matches_search && self.role.matches(user.role)
    }
}
