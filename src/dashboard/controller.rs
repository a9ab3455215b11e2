use std::fmt;

use serde::Serialize;

use crate::connectors::{FetchError, UserSourceConnector};
use crate::models::{Role, RoleFilter, User};
use crate::storage::StateStore;

use super::filter::FilterSpec;
use super::pagination::{clamp_page, page_bounds, total_pages};
use super::session::{
    self, CURRENT_PAGE_KEY, ROLE_FILTER_KEY, SEARCH_TERM_KEY, USERS_KEY,
};
use super::sort::{sort_users, SortKey, SortSpec};

#[derive(Debug)]
pub enum DashboardError {
    /// Neither the cache nor the remote source produced a collection
    Load(FetchError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "Unable to load users: {}", err),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
        }
    }
}

/// One rendered page: the derived view handed to the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub users: Vec<User>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub sort: Option<SortSpec>,
}

/// The dashboard view-model.
///
/// Owns the authoritative collection and the sort/filter/page state. Every
/// mutation writes the affected piece back to the store; the paginated view
/// is derived on demand and never stored.
pub struct Dashboard<S: StateStore> {
    store: S,
    users: Vec<User>,
    sort: Option<SortSpec>,
    filter: FilterSpec,
    current_page: usize,
    page_size: usize,
}

impl<S: StateStore> Dashboard<S> {
    /// Restore the session, falling back to the remote source for the collection.
    ///
    /// A cached collection that cannot be read or decoded is discarded and
    /// re-fetched. A fetch failure is the only error.
    #[tracing::instrument(name = "dashboard_init", skip_all, fields(page_size = page_size))]
    pub async fn init(
        store: S,
        source: &dyn UserSourceConnector,
        page_size: usize,
    ) -> Result<Self, DashboardError> {
        let mut dashboard = Self {
            store,
            users: Vec::new(),
            sort: None,
            filter: FilterSpec::default(),
            current_page: 1,
            page_size: page_size.max(1),
        };

        dashboard.restore_view_state();

        match dashboard.restore_users() {
            Some(users) => {
                tracing::debug!(count = users.len(), "Restored users from store");
                dashboard.users = users;
            }
            None => {
                let fetched = source.fetch_users().await.map_err(|e| {
                    tracing::error!("Failed to load users: {}", e);
                    DashboardError::Load(e)
                })?;
                let before = fetched.len();
                dashboard.users = session::dedupe_by_id(fetched);
                if dashboard.users.len() != before {
                    tracing::warn!(
                        dropped = before - dashboard.users.len(),
                        "Remote source returned duplicate user ids"
                    );
                }
                dashboard.persist_users();
            }
        }

        Ok(dashboard)
    }

    fn restore_users(&self) -> Option<Vec<User>> {
        let raw = match self.store.load(USERS_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Cannot read cached users, refetching: {}", e);
                return None;
            }
        };

        match session::decode_users(&raw) {
            Ok(users) => Some(users),
            Err(reason) => {
                tracing::warn!(%reason, "Discarding malformed cached users");
                None
            }
        }
    }

    fn restore_view_state(&mut self) {
        if let Some(page) = self.load_value(CURRENT_PAGE_KEY) {
            match session::decode_page(&page) {
                Some(page) => self.current_page = page,
                None => tracing::warn!(value = %page, "Ignoring malformed stored page"),
            }
        }

        if let Some(term) = self.load_value(SEARCH_TERM_KEY) {
            self.filter.search_term = term;
        }

        if let Some(role) = self.load_value(ROLE_FILTER_KEY) {
            match session::decode_role_filter(&role) {
                Some(role) => self.filter.role = role,
                None => tracing::warn!(value = %role, "Ignoring malformed stored role filter"),
            }
        }
    }

    fn load_value(&self, key: &str) -> Option<String> {
        self.store.load(key).unwrap_or_else(|e| {
            tracing::warn!(key, "Cannot read stored value: {}", e);
            None
        })
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.save(key, value) {
            tracing::warn!(key, "Failed to persist dashboard state: {}", e);
        }
    }

    fn persist_users(&self) {
        match session::encode_users(&self.users) {
            Ok(json) => self.persist(USERS_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialize users: {}", e),
        }
    }

    fn persist_page(&self) {
        self.persist(CURRENT_PAGE_KEY, &self.current_page.to_string());
    }

    /// Pull the stored page back in range after an edit shrank the result.
    fn settle_page(&mut self) {
        let page = clamp_page(self.current_page, self.total_pages());
        if page != self.current_page {
            tracing::debug!(from = self.current_page, to = page, "Clamped page after edit");
            self.current_page = page;
            self.persist_page();
        }
    }

    // ── accessors ────────────────────────────────────

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, user_id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Requested page, clamped against the current filtered result. A page
    /// restored from the store is kept as-is until the first edit or page move.
    pub fn current_page(&self) -> usize {
        clamp_page(self.current_page, self.total_pages())
    }

    // ── mutations ────────────────────────────────────

    /// Flip `is_active`. Unknown ids are ignored.
    pub fn toggle_active(&mut self, user_id: u64) {
        let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) else {
            tracing::debug!(user_id, "toggle_active: no such user");
            return;
        };
        user.is_active = !user.is_active;
        tracing::debug!(user_id, is_active = user.is_active, "Toggled user status");
        self.persist_users();
        self.settle_page();
    }

    /// Assign a role. Unknown ids are ignored.
    pub fn update_role(&mut self, user_id: u64, role: Role) {
        let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) else {
            tracing::debug!(user_id, "update_role: no such user");
            return;
        };
        user.role = role;
        tracing::debug!(user_id, %role, "Updated user role");
        self.persist_users();
        self.settle_page();
    }

    pub fn request_sort(&mut self, key: SortKey) {
        let next = SortSpec::toggled(self.sort, key);
        tracing::debug!(key = %next.key, direction = ?next.direction, "Sort requested");
        self.sort = Some(next);
    }

    /// Like [`request_sort`](Self::request_sort) for a key given by name.
    /// Unknown names leave the sort untouched.
    pub fn request_sort_by_name(&mut self, name: &str) {
        match name.parse::<SortKey>() {
            Ok(key) => self.request_sort(key),
            Err(e) => tracing::warn!("Ignoring sort request: {}", e),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.current_page = 1;
        self.persist(SEARCH_TERM_KEY, &self.filter.search_term);
        self.persist_page();
    }

    pub fn set_role_filter(&mut self, role: RoleFilter) {
        self.filter.role = role;
        self.current_page = 1;
        self.persist(ROLE_FILTER_KEY, role.as_str());
        self.persist_page();
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
        self.persist_page();
    }

    pub fn next_page(&mut self) {
        self.set_current_page(self.current_page().saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_current_page(self.current_page().saturating_sub(1));
    }

    // ── derived view ─────────────────────────────────

    /// Filtered then sorted, in display order.
    pub fn filtered_users(&self) -> Vec<&User> {
        let mut filtered: Vec<&User> = self
            .users
            .iter()
            .filter(|u| self.filter.matches(u))
            .collect();
        sort_users(&mut filtered, self.sort);
        filtered
    }

    pub fn total_pages(&self) -> usize {
        let count = self
            .users
            .iter()
            .filter(|u| self.filter.matches(u))
            .count();
        total_pages(count, self.page_size)
    }

    pub fn view(&self) -> DashboardView {
        let filtered = self.filtered_users();
        let total = total_pages(filtered.len(), self.page_size);
        let page = clamp_page(self.current_page, total);
        let bounds = page_bounds(page, self.page_size, filtered.len());

        DashboardView {
            users: filtered[bounds].iter().map(|u| (*u).clone()).collect(),
            current_page: page,
            total_pages: total,
            filtered_count: filtered.len(),
            sort: self.sort,
        }
    }
}
