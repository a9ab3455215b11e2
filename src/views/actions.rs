use std::fmt;
use std::str::FromStr;

use crate::dashboard::Dashboard;
use crate::models::{Role, User};
use crate::storage::StateStore;

/// A command from a user's action menu. The menu holds no selection of its
/// own: an action is emitted, dispatched, and the menu is back to neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    ToggleActive,
    SetRole(Role),
}

/// Wording of the menu entries: the table spells actions out, cards are terse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Table,
    Card,
}

impl UserAction {
    pub fn label(&self, user: &User, style: ActionStyle) -> String {
        match (self, style) {
            (UserAction::ToggleActive, ActionStyle::Table) if user.is_active => {
                "Deactivate User".to_string()
            }
            (UserAction::ToggleActive, ActionStyle::Table) => "Activate User".to_string(),
            (UserAction::ToggleActive, ActionStyle::Card) if user.is_active => {
                "Deactivate".to_string()
            }
            (UserAction::ToggleActive, ActionStyle::Card) => "Activate".to_string(),
            (UserAction::SetRole(role), ActionStyle::Table) => {
                format!("Set Role: {}", role.title())
            }
            (UserAction::SetRole(role), ActionStyle::Card) => format!("Set Role: {}", role),
        }
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::ToggleActive => f.write_str("toggle"),
            UserAction::SetRole(role) => f.write_str(role.as_str()),
        }
    }
}

impl FromStr for UserAction {
    type Err = String;

    /// `toggle`, or a role name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("toggle") {
            return Ok(UserAction::ToggleActive);
        }
        s.parse::<Role>()
            .map(UserAction::SetRole)
            .map_err(|e| e.to_string())
    }
}

/// Menu entries for `user`: toggle first, then every role except the current one.
pub fn available_actions(user: &User) -> Vec<UserAction> {
    std::iter::once(UserAction::ToggleActive)
        .chain(
            Role::ALL
                .into_iter()
                .filter(|role| *role != user.role)
                .map(UserAction::SetRole),
        )
        .collect()
}

/// Route an emitted action to the matching dashboard operation.
pub fn dispatch<S: StateStore>(dashboard: &mut Dashboard<S>, user_id: u64, action: UserAction) {
    tracing::debug!(user_id, %action, "Dispatching user action");
    match action {
        UserAction::ToggleActive => dashboard.toggle_active(user_id),
        UserAction::SetRole(role) => dashboard.update_role(user_id, role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::MockUserSourceConnector;
    use crate::dashboard::USERS_PER_PAGE;
    use crate::storage::MemoryStateStore;

    fn user(role: Role, is_active: bool) -> User {
        User {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            role,
            is_active,
        }
    }

    #[test]
    fn test_current_role_is_not_offered() {
        let actions = available_actions(&user(Role::Editor, true));
        assert_eq!(
            actions,
            vec![
                UserAction::ToggleActive,
                UserAction::SetRole(Role::Admin),
                UserAction::SetRole(Role::Viewer),
            ]
        );
    }

    #[test]
    fn test_labels_follow_status_and_style() {
        let active = user(Role::Viewer, true);
        let inactive = user(Role::Viewer, false);

        assert_eq!(
            UserAction::ToggleActive.label(&active, ActionStyle::Table),
            "Deactivate User"
        );
        assert_eq!(
            UserAction::ToggleActive.label(&inactive, ActionStyle::Card),
            "Activate"
        );
        assert_eq!(
            UserAction::SetRole(Role::Admin).label(&active, ActionStyle::Table),
            "Set Role: Admin"
        );
        assert_eq!(
            UserAction::SetRole(Role::Admin).label(&active, ActionStyle::Card),
            "Set Role: admin"
        );
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("toggle".parse::<UserAction>(), Ok(UserAction::ToggleActive));
        assert_eq!(
            "editor".parse::<UserAction>(),
            Ok(UserAction::SetRole(Role::Editor))
        );
        assert!("delete".parse::<UserAction>().is_err());
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_dashboard() {
        let source = MockUserSourceConnector::with_users(vec![user(Role::Viewer, true)]);
        let mut dashboard = Dashboard::init(MemoryStateStore::new(), &source, USERS_PER_PAGE)
            .await
            .unwrap();

        dispatch(&mut dashboard, 1, UserAction::ToggleActive);
        dispatch(&mut dashboard, 1, UserAction::SetRole(Role::Admin));

        let updated = dashboard.user(1).unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.role, Role::Admin);
    }
}
