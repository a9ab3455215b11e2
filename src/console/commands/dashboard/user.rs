use crate::cli::error::CliError;
use crate::console::commands::CallableTrait;
use crate::models::Role;
use crate::views::{dispatch, UserAction, ViewMode};

/// `userdash toggle <ID>`: activate or deactivate a user.
pub struct ToggleCommand {
    pub user_id: u64,
}

impl ToggleCommand {
    pub fn new(user_id: u64) -> Self {
        Self { user_id }
    }
}

impl CallableTrait for ToggleCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        let user = dashboard.user(self.user_id).ok_or(CliError::UserNotFound {
            user_id: self.user_id,
        })?;
        let label = if user.is_active { "Deactivated" } else { "Activated" };

        dispatch(&mut dashboard, self.user_id, UserAction::ToggleActive);
        eprintln!("{} user {}.", label, self.user_id);

        super::print_page(&dashboard, ViewMode::Table, false)?;
        Ok(())
    }
}

/// `userdash set-role <ID> <ROLE>`
pub struct SetRoleCommand {
    pub user_id: u64,
    pub role: Role,
}

impl SetRoleCommand {
    pub fn new(user_id: u64, role: Role) -> Self {
        Self { user_id, role }
    }
}

impl CallableTrait for SetRoleCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        if dashboard.user(self.user_id).is_none() {
            return Err(CliError::UserNotFound {
                user_id: self.user_id,
            }
            .into());
        }

        dispatch(&mut dashboard, self.user_id, UserAction::SetRole(self.role));
        eprintln!("User {} is now {}.", self.user_id, self.role);

        super::print_page(&dashboard, ViewMode::Table, false)?;
        Ok(())
    }
}
