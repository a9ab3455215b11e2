use dialoguer::{Input, Select};

use crate::cli::error::CliError;
use crate::console::commands::CallableTrait;
use crate::dashboard::Dashboard;
use crate::models::{Role, RoleFilter};
use crate::storage::StateStore;
use crate::views::{available_actions, dispatch, ActionStyle, ViewMode, SORTABLE_COLUMNS};

const MENU: [&str; 10] = [
    "Act on a user",
    "Sort by column",
    "Search",
    "Filter by role",
    "Next page",
    "Previous page",
    "Go to page",
    "Switch layout",
    "Refresh view",
    "Quit",
];

/// `userdash browse`
///
/// Interactive session over one dashboard: the sort survives between
/// actions here, so repeated sorts on a column flip its direction.
pub struct BrowseCommand;

impl CallableTrait for BrowseCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        let mut mode = ViewMode::Table;

        loop {
            super::print_page(&dashboard, mode, false)?;

            let Some(choice) = Select::new()
                .with_prompt("Action")
                .items(&MENU)
                .default(0)
                .interact_opt()
                .map_err(CliError::from)?
            else {
                break;
            };

            match choice {
                0 => act_on_user(&mut dashboard, mode)?,
                1 => choose_sort(&mut dashboard)?,
                2 => {
                    let term: String = Input::new()
                        .with_prompt("Search users by name or email")
                        .with_initial_text(dashboard.filter().search_term.clone())
                        .allow_empty(true)
                        .interact_text()
                        .map_err(CliError::from)?;
                    dashboard.set_search_term(term);
                }
                3 => choose_role_filter(&mut dashboard)?,
                4 => dashboard.next_page(),
                5 => dashboard.previous_page(),
                6 => {
                    let page: usize = Input::new()
                        .with_prompt(format!("Page (1-{})", dashboard.total_pages()))
                        .default(dashboard.current_page())
                        .interact_text()
                        .map_err(CliError::from)?;
                    dashboard.set_current_page(page);
                }
                7 => {
                    mode = match mode {
                        ViewMode::Table => ViewMode::Cards,
                        ViewMode::Cards => ViewMode::Table,
                    }
                }
                8 => {}
                _ => break,
            }
        }

        Ok(())
    }
}

/// Pick a user on the current page, then one of its actions.
/// The menu is rebuilt every time, so nothing stays selected.
fn act_on_user<S: StateStore>(dashboard: &mut Dashboard<S>, mode: ViewMode) -> Result<(), CliError> {
    let page = dashboard.view().users;
    if page.is_empty() {
        eprintln!("No users on this page.");
        return Ok(());
    }

    let labels: Vec<String> = page
        .iter()
        .map(|u| format!("#{} {} <{}>", u.id, u.full_name(), u.email))
        .collect();
    let Some(index) = Select::new()
        .with_prompt("User")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };
    let user = &page[index];

    let style = match mode {
        ViewMode::Table => ActionStyle::Table,
        ViewMode::Cards => ActionStyle::Card,
    };
    let actions = available_actions(user);
    let action_labels: Vec<String> = actions.iter().map(|a| a.label(user, style)).collect();
    let Some(selected) = Select::new()
        .with_prompt(format!("Actions for {}", user.full_name()))
        .items(&action_labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    dispatch(dashboard, user.id, actions[selected]);
    Ok(())
}

fn choose_sort<S: StateStore>(dashboard: &mut Dashboard<S>) -> Result<(), CliError> {
    let labels: Vec<String> = SORTABLE_COLUMNS
        .iter()
        .map(|(label, key)| match dashboard.sort() {
            Some(spec) if spec.key == *key => format!("{} {}", label, spec.direction.arrow()),
            _ => label.to_string(),
        })
        .collect();

    if let Some(index) = Select::new()
        .with_prompt("Sort by")
        .items(&labels)
        .default(0)
        .interact_opt()?
    {
        dashboard.request_sort(SORTABLE_COLUMNS[index].1);
    }
    Ok(())
}

fn choose_role_filter<S: StateStore>(dashboard: &mut Dashboard<S>) -> Result<(), CliError> {
    let options: Vec<(String, RoleFilter)> = std::iter::once(("All Roles".to_string(), RoleFilter::All))
        .chain(
            Role::ALL
                .into_iter()
                .map(|role| (role.title().to_string(), RoleFilter::Only(role))),
        )
        .collect();
    let labels: Vec<&str> = options.iter().map(|(label, _)| label.as_str()).collect();
    let current = options
        .iter()
        .position(|(_, filter)| *filter == dashboard.filter().role)
        .unwrap_or(0);

    if let Some(index) = Select::new()
        .with_prompt("Role")
        .items(&labels)
        .default(current)
        .interact_opt()?
    {
        dashboard.set_role_filter(options[index].1);
    }
    Ok(())
}
