//! `userdash` subcommands. Each one opens the dashboard from the state file
//! (fetching on first use), applies its operation, and prints the page.

pub mod browse;
pub mod list;
pub mod state;
pub mod user;

pub use browse::BrowseCommand;
pub use list::ListCommand;
pub use state::{NextPageCommand, PageCommand, PrevPageCommand, RoleCommand, SearchCommand};
pub use user::{SetRoleCommand, ToggleCommand};

use crate::cli::error::CliError;
use crate::cli::progress;
use crate::configuration::get_configuration;
use crate::connectors;
use crate::dashboard::Dashboard;
use crate::storage::{FileStateStore, StateStore};
use crate::views::{render_cards, render_pagination, render_table, ViewMode};

/// Load settings, then restore or fetch the collection behind a spinner.
pub fn open_dashboard() -> Result<Dashboard<FileStateStore>, CliError> {
    let settings = get_configuration()?;
    let store = FileStateStore::new(settings.storage.resolved_path());
    tracing::debug!(path = %store.path().display(), "Opening dashboard state");
    let source = connectors::init_user_service(&settings.connectors)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    let pb = progress::spinner("Loading users...");
    match rt.block_on(Dashboard::init(store, source.as_ref(), settings.page_size)) {
        Ok(dashboard) => {
            progress::finish_clear(&pb);
            Ok(dashboard)
        }
        Err(err) => {
            progress::finish_error(&pb, "Unable to load users");
            Err(err.into())
        }
    }
}

/// One-line summary of the active search, role filter and sort.
pub fn describe_state<S: StateStore>(dashboard: &Dashboard<S>) -> String {
    let filter = dashboard.filter();
    let sort = match dashboard.sort() {
        Some(spec) => format!("{} {}", spec.key, spec.direction.arrow()),
        None => "none".to_string(),
    };
    format!(
        "Search: \"{}\"  Role: {}  Sort: {}",
        filter.search_term, filter.role, sort
    )
}

/// Print the current page as a table, cards, or JSON.
pub fn print_page<S: StateStore>(
    dashboard: &Dashboard<S>,
    mode: ViewMode,
    json: bool,
) -> Result<(), CliError> {
    let view = dashboard.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", describe_state(dashboard));
    match mode {
        ViewMode::Table => print!("{}", render_table(&view)),
        ViewMode::Cards => print!("{}", render_cards(&view.users)),
    }
    println!("{}", render_pagination(&view));
    Ok(())
}
