//! `userdash`: terminal user-management dashboard.
//!
//! ```text
//! userdash list --sort last-name --desc
//! userdash search jane
//! userdash role admin
//! userdash toggle 4
//! userdash set-role 4 editor
//! userdash browse
//! ```
//!
//! The first run fetches the user list; later runs work from the saved state.

use clap::{Parser, Subcommand};

use userdash::console::commands::dashboard::{
    BrowseCommand, ListCommand, NextPageCommand, PageCommand, PrevPageCommand, RoleCommand,
    SearchCommand, SetRoleCommand, ToggleCommand,
};
use userdash::console::commands::CallableTrait;
use userdash::dashboard::SortKey;
use userdash::models::{Role, RoleFilter};
use userdash::telemetry::{get_subscriber, init_subscriber};
use userdash::views::ViewMode;

#[derive(Parser, Debug)]
#[command(
    name = "userdash",
    version,
    about = "Search, filter, sort and manage users from the terminal",
    long_about = "userdash: a user-management dashboard for the terminal\n\n\
        Users are fetched once from the configured endpoint and kept, together\n\
        with the search term, role filter and page, in a local state file."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the current page
    List {
        /// Layout: table, cards
        #[arg(long, value_name = "VIEW", default_value = "table")]
        view: ViewMode,
        /// Output the page in JSON format
        #[arg(long)]
        json: bool,
        /// Sort by: name, last-name, email, role, id, active
        #[arg(long, value_name = "KEY")]
        sort: Option<SortKey>,
        /// Sort descending (requires --sort)
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Search users by name or email (empty string clears)
    Search {
        #[arg(allow_hyphen_values = true)]
        term: String,
    },
    /// Filter by role: all, admin, editor, viewer
    Role { role: RoleFilter },
    /// Go to a page
    Page { page: usize },
    /// Go to the next page
    Next,
    /// Go to the previous page
    Prev,
    /// Activate or deactivate a user
    Toggle {
        #[arg(value_name = "ID")]
        user_id: u64,
    },
    /// Change a user's role
    SetRole {
        #[arg(value_name = "ID")]
        user_id: u64,
        role: Role,
    },
    /// Interactive session
    Browse,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = get_subscriber("userdash".into(), "warn".into());
    if let Err(err) = init_subscriber(subscriber) {
        eprintln!("Logging disabled: {}", err);
    }

    let cli = Cli::parse();
    let command = get_command(cli);
    if let Err(err) = command.call() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    match cli.command {
        Commands::List {
            view,
            json,
            sort,
            desc,
        } => Box::new(ListCommand::new(view, json).with_sort(sort, desc)),
        Commands::Search { term } => Box::new(SearchCommand::new(term)),
        Commands::Role { role } => Box::new(RoleCommand::new(role)),
        Commands::Page { page } => Box::new(PageCommand::new(page)),
        Commands::Next => Box::new(NextPageCommand),
        Commands::Prev => Box::new(PrevPageCommand),
        Commands::Toggle { user_id } => Box::new(ToggleCommand::new(user_id)),
        Commands::SetRole { user_id, role } => Box::new(SetRoleCommand::new(user_id, role)),
        Commands::Browse => Box::new(BrowseCommand),
    }
}
