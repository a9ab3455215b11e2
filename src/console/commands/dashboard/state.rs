use crate::console::commands::CallableTrait;
use crate::models::RoleFilter;
use crate::views::ViewMode;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// search / role: filter changes, both reset to page 1
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `userdash search <TERM>`. An empty term clears the search.
pub struct SearchCommand {
    pub term: String,
}

impl SearchCommand {
    pub fn new(term: String) -> Self {
        Self { term }
    }
}

impl CallableTrait for SearchCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        dashboard.set_search_term(self.term.clone());
        super::print_page(&dashboard, ViewMode::Table, false)?;
        Ok(())
    }
}

/// `userdash role <all|admin|editor|viewer>`
pub struct RoleCommand {
    pub role: RoleFilter,
}

impl RoleCommand {
    pub fn new(role: RoleFilter) -> Self {
        Self { role }
    }
}

impl CallableTrait for RoleCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        dashboard.set_role_filter(self.role);
        super::print_page(&dashboard, ViewMode::Table, false)?;
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// page / next / prev
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `userdash page <N>`, clamped to the available pages.
pub struct PageCommand {
    pub page: usize,
}

impl PageCommand {
    pub fn new(page: usize) -> Self {
        Self { page }
    }
}

impl CallableTrait for PageCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        dashboard.set_current_page(self.page);
        super::print_page(&dashboard, ViewMode::Table, false)?;
        Ok(())
    }
}

/// `userdash next`
pub struct NextPageCommand;

impl CallableTrait for NextPageCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        dashboard.next_page();
        super::print_page(&dashboard, ViewMode::Table, false)?;
        Ok(())
    }
}

/// `userdash prev`
pub struct PrevPageCommand;

impl CallableTrait for PrevPageCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;
        dashboard.previous_page();
        super::print_page(&dashboard, ViewMode::Table, false)?;
        Ok(())
    }
}
