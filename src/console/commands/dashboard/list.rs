use crate::console::commands::CallableTrait;
use crate::dashboard::SortKey;
use crate::views::ViewMode;

/// `userdash list [--view table|cards] [--json] [--sort KEY [--desc]]`
///
/// Shows the current page. The sort applies to this listing only.
pub struct ListCommand {
    pub view: ViewMode,
    pub json: bool,
    pub sort: Option<SortKey>,
    pub desc: bool,
}

impl ListCommand {
    pub fn new(view: ViewMode, json: bool) -> Self {
        Self {
            view,
            json,
            sort: None,
            desc: false,
        }
    }

    pub fn with_sort(mut self, sort: Option<SortKey>, desc: bool) -> Self {
        self.sort = sort;
        self.desc = desc;
        self
    }
}

impl CallableTrait for ListCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut dashboard = super::open_dashboard()?;

        if let Some(key) = self.sort {
            dashboard.request_sort(key);
            if self.desc {
                dashboard.request_sort(key);
            }
        }

        super::print_page(&dashboard, self.view, self.json)?;
        Ok(())
    }
}
