//! Pure renderers over a [`DashboardView`](crate::dashboard::DashboardView)
//! and the per-user action menu.

pub mod actions;
pub mod cards;
pub mod pagination;
pub mod table;

pub use actions::{available_actions, dispatch, ActionStyle, UserAction};
pub use cards::render_cards;
pub use pagination::render_pagination;
pub use table::{render_table, SORTABLE_COLUMNS};

/// Layout used to print a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" => Ok(ViewMode::Cards),
            other => Err(format!("unknown view '{other}', expected table or cards")),
        }
    }
}

pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        s.to_string()
    }
}
