//! The dashboard view-model: the user collection plus search, role filter,
//! sort and page state, and the paginated view derived from them.

pub mod controller;
pub mod filter;
pub mod pagination;
pub mod session;
pub mod sort;


pub use controller::{Dashboard, DashboardError, DashboardView};
pub use filter::FilterSpec;
pub use pagination::USERS_PER_PAGE;
pub use sort::{SortDirection, SortKey, SortSpec};
