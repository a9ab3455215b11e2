use std::fmt::Write;

use crate::dashboard::{DashboardView, SortKey, SortSpec};

/// Header labels of the sortable columns, in display order.
pub const SORTABLE_COLUMNS: [(&str, SortKey); 5] = [
    ("ID", SortKey::Id),
    ("NAME", SortKey::FirstName),
    ("EMAIL", SortKey::Email),
    ("ROLE", SortKey::Role),
    ("STATUS", SortKey::IsActive),
];

fn header(label: &str, key: SortKey, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.key == key => format!("{} {}", label, spec.direction.arrow()),
        _ => label.to_string(),
    }
}

/// Dense table of one page. The active sort column carries `↑` or `↓`.
pub fn render_table(view: &DashboardView) -> String {
    let mut out = String::new();
    let sort = view.sort;

    let _ = writeln!(
        out,
        "{:<6} {:<28} {:<36} {:<8} {:<8}",
        header("ID", SortKey::Id, sort),
        header("NAME", SortKey::FirstName, sort),
        header("EMAIL", SortKey::Email, sort),
        header("ROLE", SortKey::Role, sort),
        header("STATUS", SortKey::IsActive, sort),
    );
    let _ = writeln!(out, "{}", "─".repeat(90));

    if view.users.is_empty() {
        let _ = writeln!(out, "No users found.");
        return out;
    }

    for user in &view.users {
        let _ = writeln!(
            out,
            "{:<6} {:<28} {:<36} {:<8} {:<8}",
            user.id,
            super::truncate(&user.full_name(), 26),
            super::truncate(&user.email, 34),
            user.role,
            user.status_label(),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SortDirection;
    use crate::models::{Role, User};

    fn view(sort: Option<SortSpec>) -> DashboardView {
        DashboardView {
            users: vec![User {
                id: 3,
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@x.com".to_string(),
                role: Role::Editor,
                is_active: false,
            }],
            current_page: 1,
            total_pages: 1,
            filtered_count: 1,
            sort,
        }
    }

    #[test]
    fn test_table_lists_rows() {
        let out = render_table(&view(None));

        assert!(out.contains("Jane Doe"));
        assert!(out.contains("jane@x.com"));
        assert!(out.contains("editor"));
        assert!(out.contains("Inactive"));
        assert!(!out.contains('↑'));
    }

    #[test]
    fn test_table_marks_sorted_column() {
        let out = render_table(&view(Some(SortSpec {
            key: SortKey::Email,
            direction: SortDirection::Desc,
        })));

        assert!(out.contains("EMAIL ↓"));
        assert!(!out.contains("NAME ↓"));
    }

    #[test]
    fn test_empty_page_message() {
        let mut empty = view(None);
        empty.users.clear();
        assert!(render_table(&empty).contains("No users found."));
    }
}
