use crate::dashboard::DashboardView;

/// `‹ Prev  1 [2] 3  Next ›`, with `·` in place of an arrow that cannot move.
pub fn render_pagination(view: &DashboardView) -> String {
    let prev = if view.current_page > 1 { "‹ Prev" } else { "· Prev" };
    let next = if view.current_page < view.total_pages {
        "Next ›"
    } else {
        "Next ·"
    };

    let pages: Vec<String> = (1..=view.total_pages)
        .map(|page| {
            if page == view.current_page {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();

    format!(
        "{}  {}  {}   ({} user(s))",
        prev,
        pages.join(" "),
        next,
        view.filtered_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(current_page: usize, total_pages: usize) -> DashboardView {
        DashboardView {
            users: Vec::new(),
            current_page,
            total_pages,
            filtered_count: total_pages * 15,
            sort: None,
        }
    }

    #[test]
    fn test_first_page_disables_prev() {
        assert_eq!(
            render_pagination(&view(1, 3)),
            "· Prev  [1] 2 3  Next ›   (45 user(s))"
        );
    }

    #[test]
    fn test_last_page_disables_next() {
        let out = render_pagination(&view(2, 2));
        assert!(out.starts_with("‹ Prev  1 [2]  Next ·"));
    }
}
