use std::fmt::Write;

use crate::models::User;

/// One block per user, separated by blank lines.
pub fn render_cards(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut out = String::new();
    for (i, user) in users.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "┌ #{}", user.id);
        let _ = writeln!(out, "│ Name:   {}", user.full_name());
        let _ = writeln!(out, "│ Email:  {}", user.email);
        let _ = writeln!(out, "│ Role:   {}", user.role);
        let _ = writeln!(out, "└ Status: {}", user.status_label());
    }
    out
}
