//! Plain-text rendering of a [`BellView`].

use std::fmt::Write;

use notibell_domain::BellView;

pub fn render(view: &BellView) -> String {
    let mut out = String::new();
    match &view.badge {
        Some(badge) => {
            let _ = writeln!(out, "[bell] ({})", badge);
        }
        None => out.push_str("[bell]\n"),
    }

    let Some(panel) = &view.panel else {
        return out;
    };

    let header = if panel.can_mark_all_read {
        "Notifications  [Mark all as read]"
    } else {
        "Notifications"
    };
    let _ = writeln!(out, "{}", header);

    if let Some(message) = panel.empty_message {
        let _ = writeln!(out, "  {}", message);
        return out;
    }

    for row in &panel.rows {
        let marker = if row.read { ' ' } else { '*' };
        let _ = writeln!(
            out,
            "{} #{} {} {} {} ({})",
            marker,
            row.id,
            row.icon.as_str(),
            row.color.as_str(),
            row.title,
            row.created_at
        );
        let _ = writeln!(out, "    {}", row.body);
    }
    out
}
