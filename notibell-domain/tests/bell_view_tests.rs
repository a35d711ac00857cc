// notibell-domain/tests/bell_view_tests.rs

use chrono::{TimeZone, Utc};
use notibell_domain::bell::EMPTY_STATE_MESSAGE;
use notibell_domain::core::BellConfig;
use notibell_domain::{
    demo_notifications, ColorToken, DefaultNotificationStore, IconToken, NotificationBell, NotificationId,
    NotificationStore,
};
use pretty_assertions::assert_eq;

fn bell_with_cap(cap: usize) -> NotificationBell {
    let store = DefaultNotificationStore::new(demo_notifications(), 16).unwrap();
    NotificationBell::new(store, &BellConfig { badge_cap: cap })
}

#[test]
fn open_panel_lists_rows_in_insertion_order_with_tokens() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    let mut bell = bell_with_cap(99);
    bell.toggle_panel();

    let view = bell.view(now);
    assert_eq!(view.unread_count, 2);
    assert_eq!(view.badge.as_deref(), Some("2"));

    let panel = view.panel.expect("panel should be open");
    assert!(panel.can_mark_all_read);
    assert_eq!(panel.empty_message, None);

    let summary: Vec<(&str, IconToken, ColorToken, bool)> = panel
        .rows
        .iter()
        .map(|r| (r.id.as_str(), r.icon, r.color, r.read))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("1", IconToken::Briefcase, ColorToken::Danger, false),
            ("2", IconToken::CheckSquare, ColorToken::Warning, false),
            ("3", IconToken::MessageSquare, ColorToken::Success, true),
            ("4", IconToken::Clock, ColorToken::Danger, true),
        ]
    );
}

#[test]
fn badge_is_capped() {
    let bell = bell_with_cap(1);
    assert_eq!(bell.view(Utc::now()).badge.as_deref(), Some("1+"));
}

#[test]
fn dismissing_everything_shows_empty_state() {
    let mut bell = bell_with_cap(99);
    bell.toggle_panel();
    for n in ["1", "2", "3", "4"] {
        assert!(bell.dismiss(&NotificationId::new(n)));
    }

    let view = bell.view(Utc::now());
    assert!(view.badge.is_none());
    let panel = view.panel.unwrap();
    assert!(panel.rows.is_empty());
    assert_eq!(panel.empty_message, Some(EMPTY_STATE_MESSAGE));
    assert!(!panel.can_mark_all_read);
    assert!(bell.store().list().is_empty());
}

#[test]
fn click_on_close_button_after_row_removed_is_harmless() {
    let mut bell = bell_with_cap(99);
    let target = NotificationId::new("2");

    assert!(bell.dismiss(&target));
    assert_eq!(bell.activate(&target), None);
    assert!(!bell.dismiss(&target));
    assert_eq!(bell.store().unread_count(), 1);
}
