//! Renderer-neutral view model of the bell and its dropdown panel.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::notifications::{NotificationId, NotificationRecord};
use crate::presentation::{color_for, icon_for, ColorToken, IconToken};

/// Shown in the panel when there is nothing to list.
pub const EMPTY_STATE_MESSAGE: &str = "No notifications";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BellView {
    pub unread_count: usize,
    /// `None` hides the badge.
    pub badge: Option<String>,
    /// Present only while the panel is open.
    pub panel: Option<PanelView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub rows: Vec<NotificationRow>,
    pub empty_message: Option<&'static str>,
    pub can_mark_all_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRow {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub read: bool,
    pub icon: IconToken,
    pub color: ColorToken,
    pub has_action: bool,
}

impl NotificationRow {
    pub fn from_record(record: &NotificationRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: record.id().clone(),
            title: record.title().to_string(),
            body: record.body().to_string(),
            created_at: record.created_at().label(now),
            read: record.is_read(),
            icon: icon_for(record.category()),
            color: color_for(record.priority()),
            has_action: record.action_target().is_some(),
        }
    }
}

impl PanelView {
    pub fn from_records(records: &[NotificationRecord], unread_count: usize, now: DateTime<Utc>) -> Self {
        let rows: Vec<NotificationRow> = records.iter().map(|r| NotificationRow::from_record(r, now)).collect();
        Self {
            empty_message: rows.is_empty().then_some(EMPTY_STATE_MESSAGE),
            can_mark_all_read: unread_count > 0,
            rows,
        }
    }
}

/// Badge text for `unread` notifications: hidden at zero, `"{cap}+"` above `cap`.
pub fn badge_label(unread: usize, cap: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > cap => Some(format!("{}+", cap)),
        n => Some(n.to_string()),
    }
}
