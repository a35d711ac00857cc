//! Bell widget state: a store plus whether the dropdown panel is open.
//!
//! [`NotificationBell`] is the boundary the UI talks to. It keeps row
//! activation and the row's close button separate, so dismissing a row never
//! also marks it read.

pub mod view;

use chrono::{DateTime, Utc};
use tracing::debug;

use notibell_core::BellConfig;

use crate::notifications::{ActionTarget, DefaultNotificationStore, NotificationId, NotificationStore};

pub use view::{badge_label, BellView, NotificationRow, PanelView, EMPTY_STATE_MESSAGE};

pub struct NotificationBell<S = DefaultNotificationStore> {
    store: S,
    panel_open: bool,
    badge_cap: usize,
}

impl<S: NotificationStore> NotificationBell<S> {
    pub fn new(store: S, config: &BellConfig) -> Self {
        Self {
            store,
            panel_open: false,
            badge_cap: config.badge_cap.max(1),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Opens or closes the panel and returns the new state.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        debug!("Notification panel {}", if self.panel_open { "opened" } else { "closed" });
        self.panel_open
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Row click: marks the notification read and hands back its action
    /// target for the UI to follow. `None` if the id is gone or the record
    /// has no target.
    pub fn activate(&mut self, id: &NotificationId) -> Option<ActionTarget> {
        let target = self.store.get(id)?.action_target().cloned();
        self.store.mark_as_read(id);
        target
    }

    pub fn mark_as_read(&mut self, id: &NotificationId) -> bool {
        self.store.mark_as_read(id)
    }

    /// Close button on a row: removes it without marking it read.
    pub fn dismiss(&mut self, id: &NotificationId) -> bool {
        self.store.remove(id).is_some()
    }

    pub fn mark_all_as_read(&mut self) -> usize {
        self.store.mark_all_as_read()
    }

    pub fn view(&self, now: DateTime<Utc>) -> BellView {
        let unread_count = self.store.unread_count();
        BellView {
            unread_count,
            badge: badge_label(unread_count, self.badge_cap),
            panel: self
                .panel_open
                .then(|| PanelView::from_records(self.store.list(), unread_count, now)),
        }
    }
}
