use serde::{Deserialize, Serialize};
use crate::notifications::types::{NotificationId, NotificationRecord};

/// Change published by a store after a mutation that altered its state.
///
/// Every event carries the store revision it produced and the unread count
/// after the change, so a badge can be kept in sync without re-reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationEvent {
    NotificationRead {
        notification_id: NotificationId,
        revision: u64,
        unread_count: usize,
    },
    AllNotificationsRead {
        marked_count: usize,
        revision: u64,
    },
    NotificationRemoved {
        notification_id: NotificationId,
        was_unread: bool,
        revision: u64,
        unread_count: usize,
    },
}

impl NotificationEvent {
    pub fn revision(&self) -> u64 {
        match self {
            NotificationEvent::NotificationRead { revision, .. }
            | NotificationEvent::AllNotificationsRead { revision, .. }
            | NotificationEvent::NotificationRemoved { revision, .. } => *revision,
        }
    }

    pub fn unread_count(&self) -> usize {
        match self {
            NotificationEvent::NotificationRead { unread_count, .. }
            | NotificationEvent::NotificationRemoved { unread_count, .. } => *unread_count,
            NotificationEvent::AllNotificationsRead { .. } => 0,
        }
    }
}

/// Owned copy of a store's observable state at one revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub revision: u64,
    pub notifications: Vec<NotificationRecord>,
    pub unread_count: usize,
}

impl StoreSnapshot {
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
