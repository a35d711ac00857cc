use std::collections::HashSet;
use tokio::sync::broadcast;
use tracing::{debug, info, trace, warn};

use notibell_core::StoreConfig;

use super::errors::NotificationError;
use super::events::{NotificationEvent, StoreSnapshot};
use super::types::{NotificationId, NotificationRecord};

// --- NotificationStore Trait ---

/// Ordered, in-memory collection of notifications with read/remove transitions.
///
/// Operations never fail: an id that is not (or no longer) present is a
/// no-op, so a removal racing a click on the same row is harmless in either
/// order. Display order is insertion order; nothing is ever re-sorted.
pub trait NotificationStore {
    /// Current records in insertion order.
    fn list(&self) -> &[NotificationRecord];

    fn get(&self, id: &NotificationId) -> Option<&NotificationRecord>;

    /// Number of records with `read == false`.
    fn unread_count(&self) -> usize {
        self.list().iter().filter(|n| !n.is_read()).count()
    }

    /// Marks one record read. Returns `false` if it was absent or already read.
    fn mark_as_read(&mut self, id: &NotificationId) -> bool;

    /// Marks every record read and returns how many changed.
    fn mark_all_as_read(&mut self) -> usize;

    /// Removes a record and hands it back, or `None` if absent.
    fn remove(&mut self, id: &NotificationId) -> Option<NotificationRecord>;

    /// Incremented by every mutation that changed state.
    fn revision(&self) -> u64;

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            revision: self.revision(),
            notifications: self.list().to_vec(),
            unread_count: self.unread_count(),
        }
    }

    /// Receives one [`NotificationEvent`] per state change.
    ///
    /// A receiver that falls behind by more than the channel capacity sees
    /// `Lagged` and should re-read [`NotificationStore::snapshot`].
    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent>;
}

// --- DefaultNotificationStore Implementation ---

pub struct DefaultNotificationStore {
    notifications: Vec<NotificationRecord>,
    revision: u64,
    event_publisher: broadcast::Sender<NotificationEvent>,
}

impl DefaultNotificationStore {
    /// Builds a store from seed records, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`NotificationError::InvalidInputData`] if a record has an empty id.
    /// - [`NotificationError::DuplicateId`] if two records share an id.
    pub fn new(seed: Vec<NotificationRecord>, broadcast_capacity: usize) -> Result<Self, NotificationError> {
        if broadcast_capacity == 0 {
            return Err(NotificationError::InvalidInputData {
                field: "broadcast_capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(seed.len());
        for record in &seed {
            if record.id().as_str().is_empty() {
                warn!("Rejecting seed record with empty id (title: {:?})", record.title());
                return Err(NotificationError::InvalidInputData {
                    field: "id".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            if !seen.insert(record.id()) {
                warn!("Rejecting seed: duplicate notification id {}", record.id());
                return Err(NotificationError::DuplicateId(record.id().clone()));
            }
        }

        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        let store = Self {
            notifications: seed,
            revision: 0,
            event_publisher,
        };
        info!(
            "Notification store created with {} notifications ({} unread)",
            store.notifications.len(),
            store.unread_count()
        );
        Ok(store)
    }

    pub fn with_config(seed: Vec<NotificationRecord>, config: &StoreConfig) -> Result<Self, NotificationError> {
        Self::new(seed, config.event_capacity)
    }

    fn position(&self, id: &NotificationId) -> Option<usize> {
        self.notifications.iter().position(|n| n.id() == id)
    }

    fn publish_event(&self, event: NotificationEvent) {
        if self.event_publisher.receiver_count() == 0 {
            trace!("No subscribers for {:?}", event);
            return;
        }
        if let Err(e) = self.event_publisher.send(event) {
            debug!("Failed to publish notification event: {:?}", e.0);
        }
    }
}

impl NotificationStore for DefaultNotificationStore {
    fn list(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    fn get(&self, id: &NotificationId) -> Option<&NotificationRecord> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    fn mark_as_read(&mut self, id: &NotificationId) -> bool {
        let changed = match self.notifications.iter_mut().find(|n| n.id() == id) {
            Some(n) => n.mark_as_read(),
            None => {
                trace!("mark_as_read: notification {} not present", id);
                return false;
            }
        };
        if !changed {
            trace!("mark_as_read: notification {} already read", id);
            return false;
        }

        self.revision += 1;
        let unread_count = self.unread_count();
        debug!("Notification {} marked read ({} unread)", id, unread_count);
        self.publish_event(NotificationEvent::NotificationRead {
            notification_id: id.clone(),
            revision: self.revision,
            unread_count,
        });
        true
    }

    fn mark_all_as_read(&mut self) -> usize {
        let marked_count = self
            .notifications
            .iter_mut()
            .map(NotificationRecord::mark_as_read)
            .filter(|changed| *changed)
            .count();
        if marked_count == 0 {
            trace!("mark_all_as_read: nothing unread");
            return 0;
        }

        self.revision += 1;
        debug!("Marked {} notifications read", marked_count);
        self.publish_event(NotificationEvent::AllNotificationsRead {
            marked_count,
            revision: self.revision,
        });
        marked_count
    }

    fn remove(&mut self, id: &NotificationId) -> Option<NotificationRecord> {
        let Some(idx) = self.position(id) else {
            trace!("remove: notification {} not present", id);
            return None;
        };
        // Vec::remove shifts the tail left, keeping relative order.
        let removed = self.notifications.remove(idx);

        self.revision += 1;
        let unread_count = self.unread_count();
        debug!("Notification {} removed ({} left, {} unread)", id, self.notifications.len(), unread_count);
        self.publish_event(NotificationEvent::NotificationRemoved {
            notification_id: id.clone(),
            was_unread: !removed.is_read(),
            revision: self.revision,
            unread_count,
        });
        Some(removed)
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.event_publisher.subscribe()
    }
}
