//! Domain layer for notibell.
//!
//! - [`notifications`]: records, the [`NotificationStore`] that owns them and
//!   the events it publishes on change.
//! - [`presentation`]: category/priority to icon/color token lookups.
//! - [`bell`]: the bell widget state and its view model.
//!
//! ```
//! use notibell_domain::{DefaultNotificationStore, NotificationId, NotificationStore, demo_notifications};
//!
//! let mut store = DefaultNotificationStore::new(demo_notifications(), 16).unwrap();
//! assert_eq!(store.unread_count(), 2);
//! store.mark_as_read(&NotificationId::new("2"));
//! assert_eq!(store.unread_count(), 1);
//! ```

pub use notibell_core as core;

pub mod bell;
pub mod notifications;
pub mod presentation;

pub use bell::{BellView, NotificationBell, NotificationRow, PanelView};
pub use notifications::{
    demo_notifications, load_seed_file, ActionTarget, CreatedAt, DefaultNotificationStore, NotificationCategory,
    NotificationError, NotificationEvent, NotificationId, NotificationPriority, NotificationRecord,
    NotificationStore, StoreSnapshot,
};
pub use presentation::{color_for, icon_for, ColorToken, IconToken};
