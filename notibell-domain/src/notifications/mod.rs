//! Notification state for the notibell domain layer.
//!
//! Records, the store that owns them, the change events it publishes, and
//! seed data to populate it.

pub mod types;
pub mod errors;
pub mod events;
pub mod store;
pub mod seed;

pub use types::{ActionTarget, CreatedAt, NotificationCategory, NotificationId, NotificationPriority, NotificationRecord};
pub use errors::NotificationError;
pub use events::{NotificationEvent, StoreSnapshot};
pub use store::{DefaultNotificationStore, NotificationStore};
pub use seed::{demo_notifications, load_seed_file, parse_seed};
