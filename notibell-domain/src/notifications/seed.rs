//! Seed data for notification stores.
//!
//! A seed file is TOML with one `[[notifications]]` table per record:
//!
//! ```toml
//! [[notifications]]
//! id = "1"                        # optional, a random id is generated when omitted
//! category = "application"
//! priority = "high"
//! title = "New application received"
//! body = "Jane Doe applied for Senior Engineer"
//! created_at = "5 min ago"          # or a quoted RFC 3339 timestamp
//! action_target = "/applications/1" # optional
//! read = false                       # optional, defaults to false
//! ```

use std::path::Path;
use serde::Deserialize;
use tracing::debug;

use notibell_core::utils::fs::read_to_string;

use super::errors::NotificationError;
use super::types::{NotificationCategory, NotificationPriority, NotificationRecord};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    notifications: Vec<NotificationRecord>,
}

/// The four built-in records: "1" and "2" unread, "3" and "4" already read.
pub fn demo_notifications() -> Vec<NotificationRecord> {
    vec![
        NotificationRecord::new(
            "1",
            NotificationCategory::Application,
            NotificationPriority::High,
            "New application received",
            "Jane Doe applied for the Senior Rust Engineer position.",
            "5 min ago",
        )
        .with_action_target("/applications/1"),
        NotificationRecord::new(
            "2",
            NotificationCategory::Task,
            NotificationPriority::Medium,
            "Interview scheduled",
            "Technical interview with John Smith tomorrow at 10:00.",
            "1 hour ago",
        )
        .with_action_target("/tasks/2"),
        NotificationRecord::new(
            "3",
            NotificationCategory::Message,
            NotificationPriority::Low,
            "New message",
            "Sarah replied to your message about the offer.",
            "3 hours ago",
        )
        .already_read(),
        NotificationRecord::new(
            "4",
            NotificationCategory::Deadline,
            NotificationPriority::High,
            "Deadline approaching",
            "Feedback for the Product Designer role is due in 2 days.",
            "1 day ago",
        )
        .already_read(),
    ]
}

/// Parses seed records from TOML text. `origin` is only used in errors.
pub fn parse_seed(content: &str, origin: &Path) -> Result<Vec<NotificationRecord>, NotificationError> {
    let file: SeedFile = toml::from_str(content).map_err(|source| NotificationError::SeedParse {
        path: origin.to_path_buf(),
        source,
    })?;
    Ok(file.notifications)
}

/// Reads and parses a seed file.
///
/// Ids are not checked here; the store rejects duplicates when it is built.
pub fn load_seed_file(path: &Path) -> Result<Vec<NotificationRecord>, NotificationError> {
    let content = read_to_string(path).map_err(NotificationError::SeedRead)?;
    let records = parse_seed(&content, path)?;
    debug!("Loaded {} seed notifications from {:?}", records.len(), path);
    Ok(records)
}
