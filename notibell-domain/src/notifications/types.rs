use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use uuid::Uuid;

/// Opaque identifier of a notification, unique within a store.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotificationId").field(&self.0).finish()
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationCategory {
    Application,
    Task,
    Message,
    Deadline,
    Feedback,
    /// Any category this build does not know about.
    #[serde(other)]
    Other,
}

/// How prominently a notification should be shown. Never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPriority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(other)]
    Other,
}

/// Creation time as supplied by the feed: either a real timestamp or a
/// string that is already formatted for display ("2 hours ago").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    untagged,
    expecting = "created_at must be a quoted string: an RFC 3339 timestamp or a display label (unquoted TOML datetimes are not accepted)"
)]
pub enum CreatedAt {
    Timestamp(DateTime<Utc>),
    Display(String),
}

impl CreatedAt {
    /// Display label relative to `now`. Preformatted strings are returned unchanged.
    pub fn label(&self, now: DateTime<Utc>) -> String {
        match self {
            CreatedAt::Timestamp(ts) => HumanTime::from(*ts - now).to_string(),
            CreatedAt::Display(text) => text.clone(),
        }
    }
}

impl From<DateTime<Utc>> for CreatedAt {
    fn from(ts: DateTime<Utc>) -> Self {
        CreatedAt::Timestamp(ts)
    }
}

impl From<&str> for CreatedAt {
    fn from(text: &str) -> Self {
        CreatedAt::Display(text.to_string())
    }
}

/// Opaque reference the UI follows when a notification is activated, e.g. a
/// route. The store never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTarget(String);

impl ActionTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ActionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single notification entry.
///
/// Fields are private: `read` may only flip from `false` to `true`, and only
/// the store does that. Everything else is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    #[serde(default = "NotificationId::generate")]
    id: NotificationId,
    category: NotificationCategory,
    title: String,
    body: String,
    created_at: CreatedAt,
    #[serde(default)]
    read: bool,
    #[serde(default)]
    priority: NotificationPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_target: Option<ActionTarget>,
}

impl NotificationRecord {
    /// Creates an unread record without an action target.
    pub fn new(
        id: impl Into<NotificationId>,
        category: NotificationCategory,
        priority: NotificationPriority,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: impl Into<CreatedAt>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            body: body.into(),
            created_at: created_at.into(),
            read: false,
            priority,
            action_target: None,
        }
    }

    pub fn with_action_target(mut self, target: impl Into<String>) -> Self {
        self.action_target = Some(ActionTarget::new(target));
        self
    }

    /// Seeds the record as already read.
    pub fn already_read(mut self) -> Self {
        self.read = true;
        self
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn category(&self) -> NotificationCategory {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> &CreatedAt {
        &self.created_at
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn priority(&self) -> NotificationPriority {
        self.priority
    }

    pub fn action_target(&self) -> Option<&ActionTarget> {
        self.action_target.as_ref()
    }

    /// Returns `true` if the record was unread.
    pub(crate) fn mark_as_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }
}
