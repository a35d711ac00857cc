//! Presentation mapping for notifications.
//!
//! Pure lookups from a record's category and priority to renderer-neutral
//! tokens. Each mapping is a constant table with an explicit fallback for
//! values the table does not list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::notifications::{NotificationCategory, NotificationPriority};

/// Icon shown next to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconToken {
    Briefcase,
    CheckSquare,
    MessageSquare,
    Clock,
    Star,
    /// Generic bell, used for anything unmapped.
    Bell,
}

impl IconToken {
    pub const fn as_str(self) -> &'static str {
        match self {
            IconToken::Briefcase => "icon.briefcase",
            IconToken::CheckSquare => "icon.check-square",
            IconToken::MessageSquare => "icon.message-square",
            IconToken::Clock => "icon.clock",
            IconToken::Star => "icon.star",
            IconToken::Bell => "icon.bell",
        }
    }
}

impl fmt::Display for IconToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accent color for a notification's priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    Danger,
    Warning,
    Success,
    Neutral,
}

impl ColorToken {
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorToken::Danger => "color.danger",
            ColorToken::Warning => "color.warning",
            ColorToken::Success => "color.success",
            ColorToken::Neutral => "color.neutral",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_ICON: IconToken = IconToken::Bell;
pub const DEFAULT_COLOR: ColorToken = ColorToken::Neutral;

pub const ICON_TABLE: [(NotificationCategory, IconToken); 5] = [
    (NotificationCategory::Application, IconToken::Briefcase),
    (NotificationCategory::Task, IconToken::CheckSquare),
    (NotificationCategory::Message, IconToken::MessageSquare),
    (NotificationCategory::Deadline, IconToken::Clock),
    (NotificationCategory::Feedback, IconToken::Star),
];

pub const COLOR_TABLE: [(NotificationPriority, ColorToken); 3] = [
    (NotificationPriority::High, ColorToken::Danger),
    (NotificationPriority::Medium, ColorToken::Warning),
    (NotificationPriority::Low, ColorToken::Success),
];

pub fn icon_for(category: NotificationCategory) -> IconToken {
    ICON_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map_or(DEFAULT_ICON, |(_, icon)| *icon)
}

pub fn color_for(priority: NotificationPriority) -> ColorToken {
    COLOR_TABLE
        .iter()
        .find(|(p, _)| *p == priority)
        .map_or(DEFAULT_COLOR, |(_, color)| *color)
}
