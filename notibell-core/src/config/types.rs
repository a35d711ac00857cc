//! Configuration data structures.
//!
//! Every struct rejects unknown keys and fills missing ones from
//! [`super::defaults`], so an empty file yields [`CoreConfig::default`].

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Logging subsystem settings consumed by [`crate::logging::init_logging`].
///
/// ```
/// use notibell_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/notibell.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/notibell.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the
    /// application's state directory by the loader.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// Settings for the notification store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Buffer size of the change-event channel. Must be at least 1.
    #[serde(default = "defaults::default_event_capacity")]
    pub event_capacity: usize,
    /// TOML file with `[[notifications]]` used to seed the store. When unset
    /// the built-in demo records are used.
    #[serde(default = "defaults::default_seed_path")]
    pub seed_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            event_capacity: defaults::default_event_capacity(),
            seed_path: defaults::default_seed_path(),
        }
    }
}

/// Settings for the bell widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BellConfig {
    /// Largest unread count shown verbatim on the badge.
    #[serde(default = "defaults::default_badge_cap")]
    pub badge_cap: usize,
}

impl Default for BellConfig {
    fn default() -> Self {
        Self {
            badge_cap: defaults::default_badge_cap(),
        }
    }
}

/// Root configuration.
///
/// ```
/// use notibell_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [bell]
/// badge_cap = 9
/// "#;
/// let config: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert_eq!(config.bell.badge_cap, 9);
/// assert_eq!(config.store.event_capacity, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_store_config")]
    pub store: StoreConfig,
    #[serde(default = "defaults::default_bell_config")]
    pub bell: BellConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            store: defaults::default_store_config(),
            bell: defaults::default_bell_config(),
        }
    }
}
