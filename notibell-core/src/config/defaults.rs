//! Default configuration values for notibell.
//!
//! These functions back the `#[serde(default = "...")]` attributes in
//! [`super::types`] and the `Default` impls of the configuration structs.

use super::types::{BellConfig, LoggingConfig, StoreConfig};
use std::path::PathBuf;

pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig::default()
}

pub(crate) fn default_store_config() -> StoreConfig {
    StoreConfig::default()
}

pub(crate) fn default_bell_config() -> BellConfig {
    BellConfig::default()
}

/// `"info"`
pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file by default.
pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// `"text"`
pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

/// Capacity of the store's broadcast channel. Subscribers that fall further
/// behind than this observe a lag and must re-read the snapshot.
pub(crate) fn default_event_capacity() -> usize {
    16
}

pub(crate) fn default_seed_path() -> Option<PathBuf> {
    None
}

/// Badge counts above this render as `"99+"`.
pub(crate) fn default_badge_cap() -> usize {
    99
}
