use std::path::PathBuf;
use thiserror::Error;
use notibell_core::CoreError;
use crate::notifications::types::NotificationId;

/// Errors raised while building a store or loading seed data.
///
/// Store operations themselves never fail; unknown ids are no-ops.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Duplicate notification ID '{0}' in seed data.")]
    DuplicateId(NotificationId),

    #[error("Invalid input data for notification field '{field}': {reason}")]
    InvalidInputData {
        field: String,
        reason: String,
    },

    #[error("Failed to read seed file: {0}")]
    SeedRead(#[source] CoreError),

    #[error("Failed to parse seed file {path:?}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
