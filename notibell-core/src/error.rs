//! Error handling for the notibell core layer.
//!
//! The main error type for this crate is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`]. Higher layers (for example the
//! notification domain) embed `CoreError` as the source of their own errors
//! when a filesystem or configuration failure bubbles up.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for notibell.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while installing the global `tracing` subscriber.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem failures outside of configuration reading, such as creating
    /// a log directory or reading a seed file.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Parsed values are out of range or otherwise invalid.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A base directory (config, state) could not be determined, usually
    /// because no home directory is available.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// The configured level could not be turned into a filter directive.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    #[test]
    fn core_error_wraps_config_error() {
        let core_err = CoreError::from(ConfigError::ValidationError("badge_cap must be at least 1".to_string()));

        assert_eq!(
            core_err.to_string(),
            "Configuration Error: Configuration validation failed: badge_cap must be at least 1"
        );
        match core_err.source().and_then(|s| s.downcast_ref::<ConfigError>()) {
            Some(ConfigError::ValidationError(msg)) => assert_eq!(msg, "badge_cap must be at least 1"),
            other => panic!("unexpected source: {:?}", other),
        }
    }

    #[test]
    fn core_error_filesystem_keeps_io_source() {
        let path = PathBuf::from("/tmp/notibell/seed.toml");
        let core_err = CoreError::Filesystem {
            message: "Failed to read file".to_string(),
            path: path.clone(),
            source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(core_err.to_string(), format!("Filesystem Error: Failed to read file (Path: {:?})", path));
        let source = core_err.source().and_then(|s| s.downcast_ref::<io::Error>()).unwrap();
        assert_eq!(source.kind(), ErrorKind::PermissionDenied);
    }

    #[test]
    fn core_error_has_only_config_logging_and_filesystem() {
        let errors = [
            CoreError::from(ConfigError::ValidationError("x".to_string())),
            CoreError::from(LoggingError::FilterError("x".to_string())),
            CoreError::Filesystem {
                message: "x".to_string(),
                path: PathBuf::from("x"),
                source: io::Error::new(ErrorKind::NotFound, "x"),
            },
        ];
        for err in &errors {
            // No wildcard arm.
            let kind = match err {
                CoreError::Config(_) => "config",
                CoreError::Logging(_) => "logging",
                CoreError::Filesystem { .. } => "filesystem",
            };
            assert!(err.to_string().to_lowercase().starts_with(kind));
        }
    }

    #[test]
    fn core_error_logging_variant() {
        let core_err = CoreError::from(LoggingError::InitializationFailure("subscriber already set".to_string()));
        assert_eq!(core_err.to_string(), "Logging Error: Failed to initialize logging: subscriber already set");
    }

    #[test]
    fn config_error_parse_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("this is not valid toml").unwrap_err();
        let rendered = toml_err.to_string();
        let config_err = ConfigError::from(toml_err);

        assert_eq!(config_err.to_string(), format!("Failed to parse configuration file: {}", rendered));
        assert!(config_err.source().unwrap().is::<toml::de::Error>());
    }

    #[test]
    fn config_error_directory_unavailable() {
        let err = ConfigError::DirectoryUnavailable { dir_type: "App Config".to_string() };
        assert_eq!(err.to_string(), "Could not determine base directory for App Config");
        assert!(err.source().is_none());
    }
}
