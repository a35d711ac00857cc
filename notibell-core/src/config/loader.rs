//! Configuration loading for notibell.
//!
//! [`ConfigLoader::load`] looks for the configuration file in this order:
//!
//! 1. the path named by the `NOTIBELL_CONFIG` environment variable;
//! 2. `config.toml` in the application config directory
//!    (see [`crate::utils::paths::get_app_config_dir`]).
//!
//! A missing file is not an error for `load()`: the defaults are used. After
//! parsing, [`ConfigLoader::validate_config`] normalizes log settings and
//! resolves relative paths.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs::read_to_string;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "NOTIBELL_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from the default location.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no config directory can be resolved.
    /// - [`ConfigError::ReadError`] for I/O failures other than "not found".
    /// - [`ConfigError::ParseError`] / [`ConfigError::ValidationError`] for bad content.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = match Self::config_path_from_env(std::env::var_os(CONFIG_PATH_ENV)) {
            Some(path) => path,
            None => get_app_config_dir()?.join(CONFIG_FILE_NAME),
        };
        Self::load_or_default(&path)
    }

    /// Loads and validates the configuration at `path`. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        let content = Self::read_config(path)?;
        Self::parse_and_validate(&content, path)
    }

    fn load_or_default(path: &Path) -> Result<CoreConfig, CoreError> {
        match Self::read_config(path) {
            Ok(content) => Self::parse_and_validate(&content, path),
            Err(ConfigError::ReadError { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!("No configuration at {:?}, using defaults", path);
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config, None)?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reads the file, reporting failures as [`ConfigError::ReadError`].
    fn read_config(path: &Path) -> Result<String, ConfigError> {
        read_to_string(path).map_err(|e| match e {
            CoreError::Filesystem { path, source, .. } => ConfigError::ReadError { path, source },
            other => ConfigError::ReadError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::Other, other.to_string()),
            },
        })
    }

    fn config_path_from_env(value: Option<OsString>) -> Option<PathBuf> {
        value.filter(|v| !v.is_empty()).map(PathBuf::from)
    }

    fn parse_and_validate(content: &str, path: &Path) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = toml::from_str(content).map_err(ConfigError::ParseError)?;
        Self::validate_config(&mut config, path.parent())?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Validates and normalizes `config` in place.
    ///
    /// `base_dir` is the directory of the configuration file; a relative
    /// `store.seed_path` is resolved against it. A relative
    /// `logging.file_path` is resolved against the application state directory.
    pub fn validate_config(config: &mut CoreConfig, base_dir: Option<&Path>) -> Result<(), CoreError> {
        let level_lower = config.logging.level.to_lowercase();
        match level_lower.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format_lower = config.logging.format.to_lowercase();
        match format_lower.as_str() {
            "text" | "json" => config.logging.format = format_lower,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(log_path) = &config.logging.file_path {
            if log_path.is_relative() {
                config.logging.file_path = Some(get_app_state_dir()?.join(log_path));
            }
        }

        if config.store.event_capacity == 0 {
            return Err(ConfigError::ValidationError("store.event_capacity must be at least 1".to_string()).into());
        }

        if let (Some(seed_path), Some(base)) = (&config.store.seed_path, base_dir) {
            if seed_path.is_relative() {
                config.store.seed_path = Some(base.join(seed_path));
            }
        }

        if config.bell.badge_cap == 0 {
            return Err(ConfigError::ValidationError("bell.badge_cap must be at least 1".to_string()).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_from_path_parses_and_normalizes() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            [logging]
            level = "DEBUG"
            format = "Json"

            [bell]
            badge_cap = 9
            "#,
        );

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.bell.badge_cap, 9);
        assert_eq!(config.store.event_capacity, 16);
    }

    #[test]
    fn load_from_path_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        match ConfigLoader::load_from_path(&missing) {
            Err(CoreError::Config(ConfigError::ReadError { path, source })) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ReadError, got {:?}", other),
        }
    }

    #[test]
    fn load_or_default_reports_unreadable_path() {
        let dir = tempdir().unwrap();
        // A directory exists but cannot be read as a file.
        match ConfigLoader::load_or_default(dir.path()) {
            Err(CoreError::Config(ConfigError::ReadError { path, source })) => {
                assert_eq!(path, dir.path());
                assert_ne!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ReadError, got {:?}", other),
        }
    }

    #[test]
    fn load_or_default_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn parse_error_is_reported() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[bell\nbadge_cap = ");
        assert!(matches!(
            ConfigLoader::load_from_path(&path),
            Err(CoreError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn relative_seed_path_resolves_against_config_dir() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "[store]\nseed_path = \"seed.toml\"\n");

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.store.seed_path, Some(dir.path().join("seed.toml")));
    }

    #[test]
    fn absolute_log_path_is_kept() {
        let mut config = CoreConfig::default();
        config.logging.file_path = Some(PathBuf::from("/var/log/notibell/bell.log"));
        ConfigLoader::validate_config(&mut config, None).unwrap();
        assert_eq!(config.logging.file_path, Some(PathBuf::from("/var/log/notibell/bell.log")));
    }

    #[rstest]
    #[case::bad_level("[logging]\nlevel = \"loud\"\n", "Invalid log level")]
    #[case::bad_format("[logging]\nformat = \"xml\"\n", "Invalid log format")]
    #[case::zero_capacity("[store]\nevent_capacity = 0\n", "event_capacity")]
    #[case::zero_badge_cap("[bell]\nbadge_cap = 0\n", "badge_cap")]
    fn invalid_values_fail_validation(#[case] content: &str, #[case] expected: &str) {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), content);
        match ConfigLoader::load_from_path(&path) {
            Err(CoreError::Config(ConfigError::ValidationError(msg))) => {
                assert!(msg.contains(expected), "message {:?} should mention {:?}", msg, expected)
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("/etc/notibell/custom.toml"), Some("/etc/notibell/custom.toml"))]
    fn env_override_path(#[case] value: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(
            ConfigLoader::config_path_from_env(value.map(OsString::from)),
            expected.map(PathBuf::from)
        );
    }
}
