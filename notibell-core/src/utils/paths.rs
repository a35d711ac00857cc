//! Application-specific path resolution.
//!
//! Paths are derived with `directories-next` from the constants below, e.g.
//! `~/.config/notibell` for configuration on Linux.

use crate::error::{ConfigError, CoreError};
use directories_next::ProjectDirs;
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "notibell";
const APPLICATION: &str = "notibell";

fn project_dirs(dir_type: &str) -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: dir_type.to_string(),
        })
    })
}

/// Returns the directory holding `config.toml`.
///
/// # Errors
/// Returns [`ConfigError::DirectoryUnavailable`] (wrapped in `CoreError`) if no
/// home directory can be determined.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App Config").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the directory used to resolve relative log file paths.
///
/// `ProjectDirs` has no state directory, so the data-local directory is used.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App State").map(|dirs| dirs.data_local_dir().to_path_buf())
}
