//! Configuration management for notibell.
//!
//! - [`types`]: the configuration schema ([`CoreConfig`] and its sections).
//! - [`defaults`]: default values used by serde and the `Default` impls.
//! - [`loader`]: [`ConfigLoader`], which locates, parses and validates the file.
//!
//! ```rust,ignore
//! use notibell_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => println!("badge cap: {}", config.bell.badge_cap),
//!     Err(e) => {
//!         notibell_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration error: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{BellConfig, CoreConfig, LoggingConfig, StoreConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn core_config_default_matches_section_defaults() {
        let config = CoreConfig::default();
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.bell, BellConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert_eq!(config.store.event_capacity, 16);
        assert_eq!(config.bell.badge_cap, 99);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn core_config_deserialize_minimal_json() {
        let json_data = r#"{ "logging": { "level": "debug" } }"#;
        let config: CoreConfig = serde_json::from_str(json_data).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_path, None);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn core_config_deserialize_full() {
        let toml_str = r#"
            [logging]
            level = "trace"
            file_path = "/var/log/notibell.log"
            format = "json"

            [store]
            event_capacity = 4
            seed_path = "seed.toml"

            [bell]
            badge_cap = 9
        "#;
        let config: CoreConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.logging.file_path, Some(PathBuf::from("/var/log/notibell.log")));
        assert_eq!(config.store.event_capacity, 4);
        assert_eq!(config.store.seed_path, Some(PathBuf::from("seed.toml")));
        assert_eq!(config.bell.badge_cap, 9);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml_str = r#"
            [bell]
            badge_cap = 9
            colour = "red"
        "#;
        assert!(toml::from_str::<CoreConfig>(toml_str).is_err());
    }
}
