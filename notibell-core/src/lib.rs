//! # notibell core (`notibell-core`)
//!
//! Infrastructure shared by the notibell crates:
//!
//! - **Error handling**: [`CoreError`] with the specific [`ConfigError`] and
//!   [`LoggingError`].
//! - **Configuration**: TOML configuration with defaults and validation through
//!   [`ConfigLoader`] and [`CoreConfig`].
//! - **Logging**: `tracing` subscriber setup in [`logging`].
//! - **Utilities**: filesystem and path helpers in [`utils`].
//!
//! ```rust,ignore
//! use notibell_core::{ConfigLoader, CoreError, init_logging};
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging)?;
//!     tracing::info!("notibell core initialized");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use config::{BellConfig, ConfigLoader, CoreConfig, LoggingConfig, StoreConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
