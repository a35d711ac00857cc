//! General utilities for notibell core.
//!
//! - [`fs`]: filesystem helpers that map `std::io::Error` into [`crate::CoreError`].
//! - [`paths`]: application-specific directories resolved through `directories-next`.

pub mod fs;
pub mod paths;

pub use fs::{ensure_dir_exists, read_to_string};
