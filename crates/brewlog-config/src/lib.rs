//! # brewlog configuration
//!
//! Typed configuration for the brewlog workspace. This crate is the foundation
//! layer: the core, storage and CLI crates read from it, it depends on none of them.
//!
//! Loading follows a fixed precedence: built-in defaults, then the TOML file at
//! `~/.config/brewlog/config.toml` (or an explicit path), then `BREWLOG_*`
//! environment variables, then command-line overrides.
//!
//! ```rust,no_run
//! use brewlog_config::BrewlogConfig;
//!
//! let config = BrewlogConfig::load(None, None)?;
//! println!("database at {}", config.database.path.display());
//! # Ok::<(), brewlog_config::ConfigError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod loader;

pub use config::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::{ENV_DB_PATH, ENV_LOG_LEVEL, ENV_QUIT_TOKEN, ENV_TEST_MODE};
