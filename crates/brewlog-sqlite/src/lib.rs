//! SQLite storage backend for brewlog
//!
//! Implements [`brewlog_core::SuggestionSource`] and
//! [`brewlog_core::RecordStore`] over a single embedded database file.
//!
//! ## Features
//!
//! - **Schema migrations**: tables are created on first open and versioned in
//!   `schema_migrations`
//! - **Atomic inserts**: each record, including a cupping and all its coffees,
//!   is written in one transaction
//! - **Nullable columns as `Option`**: unset enums, skipped ratings and missing
//!   roast dates are stored as `NULL`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brewlog_sqlite::{SqliteConfig, SqliteStore};
//! use brewlog_core::{NameQuery, SuggestionSource};
//!
//! let store = SqliteStore::open(SqliteConfig::new("./brewlog.db"))?;
//! let methods = store.lookup_names(NameQuery::BrewingMethods, 5)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod schema;
pub mod store;

mod columns;
mod insert;
mod retrieve;
mod statistics;
mod suggestions;

// Re-exports
pub use config::SqliteConfig;
pub use connection::SqlitePool;
pub use error::{SqliteError, SqliteResult};
pub use store::SqliteStore;
