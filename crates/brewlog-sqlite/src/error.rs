//! Error types for SQLite storage

use brewlog_core::StoreError;
use rusqlite::ffi;
use thiserror::Error;

/// SQLite storage error type
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema/migration error
    #[error("Schema error: {0}")]
    Schema(String),

    /// A referenced coffee, method or grinder does not exist
    #[error("No {entity} named '{key}'")]
    MissingReference { entity: &'static str, key: String },

    /// Unique or primary key constraint failed
    #[error("{entity} '{key}' already exists")]
    Duplicate { entity: &'static str, key: String },

    /// A stored value could not be decoded
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for SQLite operations
pub type SqliteResult<T> = Result<T, SqliteError>;

impl SqliteError {
    /// Turns a uniqueness violation into [`SqliteError::Duplicate`], anything
    /// else passes through unchanged
    pub(crate) fn on_duplicate(
        err: rusqlite::Error,
        entity: &'static str,
        key: impl FnOnce() -> String,
    ) -> Self {
        if is_unique_violation(&err) {
            Self::Duplicate { entity, key: key() }
        } else {
            Self::Rusqlite(err)
        }
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

impl From<SqliteError> for StoreError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Connection(msg) => Self::Backend(msg),
            SqliteError::Schema(msg) => Self::Backend(msg),
            SqliteError::MissingReference { entity, key } => Self::MissingReference { entity, key },
            SqliteError::Duplicate { entity, key } => Self::Duplicate { entity, key },
            SqliteError::InvalidData(msg) => Self::InvalidData(msg),
            SqliteError::Rusqlite(rusqlite::Error::FromSqlConversionFailure(_, _, e)) => {
                Self::InvalidData(e.to_string())
            }
            SqliteError::Rusqlite(e) => Self::Backend(e.to_string()),
        }
    }
}
