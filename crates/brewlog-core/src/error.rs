//! Error types shared by the core and its storage backends

use thiserror::Error;

/// Failure reported by a storage backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// A record refers to a coffee, method or grinder that does not exist
    #[error("No {entity} named '{key}'")]
    MissingReference { entity: &'static str, key: String },

    /// A uniqueness constraint rejected the record
    #[error("{entity} '{key}' already exists")]
    Duplicate { entity: &'static str, key: String },

    /// Stored data could not be decoded into a record
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Self::Backend(msg.into())
    }

    pub fn missing<S: Into<String>>(entity: &'static str, key: S) -> Self {
        Self::MissingReference {
            entity,
            key: key.into(),
        }
    }

    pub fn duplicate<S: Into<String>>(entity: &'static str, key: S) -> Self {
        Self::Duplicate {
            entity,
            key: key.into(),
        }
    }
}

/// A field assembler could not fetch its suggestions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to get {field} suggestions")]
pub struct FieldError {
    /// Field label, e.g. `coffee name`
    pub field: &'static str,
    #[source]
    pub source: StoreError,
}

impl FieldError {
    pub fn new(field: &'static str, source: StoreError) -> Self {
        Self { field, source }
    }
}
