use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("Failed to access config file {path}: {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Serializing the effective configuration failed
    #[error("Failed to serialize config as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// No platform config directory could be determined
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// A value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
