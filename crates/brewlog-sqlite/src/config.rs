//! Connection settings

use brewlog_config::DatabaseConfig;
use std::path::{Path, PathBuf};

const MEMORY_PATH: &str = ":memory:";

/// SQLite connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteConfig {
    /// Database file, or `:memory:`
    pub path: PathBuf,
    /// Use write-ahead logging
    pub wal_mode: bool,
    /// Enforce `REFERENCES` clauses
    pub foreign_keys: bool,
    pub busy_timeout_ms: u32,
    /// Page cache size, negative values are KiB
    pub cache_size: i32,
}

impl SqliteConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Throwaway in-memory database
    pub fn memory() -> Self {
        Self {
            path: PathBuf::from(MEMORY_PATH),
            wal_mode: false,
            ..Self::default()
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path.to_str() == Some(MEMORY_PATH)
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("brewlog.db"),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5000,
            cache_size: -2000,
        }
    }
}

impl From<&DatabaseConfig> for SqliteConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            path: config.path.clone(),
            wal_mode: config.wal_mode,
            foreign_keys: config.foreign_keys,
            busy_timeout_ms: config.busy_timeout_ms,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_config_disables_wal() {
        let config = SqliteConfig::memory();
        assert!(config.is_memory());
        assert!(!config.wal_mode);
        assert!(!SqliteConfig::new("coffee.db").is_memory());
    }

    #[test]
    fn converts_from_app_config() {
        let app = DatabaseConfig {
            path: PathBuf::from("/tmp/x.db"),
            wal_mode: false,
            foreign_keys: true,
            busy_timeout_ms: 100,
        };
        let config = SqliteConfig::from(&app);
        assert_eq!(config.path, PathBuf::from("/tmp/x.db"));
        assert!(!config.wal_mode);
        assert_eq!(config.busy_timeout_ms, 100);
    }
}
