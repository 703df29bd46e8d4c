//! Configuration types and their defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Effective configuration for a brewlog session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BrewlogConfig {
    /// Database file and connection settings
    pub database: DatabaseConfig,
    /// Prompt protocol tokens
    pub prompt: PromptConfig,
    /// How many suggestions each field offers
    pub suggestions: SuggestionLimits,
    /// List view sizing
    pub display: DisplayConfig,
    /// Logging defaults
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, `:memory:` for a throwaway store
    pub path: PathBuf,
    /// Enable write-ahead logging
    pub wal_mode: bool,
    /// Enforce foreign key constraints
    pub foreign_keys: bool,
    /// Milliseconds to wait on a locked database
    pub busy_timeout_ms: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("brewlog.db"),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5000,
        }
    }
}

/// Tokens recognised by every prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Typing exactly this aborts the current form
    pub quit_token: String,
    /// Typing this at a suggestion menu switches to free-form entry
    pub manual_entry_token: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            quit_token: "#".to_string(),
            manual_entry_token: "m".to_string(),
        }
    }
}

/// Suggestion list lengths per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionLimits {
    /// Coffee name suggestions in the standalone coffee name field
    pub coffee_names: usize,
    /// Coffee name suggestions inside the brewing and purchase forms
    pub form_coffee_names: usize,
    /// Roaster suggestions for a known coffee
    pub roasters: usize,
    /// Recently used brewing methods
    pub brewing_methods: usize,
    /// Recently used grinders
    pub grinders: usize,
    /// Recent coffee and water weights for a method and grinder
    pub weights: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            coffee_names: 8,
            form_coffee_names: 5,
            roasters: 5,
            brewing_methods: 5,
            grinders: 3,
            weights: 5,
        }
    }
}

/// Sizing of tables printed by the retrieval views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown when the user skips the limit prompt
    pub default_rows: usize,
    /// Rows shown for brewings when notes are included
    pub default_rows_with_notes: usize,
    /// Largest accepted row limit
    pub max_rows: usize,
    /// Column width used when wrapping notes
    pub note_width: usize,
    /// Terminal width assumed when stdout is not a terminal
    pub fallback_terminal_width: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_rows: 15,
            default_rows_with_notes: 5,
            max_rows: 50,
            note_width: 60,
            fallback_terminal_width: 120,
        }
    }
}

/// Logging defaults, overridden by `--log-level`, `--verbose` and `RUST_LOG`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level filter (off, error, warn, info, debug, trace)
    pub level: Option<String>,
}
