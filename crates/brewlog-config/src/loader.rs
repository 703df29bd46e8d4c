//! Loading, overriding and validating [`BrewlogConfig`]

use crate::config::BrewlogConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the database path
pub const ENV_DB_PATH: &str = "BREWLOG_DB";
/// Overrides the prompt quit token
pub const ENV_QUIT_TOKEN: &str = "BREWLOG_QUIT_TOKEN";
/// Overrides the default log level
pub const ENV_LOG_LEVEL: &str = "BREWLOG_LOG_LEVEL";
/// When set, the user's config file is never read
pub const ENV_TEST_MODE: &str = "BREWLOG_TEST_MODE";

const EXAMPLE_CONFIG: &str = r##"# brewlog configuration
# Location: ~/.config/brewlog/config.toml

[database]
# SQLite database file, relative paths resolve against the working directory
path = "brewlog.db"
wal_mode = true
foreign_keys = true
busy_timeout_ms = 5000

[prompt]
# Entering exactly this at any prompt abandons the current form
quit_token = "#"
# Entering this at a suggestion menu switches to typing a value
manual_entry_token = "m"

[suggestions]
coffee_names = 8
form_coffee_names = 5
roasters = 5
brewing_methods = 5
grinders = 3
weights = 5

[display]
default_rows = 15
default_rows_with_notes = 5
max_rows = 50
note_width = 60
fallback_terminal_width = 120

[logging]
# off, error, warn, info, debug, trace
# level = "warn"
"##;

impl BrewlogConfig {
    /// Load configuration with precedence: defaults < file < env < args
    pub fn load(config_file: Option<PathBuf>, db_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::from_file_or_default(config_file)?;

        config.apply_overrides(|key| std::env::var(key).ok());

        if let Some(path) = db_path {
            config.database.path = path;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration document, filling unspecified keys with defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Get default config file path
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("brewlog");
        Ok(config_dir.join("config.toml"))
    }

    /// Create a new config file with example values
    pub fn create_example(path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, EXAMPLE_CONFIG).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Display the current configuration as TOML
    pub fn display_as_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply environment-style overrides from a lookup function
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DB_PATH) {
            debug!(%path, "database path overridden from environment");
            self.database.path = PathBuf::from(path);
        }
        if let Some(token) = lookup(ENV_QUIT_TOKEN) {
            self.prompt.quit_token = token;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = Some(level);
        }
    }

    /// Reject settings that would make prompts ambiguous or lists empty
    pub fn validate(&self) -> ConfigResult<()> {
        let quit = self.prompt.quit_token.as_str();
        let manual = self.prompt.manual_entry_token.as_str();

        if quit.trim().is_empty() || manual.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "prompt tokens must not be empty".to_string(),
            ));
        }
        if quit == manual {
            return Err(ConfigError::Invalid(format!(
                "quit token and manual entry token are both '{quit}'"
            )));
        }
        if quit.parse::<i64>().is_ok() || manual.parse::<i64>().is_ok() {
            return Err(ConfigError::Invalid(
                "prompt tokens must not be numbers, they would shadow menu selections".to_string(),
            ));
        }

        let limits = &self.suggestions;
        let all = [
            limits.coffee_names,
            limits.form_coffee_names,
            limits.roasters,
            limits.brewing_methods,
            limits.grinders,
            limits.weights,
        ];
        if all.contains(&0) {
            return Err(ConfigError::Invalid(
                "suggestion limits must be at least 1".to_string(),
            ));
        }

        if self.display.max_rows == 0 || self.display.default_rows > self.display.max_rows {
            return Err(ConfigError::Invalid(format!(
                "display.default_rows ({}) must be between 1 and display.max_rows ({})",
                self.display.default_rows, self.display.max_rows
            )));
        }

        Ok(())
    }

    fn from_file_or_default(config_file: Option<PathBuf>) -> ConfigResult<Self> {
        if std::env::var(ENV_TEST_MODE).is_ok() {
            return Ok(Self::default());
        }

        let path = config_file
            .or_else(|| Self::default_config_path().ok())
            .filter(|p| p.exists());

        let Some(path) = path else {
            return Ok(Self::default());
        };

        debug!(path = %path.display(), "loading config file");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = BrewlogConfig::default();
        config.validate().expect("defaults must validate");
        assert_eq!(config.prompt.quit_token, "#");
        assert_eq!(config.prompt.manual_entry_token, "m");
        assert_eq!(config.suggestions.coffee_names, 8);
        assert_eq!(config.suggestions.grinders, 3);
        assert_eq!(config.database.path, PathBuf::from("brewlog.db"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = BrewlogConfig::from_toml_str(
            r#"
            [prompt]
            quit_token = "q!"

            [suggestions]
            roasters = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.prompt.quit_token, "q!");
        assert_eq!(config.prompt.manual_entry_token, "m");
        assert_eq!(config.suggestions.roasters, 2);
        assert_eq!(config.suggestions.weights, 5);
        assert_eq!(config.display, Default::default());
    }

    #[test]
    fn example_file_parses_to_defaults() {
        let config = BrewlogConfig::from_toml_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, BrewlogConfig::default());
    }

    #[test]
    fn overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            (ENV_DB_PATH, "/tmp/coffee.db"),
            (ENV_QUIT_TOKEN, "!"),
            (ENV_LOG_LEVEL, "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = BrewlogConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.database.path, PathBuf::from("/tmp/coffee.db"));
        assert_eq!(config.prompt.quit_token, "!");
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
    }

    #[test]
    fn numeric_quit_token_is_rejected() {
        let mut config = BrewlogConfig::default();
        config.prompt.quit_token = "1".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn clashing_tokens_are_rejected() {
        let mut config = BrewlogConfig::default();
        config.prompt.quit_token = "m".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = BrewlogConfig::default();
        config.suggestions.weights = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn display_round_trips_through_toml() {
        let config = BrewlogConfig::default();
        let text = config.display_as_toml().unwrap();
        assert!(text.contains("[database]"));
        assert_eq!(BrewlogConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    #[serial]
    fn load_reads_explicit_file_and_args_win() {
        std::env::remove_var(ENV_TEST_MODE);
        std::env::remove_var(ENV_DB_PATH);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[database]\npath = \"from-file.db\"\n").unwrap();

        let config = BrewlogConfig::load(Some(path.clone()), None).unwrap();
        assert_eq!(config.database.path, PathBuf::from("from-file.db"));

        let config = BrewlogConfig::load(Some(path), Some(PathBuf::from("from-args.db"))).unwrap();
        assert_eq!(config.database.path, PathBuf::from("from-args.db"));
    }

    #[test]
    #[serial]
    fn load_reports_parse_errors_with_path() {
        std::env::remove_var(ENV_TEST_MODE);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[database\npath = 1").unwrap();

        let err = BrewlogConfig::load(Some(path.clone()), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    #[serial]
    fn test_mode_skips_user_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[prompt]\nquit_token = \"zz\"\n").unwrap();

        std::env::set_var(ENV_TEST_MODE, "1");
        let config = BrewlogConfig::load(Some(path), None);
        std::env::remove_var(ENV_TEST_MODE);

        assert_eq!(config.unwrap().prompt.quit_token, "#");
    }

    #[test]
    fn create_example_writes_parseable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        BrewlogConfig::create_example(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(BrewlogConfig::from_toml_str(&contents).is_ok());
    }
}
