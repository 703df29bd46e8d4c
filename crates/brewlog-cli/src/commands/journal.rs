use crate::journal::Journal;
use crate::menu::MenuConfig;
use crate::output::terminal_width;
use crate::session;
use anyhow::{Context, Result};
use brewlog_config::BrewlogConfig;
use brewlog_core::prompt::StdConsole;
use brewlog_core::PromptSettings;
use brewlog_sqlite::{SqliteConfig, SqliteStore};
use tracing::info;

/// Open the journal database and run the interactive menu on stdin/stdout
pub fn execute(config: &BrewlogConfig) -> Result<()> {
    let store = SqliteStore::open(SqliteConfig::from(&config.database))
        .with_context(|| format!("failed to open {}", config.database.path.display()))?;
    info!(path = %config.database.path.display(), "Opened journal database");

    let console = StdConsole::stdio(PromptSettings::new(&config.prompt));
    let width = terminal_width(config.display.fallback_terminal_width);
    let mut journal = Journal::new(&store, console, config, width);
    session::run(&mut journal, &MenuConfig::standard())
}
