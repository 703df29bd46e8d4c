use crate::output::{new_table, terminal_width};
use anyhow::{Context, Result};
use brewlog_config::BrewlogConfig;
use brewlog_core::{RecordKind, RecordStore};
use brewlog_sqlite::{SqliteConfig, SqliteStore};

pub fn execute(config: &BrewlogConfig) -> Result<()> {
    let store = SqliteStore::open(SqliteConfig::from(&config.database))
        .with_context(|| format!("failed to open {}", config.database.path.display()))?;
    let width = terminal_width(config.display.fallback_terminal_width);
    println!("{}", totals_table(&store, width)?);
    println!("\nDatabase: {}", config.database.path.display());
    Ok(())
}

fn totals_table<S: RecordStore + ?Sized>(store: &S, width: u16) -> Result<comfy_table::Table> {
    let mut table = new_table(width);
    table.set_header(vec!["Records", "Total"]);
    for kind in RecordKind::ALL {
        let total = store
            .count(kind)
            .with_context(|| format!("failed to count {}", kind.plural()))?;
        table.add_row(vec![kind.plural().to_string(), total.to_string()]);
    }
    Ok(table)
}
