//! Schema management and migrations

use crate::error::{SqliteError, SqliteResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Schema version - increment when making schema changes
const SCHEMA_VERSION: i32 = 1;

/// Apply all pending migrations
pub fn apply_migrations(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking migrations");

    if current_version < 1 {
        info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Applying schema migrations"
        );
        apply_migration_v1(conn)?;
    }

    Ok(())
}

fn current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })?;

    Ok(version.unwrap_or(0))
}

fn record_migration(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO schema_migrations (version) VALUES (?)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: journal tables
fn apply_migration_v1(conn: &Connection) -> SqliteResult<()> {
    debug!("Applying migration v1: journal tables");

    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply v1 schema: {}", e)))?;

    record_migration(conn, 1)?;
    info!("Migration v1 applied successfully");
    Ok(())
}

/// Initial schema SQL
///
/// Dates are `YYYY-MM-DD` text. Optional values are `NULL`, never empty
/// strings or zero.
const SCHEMA_V1: &str = r#"
-- ============================================================================
-- TABLE: coffees
-- ============================================================================

CREATE TABLE IF NOT EXISTS coffees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    roaster TEXT NOT NULL,
    region TEXT,
    variety TEXT,
    processing_method TEXT,
    decaf INTEGER CHECK (decaf IS NULL OR decaf IN (0, 1)),
    UNIQUE(name, roaster)
);

-- ============================================================================
-- TABLE: purchases
-- ============================================================================

CREATE TABLE IF NOT EXISTS purchases (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    coffee_id INTEGER NOT NULL REFERENCES coffees(id),
    bought_date TEXT NOT NULL,
    roast_date TEXT
);

CREATE INDEX IF NOT EXISTS idx_purchases_coffee ON purchases(coffee_id);

-- ============================================================================
-- TABLE: brewing_methods
-- ============================================================================

CREATE TABLE IF NOT EXISTS brewing_methods (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

-- ============================================================================
-- TABLE: grinders
-- ============================================================================

CREATE TABLE IF NOT EXISTS grinders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    company TEXT,
    max_grind_setting INTEGER
);

-- ============================================================================
-- TABLE: brewings
-- ============================================================================

CREATE TABLE IF NOT EXISTS brewings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    coffee_id INTEGER NOT NULL REFERENCES coffees(id),
    brewing_method_id INTEGER NOT NULL REFERENCES brewing_methods(id),
    roast_date TEXT,
    grinder_id INTEGER NOT NULL REFERENCES grinders(id),
    grind_setting INTEGER NOT NULL CHECK (grind_setting >= 0),
    total_brewing_time_sec INTEGER NOT NULL CHECK (total_brewing_time_sec > 0),
    water_grams INTEGER NOT NULL CHECK (water_grams > 0),
    coffee_grams INTEGER NOT NULL CHECK (coffee_grams > 0),
    v60_filter_type TEXT CHECK (v60_filter_type IS NULL OR v60_filter_type IN ('eu', 'jp')),
    rating INTEGER CHECK (rating IS NULL OR rating BETWEEN 1 AND 10),
    recommended_grind_setting_adjustment TEXT CHECK (
        recommended_grind_setting_adjustment IS NULL
        OR recommended_grind_setting_adjustment IN ('lower', 'higher')
    ),
    recommended_coffee_weight_adjustment_grams INTEGER,
    notes TEXT
);

CREATE INDEX IF NOT EXISTS idx_brewings_coffee ON brewings(coffee_id);
CREATE INDEX IF NOT EXISTS idx_brewings_method_grinder ON brewings(brewing_method_id, grinder_id);

-- ============================================================================
-- TABLE: cuppings
-- ============================================================================

CREATE TABLE IF NOT EXISTS cuppings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    duration_min INTEGER NOT NULL CHECK (duration_min > 0),
    notes TEXT NOT NULL
);

-- ============================================================================
-- TABLE: cupped_coffees
-- ============================================================================
-- One row per coffee tasted in a cupping

CREATE TABLE IF NOT EXISTS cupped_coffees (
    cupping_id INTEGER NOT NULL REFERENCES cuppings(id) ON DELETE CASCADE,
    coffee_id INTEGER NOT NULL REFERENCES coffees(id),
    rank INTEGER NOT NULL CHECK (rank > 0),
    notes TEXT NOT NULL,
    PRIMARY KEY (cupping_id, coffee_id)
);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        let rows = stmt.query_map([], |row| row.get(0)).unwrap();
        rows.filter_map(Result::ok).collect()
    }

    #[test]
    fn test_schema_applied() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();

        let tables = tables(&conn);
        for table in [
            "coffees",
            "purchases",
            "brewing_methods",
            "grinders",
            "brewings",
            "cuppings",
            "cupped_coffees",
        ] {
            assert!(tables.contains(&table.to_string()), "missing {table}");
        }
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();
        apply_migrations(&conn).unwrap();

        assert_eq!(current_version(&conn).unwrap(), SCHEMA_VERSION);
        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_rating_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        apply_migrations(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO coffees (name, roaster) VALUES ('Guji', 'Tim Wendelboe');
             INSERT INTO brewing_methods (name) VALUES ('V60');
             INSERT INTO grinders (name) VALUES ('Comandante');",
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO brewings (date, coffee_id, brewing_method_id, grinder_id, grind_setting,
                total_brewing_time_sec, water_grams, coffee_grams, rating)
             VALUES ('2024-03-15', 1, 1, 1, 20, 180, 250, 15, 11)",
            [],
        );
        assert!(result.is_err());
    }
}
