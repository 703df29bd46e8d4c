//! History lookups behind the suggestion lists
//!
//! "Most recent first" is decided by the newest row id of each distinct value,
//! so a coffee brewed yesterday outranks one brewed often last month.

use crate::columns::{sql_limit, SqlDate};
use crate::error::SqliteResult;
use crate::store::SqliteStore;
use brewlog_core::{Date, NameQuery, StoreResult, SuggestionSource, WeightKind, WeightQuery};
use rusqlite::{named_params, Connection, OptionalExtension};
use tracing::debug;

const BREWED_COFFEES: &str = "
    SELECT c.name FROM brewings AS b
    JOIN coffees AS c ON c.id = b.coffee_id
    GROUP BY c.name
    ORDER BY MAX(b.id) DESC
    LIMIT :limit";

const PURCHASED_COFFEES: &str = "
    SELECT c.name FROM purchases AS p
    JOIN coffees AS c ON c.id = p.coffee_id
    GROUP BY c.name
    ORDER BY MAX(p.id) DESC
    LIMIT :limit";

const ROASTERS_OF: &str = "
    SELECT roaster FROM coffees
    WHERE name = :name
    ORDER BY id DESC
    LIMIT :limit";

const BREWING_METHODS: &str = "
    SELECT m.name FROM brewings AS b
    JOIN brewing_methods AS m ON m.id = b.brewing_method_id
    GROUP BY m.name
    ORDER BY MAX(b.id) DESC
    LIMIT :limit";

const GRINDERS: &str = "
    SELECT g.name FROM brewings AS b
    JOIN grinders AS g ON g.id = b.grinder_id
    GROUP BY g.name
    ORDER BY MAX(b.id) DESC
    LIMIT :limit";

const LAST_ROAST_DATE: &str = "
    SELECT p.roast_date FROM purchases AS p
    JOIN coffees AS c ON c.id = p.coffee_id
    WHERE c.name = :name
    ORDER BY p.id DESC
    LIMIT 1";

fn weights_sql(kind: WeightKind) -> String {
    let column = match kind {
        WeightKind::Coffee => "coffee_grams",
        WeightKind::Water => "water_grams",
    };
    format!(
        "SELECT b.{column} FROM brewings AS b
         JOIN brewing_methods AS m ON m.id = b.brewing_method_id
         JOIN grinders AS g ON g.id = b.grinder_id
         WHERE m.name = :method AND g.name = :grinder
         GROUP BY b.{column}
         ORDER BY MAX(b.id) DESC
         LIMIT :limit"
    )
}

fn names(conn: &Connection, query: NameQuery<'_>, limit: usize) -> SqliteResult<Vec<String>> {
    let limit = sql_limit(limit);
    let (sql, name) = match query {
        NameQuery::BrewedCoffees => (BREWED_COFFEES, None),
        NameQuery::PurchasedCoffees => (PURCHASED_COFFEES, None),
        NameQuery::RoastersOf(name) => (ROASTERS_OF, Some(name)),
        NameQuery::BrewingMethods => (BREWING_METHODS, None),
        NameQuery::Grinders => (GRINDERS, None),
    };

    let mut stmt = conn.prepare_cached(sql)?;
    let rows = match name {
        Some(name) => stmt
            .query_map(named_params! { ":name": name, ":limit": limit }, |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?,
        None => stmt
            .query_map(named_params! { ":limit": limit }, |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?,
    };

    debug!(?query, found = rows.len(), "Looked up names");
    Ok(rows)
}

fn weights(conn: &Connection, query: WeightQuery<'_>, limit: usize) -> SqliteResult<Vec<i64>> {
    let mut stmt = conn.prepare_cached(&weights_sql(query.kind))?;
    let rows = stmt
        .query_map(
            named_params! {
                ":method": query.method_name,
                ":grinder": query.grinder_name,
                ":limit": sql_limit(limit),
            },
            |row| row.get(0),
        )?
        .collect::<Result<Vec<i64>, _>>()?;

    debug!(?query, found = rows.len(), "Looked up weights");
    Ok(rows)
}

fn last_roast_date(conn: &Connection, coffee_name: &str) -> SqliteResult<Option<Date>> {
    let date: Option<Option<SqlDate>> = conn
        .query_row(LAST_ROAST_DATE, named_params! { ":name": coffee_name }, |row| {
            row.get(0)
        })
        .optional()?;
    Ok(date.flatten().map(|d| d.0))
}

impl SuggestionSource for SqliteStore {
    fn lookup_names(&self, query: NameQuery<'_>, limit: usize) -> StoreResult<Vec<String>> {
        Ok(self.pool().with_connection(|conn| names(conn, query, limit))?)
    }

    fn lookup_weights(&self, query: WeightQuery<'_>, limit: usize) -> StoreResult<Vec<i64>> {
        Ok(self.pool().with_connection(|conn| weights(conn, query, limit))?)
    }

    fn lookup_last_roast_date(&self, coffee_name: &str) -> StoreResult<Option<Date>> {
        Ok(self
            .pool()
            .with_connection(|conn| last_roast_date(conn, coffee_name))?)
    }
}
