//! Listings for the retrieval views

use crate::columns::{choice_column, choice_label, sql_limit, SqlDate};
use crate::error::SqliteResult;
use brewlog_core::{
    Brewing, BrewingFilter, BrewingMethod, BrewingOrder, Coffee, CoffeePurchase, CuppedCoffee,
    Cupping, Grinder,
};
use rusqlite::types::ToSql;
use rusqlite::{named_params, Connection, Row};
use tracing::debug;

const BREWING_COLUMNS: &str = "
    b.date, c.name, c.roaster, m.name, b.roast_date, g.name, b.grind_setting,
    b.total_brewing_time_sec, b.coffee_grams, b.water_grams, b.v60_filter_type, b.rating,
    b.recommended_grind_setting_adjustment, b.recommended_coffee_weight_adjustment_grams,
    b.notes";

const BREWING_JOINS: &str = "
    FROM brewings AS b
    JOIN coffees AS c ON c.id = b.coffee_id
    JOIN brewing_methods AS m ON m.id = b.brewing_method_id
    JOIN grinders AS g ON g.id = b.grinder_id";

/// Matches every brewing when a parameter is `NULL`
pub(crate) const BREWING_FILTER: &str = "
    WHERE (:method IS NULL OR m.name = :method)
      AND (:v60 IS NULL OR b.v60_filter_type = :v60)
      AND (:coffee IS NULL OR c.name = :coffee)
      AND (:roaster IS NULL OR c.roaster = :roaster)
      AND (:grinder IS NULL OR g.name = :grinder)
      AND (:coffee_grams IS NULL OR b.coffee_grams = :coffee_grams)
      AND (:water_grams IS NULL OR b.water_grams = :water_grams)";

pub(crate) fn brewing_from_row(row: &Row<'_>) -> rusqlite::Result<Brewing> {
    Ok(Brewing {
        date: row.get::<_, SqlDate>(0)?.0,
        coffee_name: row.get(1)?,
        roaster: row.get(2)?,
        method_name: row.get(3)?,
        roast_date: row.get::<_, Option<SqlDate>>(4)?.map(|d| d.0),
        grinder_name: row.get(5)?,
        grind_setting: row.get(6)?,
        total_brewing_time_sec: row.get(7)?,
        coffee_grams: row.get(8)?,
        water_grams: row.get(9)?,
        v60_filter_type: choice_column(row, 10)?,
        rating: row.get(11)?,
        grind_adjustment: choice_column(row, 12)?,
        coffee_weight_adjustment_grams: row.get(13)?,
        notes: row.get(14)?,
    })
}

/// Named parameters for [`BREWING_FILTER`]
pub(crate) struct FilterParams<'a> {
    filter: &'a BrewingFilter,
    v60: Option<&'static str>,
}

impl<'a> FilterParams<'a> {
    pub(crate) fn new(filter: &'a BrewingFilter) -> Self {
        Self {
            filter,
            v60: choice_label(filter.v60_filter_type),
        }
    }

    pub(crate) fn named(&self) -> Vec<(&'static str, &dyn ToSql)> {
        vec![
            (":method", &self.filter.method_name as &dyn ToSql),
            (":v60", &self.v60 as &dyn ToSql),
            (":coffee", &self.filter.coffee_name as &dyn ToSql),
            (":roaster", &self.filter.roaster as &dyn ToSql),
            (":grinder", &self.filter.grinder_name as &dyn ToSql),
            (":coffee_grams", &self.filter.coffee_grams as &dyn ToSql),
            (":water_grams", &self.filter.water_grams as &dyn ToSql),
        ]
    }
}

pub(crate) fn brewings(
    conn: &Connection,
    order: BrewingOrder,
    limit: usize,
) -> SqliteResult<Vec<Brewing>> {
    let order_by = match order {
        BrewingOrder::LastAdded => "b.id DESC",
        BrewingOrder::Rating => "b.rating IS NULL, b.rating DESC, b.id DESC",
    };
    let sql = format!(
        "SELECT {BREWING_COLUMNS} {BREWING_JOINS} ORDER BY {order_by} LIMIT :limit"
    );

    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt
        .query_map(named_params! { ":limit": sql_limit(limit) }, brewing_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    debug!(?order, found = rows.len(), "Loaded brewings");
    Ok(rows)
}

pub(crate) fn filtered_brewings(
    conn: &Connection,
    filter: &BrewingFilter,
    limit: usize,
) -> SqliteResult<Vec<Brewing>> {
    let sql = format!(
        "SELECT {BREWING_COLUMNS} {BREWING_JOINS} {BREWING_FILTER} ORDER BY b.id DESC LIMIT :limit"
    );
    let limit = sql_limit(limit);
    let params = FilterParams::new(filter);
    let mut named = params.named();
    named.push((":limit", &limit as &dyn ToSql));

    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt
        .query_map(named.as_slice(), brewing_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    debug!(?filter, found = rows.len(), "Loaded filtered brewings");
    Ok(rows)
}

pub(crate) fn coffees(conn: &Connection, limit: usize) -> SqliteResult<Vec<Coffee>> {
    let mut stmt = conn.prepare_cached(
        "SELECT name, roaster, region, variety, processing_method, decaf
         FROM coffees ORDER BY id DESC LIMIT :limit",
    )?;
    let rows = stmt
        .query_map(named_params! { ":limit": sql_limit(limit) }, |row| {
            Ok(Coffee {
                name: row.get(0)?,
                roaster: row.get(1)?,
                region: row.get(2)?,
                variety: row.get(3)?,
                processing: row.get(4)?,
                decaf: row.get::<_, Option<bool>>(5)?.unwrap_or(false),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub(crate) fn purchases(conn: &Connection, limit: usize) -> SqliteResult<Vec<CoffeePurchase>> {
    let mut stmt = conn.prepare_cached(
        "SELECT c.name, c.roaster, p.bought_date, p.roast_date
         FROM purchases AS p
         JOIN coffees AS c ON c.id = p.coffee_id
         ORDER BY p.id DESC LIMIT :limit",
    )?;
    let rows = stmt
        .query_map(named_params! { ":limit": sql_limit(limit) }, |row| {
            Ok(CoffeePurchase {
                coffee_name: row.get(0)?,
                roaster: row.get(1)?,
                bought_date: row.get::<_, SqlDate>(2)?.0,
                roast_date: row.get::<_, Option<SqlDate>>(3)?.map(|d| d.0),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Newest cuppings, each followed by its coffees in rank order
pub(crate) fn cuppings(conn: &Connection, limit: usize) -> SqliteResult<Vec<Cupping>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, duration_min, notes FROM cuppings ORDER BY id DESC LIMIT :limit",
    )?;
    let headers = stmt
        .query_map(named_params! { ":limit": sql_limit(limit) }, |row| {
            Ok((
                row.get::<_, i64>(0)?,
                Cupping {
                    date: row.get::<_, SqlDate>(1)?.0,
                    duration_min: row.get(2)?,
                    notes: row.get(3)?,
                    coffees: Vec::new(),
                },
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut coffees = conn.prepare_cached(
        "SELECT c.name, c.roaster, cc.rank, cc.notes
         FROM cupped_coffees AS cc
         JOIN coffees AS c ON c.id = cc.coffee_id
         WHERE cc.cupping_id = :cupping_id
         ORDER BY cc.rank, c.name",
    )?;
    let mut cuppings = Vec::with_capacity(headers.len());
    for (id, mut cupping) in headers {
        cupping.coffees = coffees
            .query_map(named_params! { ":cupping_id": id }, |row| {
                Ok(CuppedCoffee {
                    coffee_name: row.get(0)?,
                    roaster: row.get(1)?,
                    rank: row.get(2)?,
                    notes: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        cuppings.push(cupping);
    }
    Ok(cuppings)
}

pub(crate) fn brewing_methods(conn: &Connection) -> SqliteResult<Vec<BrewingMethod>> {
    let mut stmt =
        conn.prepare_cached("SELECT name FROM brewing_methods ORDER BY name COLLATE NOCASE")?;
    let rows = stmt
        .query_map([], |row| Ok(BrewingMethod { name: row.get(0)? }))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub(crate) fn grinders(conn: &Connection) -> SqliteResult<Vec<Grinder>> {
    let mut stmt = conn.prepare_cached(
        "SELECT name, company, max_grind_setting FROM grinders ORDER BY name COLLATE NOCASE",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Grinder {
                name: row.get(0)?,
                company: row.get(1)?,
                max_grind_setting: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
