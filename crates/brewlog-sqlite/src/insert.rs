//! Record inserts
//!
//! Each function runs inside the transaction opened by the store. References
//! are resolved by name first so that a missing coffee, method or grinder is
//! reported as such instead of as a foreign key failure.

use crate::columns::{choice_label, sql_date, SqlDate};
use crate::error::{SqliteError, SqliteResult};
use brewlog_core::{Brewing, BrewingMethod, Coffee, CoffeePurchase, Cupping, Grinder};
use rusqlite::{named_params, Connection, OptionalExtension};
use tracing::{debug, info};

fn coffee_key(name: &str, roaster: &str) -> String {
    format!("{name} ({roaster})")
}

fn coffee_id(conn: &Connection, name: &str, roaster: &str) -> SqliteResult<i64> {
    conn.query_row(
        "SELECT id FROM coffees WHERE name = :name AND roaster = :roaster",
        named_params! { ":name": name, ":roaster": roaster },
        |row| row.get(0),
    )
    .optional()?
    .ok_or_else(|| SqliteError::MissingReference {
        entity: "coffee",
        key: coffee_key(name, roaster),
    })
}

fn brewing_method_id(conn: &Connection, name: &str) -> SqliteResult<i64> {
    conn.query_row(
        "SELECT id FROM brewing_methods WHERE name = :name",
        named_params! { ":name": name },
        |row| row.get(0),
    )
    .optional()?
    .ok_or_else(|| SqliteError::MissingReference {
        entity: "brewing method",
        key: name.to_string(),
    })
}

fn grinder_id(conn: &Connection, name: &str) -> SqliteResult<i64> {
    conn.query_row(
        "SELECT id FROM grinders WHERE name = :name",
        named_params! { ":name": name },
        |row| row.get(0),
    )
    .optional()?
    .ok_or_else(|| SqliteError::MissingReference {
        entity: "coffee grinder",
        key: name.to_string(),
    })
}

pub(crate) fn coffee(conn: &Connection, coffee: &Coffee) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO coffees (name, roaster, region, variety, processing_method, decaf)
         VALUES (:name, :roaster, :region, :variety, :processing, :decaf)",
        named_params! {
            ":name": coffee.name,
            ":roaster": coffee.roaster,
            ":region": coffee.region,
            ":variety": coffee.variety,
            ":processing": coffee.processing,
            ":decaf": coffee.decaf,
        },
    )
    .map_err(|e| {
        SqliteError::on_duplicate(e, "coffee", || coffee_key(&coffee.name, &coffee.roaster))
    })?;

    info!(name = %coffee.name, roaster = %coffee.roaster, "Inserted coffee");
    Ok(())
}

pub(crate) fn purchase(conn: &Connection, purchase: &CoffeePurchase) -> SqliteResult<()> {
    let coffee_id = coffee_id(conn, &purchase.coffee_name, &purchase.roaster)?;
    conn.execute(
        "INSERT INTO purchases (coffee_id, bought_date, roast_date)
         VALUES (:coffee_id, :bought_date, :roast_date)",
        named_params! {
            ":coffee_id": coffee_id,
            ":bought_date": SqlDate(purchase.bought_date),
            ":roast_date": sql_date(purchase.roast_date),
        },
    )?;

    info!(coffee = %purchase.coffee_name, "Inserted coffee purchase");
    Ok(())
}

pub(crate) fn brewing(conn: &Connection, brewing: &Brewing) -> SqliteResult<()> {
    let coffee_id = coffee_id(conn, &brewing.coffee_name, &brewing.roaster)?;
    let method_id = brewing_method_id(conn, &brewing.method_name)?;
    let grinder_id = grinder_id(conn, &brewing.grinder_name)?;

    conn.execute(
        "INSERT INTO brewings (
            date, coffee_id, brewing_method_id, roast_date, grinder_id, grind_setting,
            total_brewing_time_sec, water_grams, coffee_grams, v60_filter_type, rating,
            recommended_grind_setting_adjustment, recommended_coffee_weight_adjustment_grams,
            notes
         ) VALUES (
            :date, :coffee_id, :method_id, :roast_date, :grinder_id, :grind_setting,
            :time, :water_grams, :coffee_grams, :v60, :rating,
            :grind_adjustment, :weight_adjustment,
            :notes
         )",
        named_params! {
            ":date": SqlDate(brewing.date),
            ":coffee_id": coffee_id,
            ":method_id": method_id,
            ":roast_date": sql_date(brewing.roast_date),
            ":grinder_id": grinder_id,
            ":grind_setting": brewing.grind_setting,
            ":time": brewing.total_brewing_time_sec,
            ":water_grams": brewing.water_grams,
            ":coffee_grams": brewing.coffee_grams,
            ":v60": choice_label(brewing.v60_filter_type),
            ":rating": brewing.rating,
            ":grind_adjustment": choice_label(brewing.grind_adjustment),
            ":weight_adjustment": brewing.coffee_weight_adjustment_grams,
            ":notes": brewing.notes,
        },
    )?;

    info!(coffee = %brewing.coffee_name, method = %brewing.method_name, "Inserted brewing");
    Ok(())
}

/// Inserts the cupping and every cupped coffee, or nothing at all
pub(crate) fn cupping(conn: &Connection, cupping: &Cupping) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO cuppings (date, duration_min, notes) VALUES (:date, :duration, :notes)",
        named_params! {
            ":date": SqlDate(cupping.date),
            ":duration": cupping.duration_min,
            ":notes": cupping.notes,
        },
    )?;
    let cupping_id = conn.last_insert_rowid();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO cupped_coffees (cupping_id, coffee_id, rank, notes)
         VALUES (:cupping_id, :coffee_id, :rank, :notes)",
    )?;
    for cupped in &cupping.coffees {
        let coffee_id = coffee_id(conn, &cupped.coffee_name, &cupped.roaster)?;
        stmt.execute(named_params! {
            ":cupping_id": cupping_id,
            ":coffee_id": coffee_id,
            ":rank": cupped.rank,
            ":notes": cupped.notes,
        })
        .map_err(|e| {
            SqliteError::on_duplicate(e, "cupped coffee", || {
                coffee_key(&cupped.coffee_name, &cupped.roaster)
            })
        })?;
        debug!(cupping_id, coffee = %cupped.coffee_name, "Inserted cupped coffee");
    }

    info!(cupping_id, coffees = cupping.coffees.len(), "Inserted cupping");
    Ok(())
}

pub(crate) fn brewing_method(conn: &Connection, method: &BrewingMethod) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO brewing_methods (name) VALUES (:name)",
        named_params! { ":name": method.name },
    )
    .map_err(|e| SqliteError::on_duplicate(e, "brewing method", || method.name.clone()))?;

    info!(name = %method.name, "Inserted brewing method");
    Ok(())
}

pub(crate) fn grinder(conn: &Connection, grinder: &Grinder) -> SqliteResult<()> {
    conn.execute(
        "INSERT INTO grinders (name, company, max_grind_setting)
         VALUES (:name, :company, :max_grind_setting)",
        named_params! {
            ":name": grinder.name,
            ":company": grinder.company,
            ":max_grind_setting": grinder.max_grind_setting,
        },
    )
    .map_err(|e| SqliteError::on_duplicate(e, "coffee grinder", || grinder.name.clone()))?;

    info!(name = %grinder.name, "Inserted coffee grinder");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{brewing, seeded_store};
    use brewlog_core::{
        BrewingMethod, Coffee, CuppedCoffee, Cupping, Date, RecordKind, RecordStore, StoreError,
    };

    fn cupped(name: &str, roaster: &str, rank: i64) -> CuppedCoffee {
        CuppedCoffee {
            coffee_name: name.into(),
            roaster: roaster.into(),
            rank,
            notes: "juicy".into(),
        }
    }

    #[test]
    fn duplicate_coffee_is_rejected() {
        let store = seeded_store();
        let err = store
            .insert_coffee(&Coffee {
                name: "Guji".into(),
                roaster: "Tim Wendelboe".into(),
                ..Coffee::default()
            })
            .unwrap_err();
        assert_eq!(err, StoreError::duplicate("coffee", "Guji (Tim Wendelboe)"));
    }

    #[test]
    fn same_name_from_another_roaster_is_a_new_coffee() {
        let store = seeded_store();
        store
            .insert_coffee(&Coffee {
                name: "Huila".into(),
                roaster: "Square Mile".into(),
                decaf: true,
                ..Coffee::default()
            })
            .unwrap();
        assert_eq!(store.count(RecordKind::Coffee).unwrap(), 5);
    }

    #[test]
    fn brewing_requires_existing_references() {
        let store = seeded_store();

        let mut unknown_coffee = brewing("Guji", 15, 250);
        unknown_coffee.roaster = "Nobody".into();
        assert_eq!(
            store.insert_brewing(&unknown_coffee).unwrap_err(),
            StoreError::missing("coffee", "Guji (Nobody)")
        );

        let mut unknown_method = brewing("Guji", 15, 250);
        unknown_method.method_name = "Chemex".into();
        assert_eq!(
            store.insert_brewing(&unknown_method).unwrap_err(),
            StoreError::missing("brewing method", "Chemex")
        );

        let mut unknown_grinder = brewing("Guji", 15, 250);
        unknown_grinder.grinder_name = "EK43".into();
        assert_eq!(
            store.insert_brewing(&unknown_grinder).unwrap_err(),
            StoreError::missing("coffee grinder", "EK43")
        );

        assert_eq!(store.count(RecordKind::Brewing).unwrap(), 0);
    }

    #[test]
    fn duplicate_method_is_rejected() {
        let store = seeded_store();
        let err = store
            .insert_brewing_method(&BrewingMethod { name: "V60".into() })
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { entity: "brewing method", .. }));
    }

    #[test]
    fn cupping_with_unknown_coffee_writes_nothing() {
        let store = seeded_store();
        let cupping = Cupping {
            date: Date::new(2024, 3, 10),
            duration_min: 45,
            notes: "washed Ethiopians".into(),
            coffees: vec![
                cupped("Guji", "Tim Wendelboe", 1),
                cupped("Yirgacheffe", "Nobody", 2),
            ],
        };

        let err = store.insert_cupping(&cupping).unwrap_err();
        assert_eq!(err, StoreError::missing("coffee", "Yirgacheffe (Nobody)"));
        assert_eq!(store.count(RecordKind::Cupping).unwrap(), 0);
    }

    #[test]
    fn same_coffee_twice_in_a_cupping_is_a_duplicate() {
        let store = seeded_store();
        let cupping = Cupping {
            date: Date::new(2024, 3, 10),
            duration_min: 45,
            notes: "same bag twice".into(),
            coffees: vec![
                cupped("Guji", "Tim Wendelboe", 1),
                cupped("Guji", "Tim Wendelboe", 2),
            ],
        };

        let err = store.insert_cupping(&cupping).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { entity: "cupped coffee", .. }));
        assert_eq!(store.count(RecordKind::Cupping).unwrap(), 0);
    }
}
