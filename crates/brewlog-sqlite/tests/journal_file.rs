//! End-to-end checks against a database file on disk

use brewlog_core::{
    BrewingMethod, Coffee, CoffeePurchase, Date, Grinder, NameQuery, RecordKind, RecordStore,
    SuggestionSource,
};
use brewlog_sqlite::{SqliteConfig, SqliteStore};
use tempfile::TempDir;

#[test]
fn records_survive_reopening_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brewlog.db");

    {
        let store = SqliteStore::open(SqliteConfig::new(&path)).unwrap();
        store
            .insert_coffee(&Coffee {
                name: "Karogoto".into(),
                roaster: "Square Mile".into(),
                region: Some("Kirinyaga, Kenya".into()),
                variety: Some("SL28, SL34".into()),
                processing: Some("Washed".into()),
                decaf: false,
            })
            .unwrap();
        store
            .insert_purchase(&CoffeePurchase {
                coffee_name: "Karogoto".into(),
                roaster: "Square Mile".into(),
                bought_date: Date::new(2024, 3, 14),
                roast_date: Some(Date::new(2024, 3, 4)),
            })
            .unwrap();
        store
            .insert_brewing_method(&BrewingMethod { name: "V60".into() })
            .unwrap();
        store
            .insert_grinder(&Grinder {
                name: "Niche Zero".into(),
                company: None,
                max_grind_setting: None,
            })
            .unwrap();
    }

    let store = SqliteStore::open(SqliteConfig::new(&path)).unwrap();
    assert_eq!(store.count(RecordKind::Coffee).unwrap(), 1);
    assert_eq!(
        store.lookup_names(NameQuery::PurchasedCoffees, 5).unwrap(),
        vec!["Karogoto"]
    );
    assert_eq!(
        store.lookup_last_roast_date("Karogoto").unwrap(),
        Some(Date::new(2024, 3, 4))
    );

    let coffee = &store.coffees(10).unwrap()[0];
    assert_eq!(coffee.variety.as_deref(), Some("SL28, SL34"));
    let grinder = &store.grinders().unwrap()[0];
    assert_eq!(grinder.company, None);
    assert_eq!(grinder.max_grind_setting, None);
}

#[test]
fn optional_columns_are_stored_as_null() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brewlog.db");
    let store = SqliteStore::open(SqliteConfig::new(&path)).unwrap();
    store
        .insert_coffee(&Coffee {
            name: "Guji".into(),
            roaster: "Tim Wendelboe".into(),
            ..Coffee::default()
        })
        .unwrap();

    let nulls: i64 = store
        .pool()
        .with_connection(|conn| {
            Ok(conn.query_row(
                "SELECT COUNT(*) FROM coffees
                 WHERE region IS NULL AND variety IS NULL AND processing_method IS NULL",
                [],
                |row| row.get(0),
            )?)
        })
        .unwrap();
    assert_eq!(nulls, 1);
}
