//! Record counts and rating averages

use crate::error::SqliteResult;
use crate::retrieve::{FilterParams, BREWING_FILTER};
use brewlog_core::{BrewingFilter, RecordKind};
use rusqlite::Connection;
use tracing::debug;

fn table(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Brewing => "brewings",
        RecordKind::Coffee => "coffees",
        RecordKind::Cupping => "cuppings",
        RecordKind::CoffeePurchase => "purchases",
        RecordKind::BrewingMethod => "brewing_methods",
        RecordKind::Grinder => "grinders",
    }
}

pub(crate) fn count(conn: &Connection, kind: RecordKind) -> SqliteResult<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table(kind));
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(u64::try_from(count).unwrap_or_default())
}

/// `AVG` skips `NULL` ratings; no rated rows gives `None`
pub(crate) fn average_rating(
    conn: &Connection,
    filter: &BrewingFilter,
) -> SqliteResult<Option<f64>> {
    let sql = format!(
        "SELECT AVG(b.rating)
         FROM brewings AS b
         JOIN coffees AS c ON c.id = b.coffee_id
         JOIN brewing_methods AS m ON m.id = b.brewing_method_id
         JOIN grinders AS g ON g.id = b.grinder_id
         {BREWING_FILTER}"
    );
    let params = FilterParams::new(filter);
    let average: Option<f64> = conn.query_row(&sql, params.named().as_slice(), |row| row.get(0))?;

    debug!(?filter, ?average, "Computed average rating");
    Ok(average)
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{brewing, seeded_store};
    use brewlog_core::{BrewingFilter, RecordKind, RecordStore, V60FilterType};

    #[test]
    fn counts_every_kind() {
        let store = seeded_store();
        store.insert_brewing(&brewing("Guji", 15, 250)).unwrap();

        assert_eq!(store.count(RecordKind::Brewing).unwrap(), 1);
        assert_eq!(store.count(RecordKind::Coffee).unwrap(), 4);
        assert_eq!(store.count(RecordKind::Cupping).unwrap(), 0);
        assert_eq!(store.count(RecordKind::CoffeePurchase).unwrap(), 0);
        assert_eq!(store.count(RecordKind::BrewingMethod).unwrap(), 2);
        assert_eq!(store.count(RecordKind::Grinder).unwrap(), 1);
    }

    #[test]
    fn average_ignores_unrated_brewings() {
        let store = seeded_store();
        let any = BrewingFilter::default();
        assert_eq!(store.average_rating(&any).unwrap(), None);

        for (rating, filter) in [
            (Some(6), V60FilterType::Eu),
            (Some(9), V60FilterType::Jp),
            (None, V60FilterType::Jp),
        ] {
            let mut b = brewing("Guji", 15, 250);
            b.rating = rating;
            b.v60_filter_type = filter;
            store.insert_brewing(&b).unwrap();
        }

        assert_eq!(store.average_rating(&any).unwrap(), Some(7.5));

        let jp = BrewingFilter {
            method_name: Some("V60".into()),
            v60_filter_type: V60FilterType::Jp,
            ..BrewingFilter::default()
        };
        assert_eq!(store.average_rating(&jp).unwrap(), Some(9.0));

        let other = BrewingFilter {
            grinder_name: Some("EK43".into()),
            ..BrewingFilter::default()
        };
        assert_eq!(store.average_rating(&other).unwrap(), None);
    }
}
