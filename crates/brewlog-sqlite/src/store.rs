//! [`RecordStore`] implementation over a [`SqlitePool`]

use crate::config::SqliteConfig;
use crate::connection::SqlitePool;
use crate::error::SqliteResult;
use crate::{insert, retrieve, statistics};
use brewlog_core::{
    Brewing, BrewingFilter, BrewingMethod, BrewingOrder, Coffee, CoffeePurchase, Cupping, Grinder,
    RecordKind, RecordStore, StoreResult,
};

/// The brewlog journal stored in one SQLite database
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database described by `config`, creating it if needed
    pub fn open(config: SqliteConfig) -> SqliteResult<Self> {
        Ok(Self::new(SqlitePool::new(config)?))
    }

    /// Empty in-memory journal
    pub fn memory() -> SqliteResult<Self> {
        Ok(Self::new(SqlitePool::memory()?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl RecordStore for SqliteStore {
    fn insert_coffee(&self, coffee: &Coffee) -> StoreResult<()> {
        Ok(self.pool.with_transaction(|tx| insert::coffee(tx, coffee))?)
    }

    fn insert_purchase(&self, purchase: &CoffeePurchase) -> StoreResult<()> {
        Ok(self.pool.with_transaction(|tx| insert::purchase(tx, purchase))?)
    }

    fn insert_brewing(&self, brewing: &Brewing) -> StoreResult<()> {
        Ok(self.pool.with_transaction(|tx| insert::brewing(tx, brewing))?)
    }

    fn insert_cupping(&self, cupping: &Cupping) -> StoreResult<()> {
        Ok(self.pool.with_transaction(|tx| insert::cupping(tx, cupping))?)
    }

    fn insert_brewing_method(&self, method: &BrewingMethod) -> StoreResult<()> {
        Ok(self.pool.with_transaction(|tx| insert::brewing_method(tx, method))?)
    }

    fn insert_grinder(&self, grinder: &Grinder) -> StoreResult<()> {
        Ok(self.pool.with_transaction(|tx| insert::grinder(tx, grinder))?)
    }

    fn brewings(&self, order: BrewingOrder, limit: usize) -> StoreResult<Vec<Brewing>> {
        Ok(self
            .pool
            .with_connection(|conn| retrieve::brewings(conn, order, limit))?)
    }

    fn brewing_suggestions(
        &self,
        filter: &BrewingFilter,
        limit: usize,
    ) -> StoreResult<Vec<Brewing>> {
        Ok(self
            .pool
            .with_connection(|conn| retrieve::filtered_brewings(conn, filter, limit))?)
    }

    fn coffees(&self, limit: usize) -> StoreResult<Vec<Coffee>> {
        Ok(self.pool.with_connection(|conn| retrieve::coffees(conn, limit))?)
    }

    fn purchases(&self, limit: usize) -> StoreResult<Vec<CoffeePurchase>> {
        Ok(self.pool.with_connection(|conn| retrieve::purchases(conn, limit))?)
    }

    fn cuppings(&self, limit: usize) -> StoreResult<Vec<Cupping>> {
        Ok(self.pool.with_connection(|conn| retrieve::cuppings(conn, limit))?)
    }

    fn brewing_methods(&self) -> StoreResult<Vec<BrewingMethod>> {
        Ok(self.pool.with_connection(retrieve::brewing_methods)?)
    }

    fn grinders(&self) -> StoreResult<Vec<Grinder>> {
        Ok(self.pool.with_connection(retrieve::grinders)?)
    }

    fn count(&self, kind: RecordKind) -> StoreResult<u64> {
        Ok(self.pool.with_connection(|conn| statistics::count(conn, kind))?)
    }

    fn average_rating(&self, filter: &BrewingFilter) -> StoreResult<Option<f64>> {
        Ok(self
            .pool
            .with_connection(|conn| statistics::average_rating(conn, filter))?)
    }
}
