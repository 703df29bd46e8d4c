//! Persistence contracts
//!
//! [`SuggestionSource`] is the narrow, read-only view the suggestion provider
//! needs. [`RecordStore`] adds the writes, listings and statistics used by the
//! entry forms and retrieval views. Both are synchronous: brewlog is a
//! single-user terminal tool and every call blocks until the database answers.

use crate::date::Date;
use crate::error::StoreResult;
use crate::records::{
    Brewing, BrewingFilter, BrewingMethod, BrewingOrder, Coffee, CoffeePurchase, Cupping, Grinder,
    RecordKind,
};

/// Which history a name lookup draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameQuery<'a> {
    /// Coffee names by most recent brewing
    BrewedCoffees,
    /// Coffee names by most recent purchase
    PurchasedCoffees,
    /// Roasters of coffees with this name, newest coffee first
    RoastersOf(&'a str),
    /// Brewing methods by most recent brewing
    BrewingMethods,
    /// Grinders by most recent brewing
    Grinders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightKind {
    Coffee,
    Water,
}

/// Recent weights used with one method and grinder combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightQuery<'a> {
    pub kind: WeightKind,
    pub method_name: &'a str,
    pub grinder_name: &'a str,
}

impl<'a> WeightQuery<'a> {
    pub fn coffee(method_name: &'a str, grinder_name: &'a str) -> Self {
        Self {
            kind: WeightKind::Coffee,
            method_name,
            grinder_name,
        }
    }

    pub fn water(method_name: &'a str, grinder_name: &'a str) -> Self {
        Self {
            kind: WeightKind::Water,
            method_name,
            grinder_name,
        }
    }
}

/// Read-only history lookups backing the suggestion lists
///
/// Implementations return distinct values, most recent first, at most `limit`
/// of them. An empty list is a normal answer.
pub trait SuggestionSource {
    fn lookup_names(&self, query: NameQuery<'_>, limit: usize) -> StoreResult<Vec<String>>;

    fn lookup_weights(&self, query: WeightQuery<'_>, limit: usize) -> StoreResult<Vec<i64>>;

    /// Roast date of the newest purchase of this coffee, if it has one
    fn lookup_last_roast_date(&self, coffee_name: &str) -> StoreResult<Option<Date>>;
}

/// Full persistence interface used by the CLI
///
/// Every insert is atomic: a record referring to an unknown coffee, method or
/// grinder fails with [`crate::StoreError::MissingReference`] and nothing is
/// written.
pub trait RecordStore: SuggestionSource {
    fn insert_coffee(&self, coffee: &Coffee) -> StoreResult<()>;
    fn insert_purchase(&self, purchase: &CoffeePurchase) -> StoreResult<()>;
    fn insert_brewing(&self, brewing: &Brewing) -> StoreResult<()>;
    fn insert_cupping(&self, cupping: &Cupping) -> StoreResult<()>;
    fn insert_brewing_method(&self, method: &BrewingMethod) -> StoreResult<()>;
    fn insert_grinder(&self, grinder: &Grinder) -> StoreResult<()>;

    fn brewings(&self, order: BrewingOrder, limit: usize) -> StoreResult<Vec<Brewing>>;
    /// Newest brewings matching the filter
    fn brewing_suggestions(&self, filter: &BrewingFilter, limit: usize)
        -> StoreResult<Vec<Brewing>>;
    fn coffees(&self, limit: usize) -> StoreResult<Vec<Coffee>>;
    fn purchases(&self, limit: usize) -> StoreResult<Vec<CoffeePurchase>>;
    /// Newest cuppings, each with its coffees ordered by rank
    fn cuppings(&self, limit: usize) -> StoreResult<Vec<Cupping>>;
    fn brewing_methods(&self) -> StoreResult<Vec<BrewingMethod>>;
    fn grinders(&self) -> StoreResult<Vec<Grinder>>;

    fn count(&self, kind: RecordKind) -> StoreResult<u64>;
    /// Mean rating of rated brewings matching the filter, `None` if there are none
    fn average_rating(&self, filter: &BrewingFilter) -> StoreResult<Option<f64>>;
}
