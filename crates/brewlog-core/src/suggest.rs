//! Suggestion lists mined from earlier entries
//!
//! The provider only reads. Every list is bounded by the caller's limit,
//! ordered most relevant first and free of duplicates.

use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

use crate::date::Date;
use crate::error::StoreResult;
use crate::storage::{NameQuery, SuggestionSource, WeightQuery};

/// Above this many coffee name slots, two go to recent purchases instead of one
const SINGLE_PURCHASE_SLOT_MAX: usize = 5;

pub struct SuggestionProvider<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: SuggestionSource + ?Sized> SuggestionProvider<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Recently brewed coffees, then recently purchased ones
    ///
    /// A freshly bought bag shows up even before it has been brewed.
    pub fn coffee_names(&self, limit: usize) -> StoreResult<Vec<String>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let (brewed_limit, purchased_limit) = coffee_name_slots(limit);
        let mut names = self.source.lookup_names(NameQuery::BrewedCoffees, brewed_limit)?;
        names.extend(
            self.source
                .lookup_names(NameQuery::PurchasedCoffees, purchased_limit)?,
        );

        let names = dedup_keep_first(names);
        debug!(count = names.len(), limit, "coffee name suggestions");
        Ok(names)
    }

    pub fn roasters(&self, coffee_name: &str, limit: usize) -> StoreResult<Vec<String>> {
        self.names(NameQuery::RoastersOf(coffee_name), limit)
    }

    pub fn brewing_methods(&self, limit: usize) -> StoreResult<Vec<String>> {
        self.names(NameQuery::BrewingMethods, limit)
    }

    pub fn grinders(&self, limit: usize) -> StoreResult<Vec<String>> {
        self.names(NameQuery::Grinders, limit)
    }

    pub fn coffee_weights(&self, method: &str, grinder: &str, limit: usize) -> StoreResult<Vec<i64>> {
        self.weights(WeightQuery::coffee(method, grinder), limit)
    }

    pub fn water_weights(&self, method: &str, grinder: &str, limit: usize) -> StoreResult<Vec<i64>> {
        self.weights(WeightQuery::water(method, grinder), limit)
    }

    /// Roast date of the newest purchase of this coffee, if recorded
    pub fn last_roast_date(&self, coffee_name: &str) -> StoreResult<Option<Date>> {
        Ok(self
            .source
            .lookup_last_roast_date(coffee_name)?
            .and_then(Date::non_zero))
    }

    fn names(&self, query: NameQuery<'_>, limit: usize) -> StoreResult<Vec<String>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut names = dedup_keep_first(self.source.lookup_names(query, limit)?);
        names.truncate(limit);
        Ok(names)
    }

    fn weights(&self, query: WeightQuery<'_>, limit: usize) -> StoreResult<Vec<i64>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut weights = dedup_keep_first(self.source.lookup_weights(query, limit)?);
        weights.truncate(limit);
        Ok(weights)
    }
}

/// Split a coffee name limit into (brewed, purchased) slots
pub fn coffee_name_slots(limit: usize) -> (usize, usize) {
    if limit > SINGLE_PURCHASE_SLOT_MAX {
        (limit - 2, 2)
    } else {
        (limit.saturating_sub(1), 1)
    }
}

/// Remove repeats, keeping the first occurrence of each value
pub fn dedup_keep_first<T: Eq + Hash + Clone>(values: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
