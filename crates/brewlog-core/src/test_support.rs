//! Test fakes: scripted consoles and an in-memory suggestion source

use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;

use crate::date::Date;
use crate::error::{StoreError, StoreResult};
use crate::prompt::{Console, PromptSettings};
use crate::storage::{NameQuery, SuggestionSource, WeightKind, WeightQuery};

/// Console fed from a string, capturing everything written
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// The "today" used by [`scripted`]: 2024-03-15
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default()
}

pub fn scripted(input: &str) -> ScriptedConsole {
    scripted_on(input, fixed_today())
}

pub fn scripted_on(input: &str, today: NaiveDate) -> ScriptedConsole {
    let settings = PromptSettings::default().with_today(today);
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), settings)
}

/// Like [`scripted`] for input that need not be valid UTF-8
pub fn scripted_bytes(input: &[u8]) -> ScriptedConsole {
    let settings = PromptSettings::default().with_today(fixed_today());
    Console::new(Cursor::new(input.to_vec()), Vec::new(), settings)
}

/// Everything written to a scripted console so far
pub fn transcript(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

/// Canned history, newest first in every list
#[derive(Debug, Default)]
pub struct MemorySuggestionSource {
    pub brewed_coffees: Vec<String>,
    pub purchased_coffees: Vec<String>,
    pub roasters: HashMap<String, Vec<String>>,
    pub brewing_methods: Vec<String>,
    pub grinders: Vec<String>,
    /// Keyed by (method, grinder)
    pub coffee_weights: HashMap<(String, String), Vec<i64>>,
    pub water_weights: HashMap<(String, String), Vec<i64>>,
    pub roast_dates: HashMap<String, Date>,
    /// Every lookup fails with a backend error
    pub failing: bool,
    calls: RefCell<Vec<(String, usize)>>,
}

impl MemorySuggestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Lookups made so far as (query, limit) pairs
    pub fn calls(&self) -> Vec<(String, usize)> {
        self.calls.borrow().clone()
    }

    fn record(&self, query: String, limit: usize) -> StoreResult<()> {
        self.calls.borrow_mut().push((query, limit));
        if self.failing {
            return Err(StoreError::backend("database is locked"));
        }
        Ok(())
    }
}

fn strings(values: &[String]) -> Vec<String> {
    values.to_vec()
}

impl SuggestionSource for MemorySuggestionSource {
    fn lookup_names(&self, query: NameQuery<'_>, limit: usize) -> StoreResult<Vec<String>> {
        self.record(format!("{query:?}"), limit)?;
        let mut names = match query {
            NameQuery::BrewedCoffees => strings(&self.brewed_coffees),
            NameQuery::PurchasedCoffees => strings(&self.purchased_coffees),
            NameQuery::RoastersOf(name) => self.roasters.get(name).cloned().unwrap_or_default(),
            NameQuery::BrewingMethods => strings(&self.brewing_methods),
            NameQuery::Grinders => strings(&self.grinders),
        };
        names.truncate(limit);
        Ok(names)
    }

    fn lookup_weights(&self, query: WeightQuery<'_>, limit: usize) -> StoreResult<Vec<i64>> {
        self.record(format!("{query:?}"), limit)?;
        let key = (query.method_name.to_string(), query.grinder_name.to_string());
        let table = match query.kind {
            WeightKind::Coffee => &self.coffee_weights,
            WeightKind::Water => &self.water_weights,
        };
        let mut weights = table.get(&key).cloned().unwrap_or_default();
        weights.truncate(limit);
        Ok(weights)
    }

    fn lookup_last_roast_date(&self, coffee_name: &str) -> StoreResult<Option<Date>> {
        self.record(format!("LastRoastDate({coffee_name})"), 1)?;
        Ok(self.roast_dates.get(coffee_name).copied())
    }
}
