//! State shared by every form and view of one interactive session

use crate::menu::select_option;
use crate::output::new_table;
use anyhow::Result;
use brewlog_config::{BrewlogConfig, DisplayConfig};
use brewlog_core::prompt::IntPrompt;
use brewlog_core::{Answer, Console, FieldAssembler, RecordStore, StoreError, StoreResult};
use comfy_table::Table;
use std::io::{BufRead, Write};
use tracing::info;

/// How a form or view ended
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T = ()> {
    Done(T),
    /// The quit token was entered; nothing more was written
    Quit,
    /// The store refused the record and the user has been told why
    Rejected,
}

impl<T> Outcome<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::Quit => Outcome::Quit,
            Outcome::Rejected => Outcome::Rejected,
        }
    }
}

/// Unwraps a given answer or returns `Outcome::Quit` from the enclosing form
macro_rules! ask {
    ($answer:expr) => {
        match $answer {
            ::brewlog_core::Answer::Given(value) => value,
            ::brewlog_core::Answer::Quit => return Ok($crate::journal::Outcome::Quit),
        }
    };
}
pub(crate) use ask;

pub struct Journal<'a, S: ?Sized, R, W> {
    pub store: &'a S,
    pub fields: FieldAssembler<'a, S>,
    pub console: Console<R, W>,
    pub display: DisplayConfig,
    /// Maximum table width
    pub width: u16,
}

impl<'a, S, R, W> Journal<'a, S, R, W>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a S, console: Console<R, W>, config: &BrewlogConfig, width: u16) -> Self {
        Self {
            store,
            fields: FieldAssembler::new(store, config.suggestions.clone()),
            console,
            display: config.display.clone(),
            width,
        }
    }

    /// Prints e.g. `Adding new coffee (Enter # to quit):`
    pub fn banner(&mut self, title: &str) {
        let hint = self.console.settings().quit_hint();
        self.console.println(format!("{title} {hint}:"));
    }

    pub fn table(&self) -> Table {
        new_table(self.width)
    }

    pub fn select(&mut self, options: &[&str]) -> Answer<usize> {
        select_option(&mut self.console, options, self.width)
    }

    /// Optional row limit in `1..=max`, `default` when skipped
    pub fn row_limit(&mut self, what: &str, default: usize, max: usize) -> Answer<usize> {
        self.console
            .print(format!("Enter a limit for the number of {what} to display: "));
        let max = i64::try_from(max).unwrap_or(i64::MAX);
        IntPrompt::new(1, max)
            .optional()
            .ask(&mut self.console)
            .map(|limit| usize::try_from(limit).ok().filter(|&l| l > 0).unwrap_or(default))
    }

    /// Reports a refused insert to the user; `Ok(true)` when it was written
    pub fn stored(&mut self, result: StoreResult<()>, record: &str) -> Result<bool> {
        match result {
            Ok(()) => Ok(true),
            Err(StoreError::MissingReference { entity, key }) => {
                info!(record, entity, %key, "Insert refused: missing reference");
                self.console.println(format!(
                    "Unable to link this {record} to an existing {entity}. \
                     Please create a new {entity} first and then try again."
                ));
                Ok(false)
            }
            Err(StoreError::Duplicate { entity, key }) => {
                info!(record, entity, %key, "Insert refused: duplicate");
                self.console
                    .println(format!("The {entity} '{key}' already exists. Nothing was added."));
                Ok(false)
            }
            Err(e) => Err(anyhow::Error::new(e).context(format!("failed to insert {record}"))),
        }
    }

    /// [`Self::stored`], then the success line for a completed form
    pub fn finish<T>(&mut self, result: StoreResult<()>, record: &str, value: T) -> Result<Outcome<T>> {
        if self.stored(result, record)? {
            self.console.println(format!("Added {record} successfully"));
            Ok(Outcome::Done(value))
        } else {
            Ok(Outcome::Rejected)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_journal {
    use super::*;
    use brewlog_core::test_support::{scripted, scripted_bytes};
    use brewlog_core::{
        Brewing, BrewingMethod, Coffee, Date, GrindAdjustment, Grinder, V60FilterType,
    };
    use brewlog_sqlite::SqliteStore;
    use std::io::Cursor;

    pub type TestJournal<'a> = Journal<'a, SqliteStore, Cursor<Vec<u8>>, Vec<u8>>;

    /// Journal over `store` reading `input`, with today fixed at 2024-03-15
    pub fn journal<'a>(store: &'a SqliteStore, input: &str) -> TestJournal<'a> {
        Journal::new(store, scripted(input), &BrewlogConfig::default(), 200)
    }

    /// Like [`journal`] for input that need not be valid UTF-8
    pub fn journal_bytes<'a>(store: &'a SqliteStore, input: &[u8]) -> TestJournal<'a> {
        Journal::new(store, scripted_bytes(input), &BrewlogConfig::default(), 200)
    }

    pub fn output(journal: &TestJournal<'_>) -> String {
        String::from_utf8_lossy(journal.console.output()).into_owned()
    }

    /// Store holding one coffee, the V60 method and a Comandante grinder
    pub fn seeded() -> SqliteStore {
        let store = SqliteStore::memory().unwrap();
        store
            .insert_coffee(&Coffee {
                name: "Guji".into(),
                roaster: "Tim Wendelboe".into(),
                ..Coffee::default()
            })
            .unwrap();
        store
            .insert_brewing_method(&BrewingMethod { name: "V60".into() })
            .unwrap();
        store
            .insert_grinder(&Grinder {
                name: "Comandante".into(),
                company: None,
                max_grind_setting: Some(40),
            })
            .unwrap();
        store
    }

    /// V60 brewing of the seeded coffee on 2024-03-15
    pub fn brewing(grind_setting: i64, rating: Option<i64>, notes: Option<&str>) -> Brewing {
        Brewing {
            date: Date::new(2024, 3, 15),
            coffee_name: "Guji".into(),
            roaster: "Tim Wendelboe".into(),
            method_name: "V60".into(),
            roast_date: None,
            grinder_name: "Comandante".into(),
            grind_setting,
            total_brewing_time_sec: 180,
            coffee_grams: 15,
            water_grams: 250,
            v60_filter_type: V60FilterType::Eu,
            rating,
            grind_adjustment: GrindAdjustment::Unset,
            coffee_weight_adjustment_grams: None,
            notes: notes.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_journal::{journal, output};
    use super::*;
    use brewlog_sqlite::SqliteStore;

    #[test]
    fn row_limit_defaults_when_skipped() {
        let store = SqliteStore::memory().unwrap();
        let mut j = journal(&store, "\n51\n7\n");
        assert_eq!(j.row_limit("coffees", 15, 50), Answer::Given(15));
        assert_eq!(j.row_limit("coffees", 15, 50), Answer::Given(7));
        assert!(output(&j).contains("Enter a limit for the number of coffees to display: "));
    }

    #[test]
    fn missing_reference_prints_guidance() {
        let store = SqliteStore::memory().unwrap();
        let mut j = journal(&store, "");
        let outcome = j
            .finish(
                Err(StoreError::missing("coffee", "Guji (Nobody)")),
                "coffee brewing",
                (),
            )
            .unwrap();
        assert_eq!(outcome, Outcome::Rejected);
        assert!(output(&j).contains(
            "Unable to link this coffee brewing to an existing coffee. \
             Please create a new coffee first and then try again."
        ));
    }

    #[test]
    fn backend_failures_propagate() {
        let store = SqliteStore::memory().unwrap();
        let mut j = journal(&store, "");
        let err = j
            .finish(Err(StoreError::backend("disk I/O error")), "coffee", ())
            .unwrap_err();
        assert_eq!(format!("{err:#}"), "failed to insert coffee: Storage backend error: disk I/O error");
    }

    #[test]
    fn banner_uses_quit_token() {
        let store = SqliteStore::memory().unwrap();
        let mut j = journal(&store, "");
        j.banner("Adding new coffee");
        assert_eq!(output(&j), "Adding new coffee (Enter # to quit):\n");
    }
}
