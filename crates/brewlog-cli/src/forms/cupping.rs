use crate::journal::{ask, Journal, Outcome};
use anyhow::Result;
use brewlog_core::prompt::IntPrompt;
use brewlog_core::{CuppedCoffee, Cupping, RecordStore};
use std::io::{BufRead, Write};

const COFFEES_PER_CUPPING: (i64, i64) = (2, 30);

pub fn add<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Adding new cupping");

    let date = ask!(j.fields.event_date(&mut j.console, "Enter cupping ?: "));

    j.console.print("Enter cupping duration in minutes: ");
    let duration_min = ask!(IntPrompt::new(1, i64::MAX).ask(&mut j.console));

    let notes = ask!(j.fields.notes(&mut j.console, false, "general cupping"));

    j.console.print("Enter number of coffees in this cupping: ");
    let (min, max) = COFFEES_PER_CUPPING;
    let count = ask!(IntPrompt::new(min, max).ask(&mut j.console));

    let hint = j.console.settings().quit_hint();
    let limit = j.fields.limits().coffee_names;
    let mut coffees = Vec::new();
    for i in 1..=count {
        j.console.println(format!("\nAdding {i}. cupped coffee {hint}:"));
        let coffee_name = ask!(j.fields.coffee_name_with_limit(&mut j.console, false, limit)?);
        let roaster = ask!(j.fields.roaster(&mut j.console, &coffee_name, false)?);

        j.console.print("Enter this coffees rank (1 = highest): ");
        let rank = ask!(IntPrompt::new(1, count).ask(&mut j.console));

        let notes = ask!(j.fields.notes(&mut j.console, false, "cupped coffee"));
        coffees.push(CuppedCoffee {
            coffee_name,
            roaster,
            rank,
            notes,
        });
    }

    let cupping = Cupping {
        date,
        duration_min,
        notes,
        coffees,
    };
    let result = j.store.insert_cupping(&cupping);
    j.finish(result, "cupping", ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::test_journal::{journal, output, seeded};
    use brewlog_core::Coffee;

    fn with_second_coffee() -> brewlog_sqlite::SqliteStore {
        let store = seeded();
        store
            .insert_coffee(&Coffee {
                name: "Huila".into(),
                roaster: "La Cabra".into(),
                ..Coffee::default()
            })
            .unwrap();
        store
    }

    #[test]
    fn adds_cupping_with_ranked_coffees() {
        let store = with_second_coffee();
        let script = "1\n30\nWashed against natural\n2\n\
                      Guji\n1\n2\nJuicy\n\
                      Huila\n1\n3\n1\nHeavy body\n";
        let mut j = journal(&store, script);
        assert_eq!(add(&mut j).unwrap(), Outcome::Done(()));

        let out = output(&j);
        assert!(out.contains("\nAdding 1. cupped coffee (Enter # to quit):\n"));
        assert!(out.contains("\nAdding 2. cupped coffee (Enter # to quit):\n"));
        assert!(out.contains("Input invalid. Please try again: "));
        assert!(out.ends_with("Added cupping successfully\n"));

        let cupping = &store.cuppings(1).unwrap()[0];
        assert_eq!(cupping.duration_min, 30);
        let ranked: Vec<_> = cupping
            .coffees
            .iter()
            .map(|c| (c.coffee_name.as_str(), c.rank))
            .collect();
        assert_eq!(ranked, vec![("Huila", 1), ("Guji", 2)]);
    }

    #[test]
    fn too_few_coffees_reprompts() {
        let store = with_second_coffee();
        let mut j = journal(&store, "1\n30\nQuick one\n1\n#\n");
        assert_eq!(add(&mut j).unwrap(), Outcome::Quit);
        assert!(output(&j).contains("Input invalid. Please try again: "));
        assert!(store.cuppings(5).unwrap().is_empty());
    }

    #[test]
    fn general_notes_are_required() {
        let store = with_second_coffee();
        let mut j = journal(&store, "1\n30\n\n#\n");
        assert_eq!(add(&mut j).unwrap(), Outcome::Quit);
        assert!(output(&j).contains("A value is required. Please try again: "));
    }
}
