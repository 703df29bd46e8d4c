//! Statistics views (menu category C)

use crate::journal::{ask, Journal, Outcome};
use anyhow::{Context, Result};
use brewlog_core::prompt::ChoicePrompt;
use brewlog_core::records::text;
use brewlog_core::{BrewingFilter, RecordKind, RecordStore, V60FilterType};
use std::io::{BufRead, Write};

pub fn total_count<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Retrieving total count");
    let labels: Vec<String> = RecordKind::ALL
        .iter()
        .map(|kind| format!("Total {} count", kind.plural()))
        .collect();
    let options: Vec<&str> = labels.iter().map(String::as_str).collect();

    let index = ask!(j.select(&options));
    let kind = RecordKind::ALL[index];
    let total = j
        .store
        .count(kind)
        .with_context(|| format!("failed to count {}", kind.plural()))?;
    j.console
        .println(format!("There are {total} {} in total", kind.plural()));
    Ok(Outcome::Done(()))
}

pub fn average_rating<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Retrieving average brewing rating");

    let method_name = ask!(j.fields.brewing_method_name(&mut j.console, true)?);
    let v60_filter_type = if method_name.eq_ignore_ascii_case("v60") {
        j.console
            .print("Enter v60 filter type (skip if want to include all): ");
        ask!(ChoicePrompt::<V60FilterType>::optional().ask(&mut j.console))
    } else {
        V60FilterType::Unset
    };

    let coffee_name = ask!(j.fields.coffee_name(&mut j.console, true)?);
    let roaster = if coffee_name.is_empty() {
        String::new()
    } else {
        ask!(j.fields.roaster(&mut j.console, &coffee_name, true)?)
    };
    let grinder_name = ask!(j.fields.grinder_name(&mut j.console, true)?);

    let filter = BrewingFilter {
        method_name: text(method_name),
        v60_filter_type,
        coffee_name: text(coffee_name),
        roaster: text(roaster),
        grinder_name: text(grinder_name),
        ..BrewingFilter::default()
    };
    let average = j
        .store
        .average_rating(&filter)
        .context("failed to compute average rating")?;
    match average {
        Some(rating) => j
            .console
            .println(format!("Average brewing rating: {rating:.2}")),
        None => j.console.println("No rated brewings match"),
    }
    Ok(Outcome::Done(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::test_journal::{brewing, journal, output, seeded};

    #[test]
    fn counts_selected_kind() {
        let store = seeded();
        let mut j = journal(&store, "9\n1\n");
        assert_eq!(total_count(&mut j).unwrap(), Outcome::Done(()));

        let out = output(&j);
        assert!(out.contains("Total coffee purchases count"));
        assert!(out.contains("Invalid option. The following options are available:"));
        assert!(out.ends_with("There are 1 coffees in total\n"));
    }

    #[test]
    fn average_over_all_brewings() {
        let store = seeded();
        for rating in [Some(6), Some(9), None] {
            store.insert_brewing(&brewing(20, rating, None)).unwrap();
        }
        // every filter skipped
        let mut j = journal(&store, "\n\n\n");
        assert_eq!(average_rating(&mut j).unwrap(), Outcome::Done(()));
        assert!(output(&j).ends_with("Average brewing rating: 7.50\n"));
    }

    #[test]
    fn v60_filter_narrows_average() {
        let store = seeded();
        store.insert_brewing(&brewing(20, Some(6), None)).unwrap();
        let mut jp = brewing(20, Some(9), None);
        jp.v60_filter_type = V60FilterType::Jp;
        store.insert_brewing(&jp).unwrap();

        let mut j = journal(&store, "1\n2\n\n\n");
        assert_eq!(average_rating(&mut j).unwrap(), Outcome::Done(()));
        assert!(output(&j).ends_with("Average brewing rating: 9.00\n"));
    }

    #[test]
    fn nothing_rated() {
        let store = seeded();
        let mut j = journal(&store, "Chemex\n\n\n");
        assert_eq!(average_rating(&mut j).unwrap(), Outcome::Done(()));
        assert!(output(&j).ends_with("No rated brewings match\n"));
    }
}
