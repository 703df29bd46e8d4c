use crate::journal::{ask, Journal, Outcome};
use anyhow::Result;
use brewlog_core::prompt::{BoolPrompt, TextPrompt};
use brewlog_core::records::text;
use brewlog_core::{Coffee, RecordStore};
use std::io::{BufRead, Write};

/// Asks for a new coffee and stores it; the purchase form reuses the result
pub fn add<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome<Coffee>>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Adding new coffee");

    j.console.print("Enter coffee name: ");
    let name = ask!(TextPrompt::required().ask(&mut j.console));

    j.console.print("Enter roaster/producer name: ");
    let roaster = ask!(TextPrompt::required().ask(&mut j.console));

    j.console.print("Enter origin/region (Format: Region, Country): ");
    let region = ask!(TextPrompt::optional().ask(&mut j.console));

    j.console.print("Enter variety (Format: Variety 1, Variety 2, ...): ");
    let variety = ask!(TextPrompt::optional().ask(&mut j.console));

    j.console.print("Enter processing method: ");
    let processing = ask!(TextPrompt::optional().ask(&mut j.console));

    j.console.print("Is decaf (true or false): ");
    let decaf = ask!(BoolPrompt::optional().ask(&mut j.console));

    let coffee = Coffee {
        name,
        roaster,
        region: text(region),
        variety: text(variety),
        processing: text(processing),
        decaf,
    };
    let result = j.store.insert_coffee(&coffee);
    j.finish(result, "coffee", coffee)
}
