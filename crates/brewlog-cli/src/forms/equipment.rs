//! Brewing methods and grinders

use crate::journal::{ask, Journal, Outcome};
use anyhow::Result;
use brewlog_core::prompt::{IntPrompt, TextPrompt};
use brewlog_core::records::{nonzero, text};
use brewlog_core::{BrewingMethod, Grinder, RecordStore};
use std::io::{BufRead, Write};

/// Upper bound accepted for a grinder's largest setting
const MAX_GRIND_SETTING: i64 = 100;

pub fn add_brewing_method<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Adding new coffee brewing method");

    j.console.print("Enter brewing method name: ");
    let name = ask!(TextPrompt::required().ask(&mut j.console));

    let result = j.store.insert_brewing_method(&BrewingMethod { name });
    j.finish(result, "coffee brewing method", ())
}

pub fn add_grinder<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Adding new coffee grinder");

    j.console.print("Enter grinder name: ");
    let name = ask!(TextPrompt::required().ask(&mut j.console));

    j.console.print("Enter grinder's company name: ");
    let company = ask!(TextPrompt::optional().ask(&mut j.console));

    j.console.print("Enter the maximum grind setting (Integer): ");
    let max_grind_setting = ask!(IntPrompt::new(0, MAX_GRIND_SETTING)
        .optional()
        .ask(&mut j.console));

    let grinder = Grinder {
        name,
        company: text(company),
        max_grind_setting: nonzero(max_grind_setting),
    };
    let result = j.store.insert_grinder(&grinder);
    j.finish(result, "coffee grinder", ())
}
