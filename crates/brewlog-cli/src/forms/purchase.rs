use super::coffee;
use crate::journal::{ask, Journal, Outcome};
use anyhow::Result;
use brewlog_core::prompt::{BoolPrompt, DatePrompt};
use brewlog_core::{CoffeePurchase, RecordStore};
use std::io::{BufRead, Write};

pub fn add<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Adding new coffee purchase");

    j.console
        .print("Do you want to create a new coffee first? (true or false): ");
    let create_coffee = ask!(BoolPrompt::optional().ask(&mut j.console));

    let (coffee_name, roaster) = if create_coffee {
        let coffee = match coffee::add(j)? {
            Outcome::Done(coffee) => coffee,
            Outcome::Quit => return Ok(Outcome::Quit),
            Outcome::Rejected => return Ok(Outcome::Rejected),
        };
        let hint = j.console.settings().quit_hint();
        j.console.println(format!(
            "\nAdding new coffee purchase for the just added coffee {hint}:"
        ));
        (coffee.name, coffee.roaster)
    } else {
        let limit = j.fields.limits().form_coffee_names;
        let name = ask!(j.fields.coffee_name_with_limit(&mut j.console, false, limit)?);
        let roaster = ask!(j.fields.roaster(&mut j.console, &name, false)?);
        (name, roaster)
    };

    let bought_date = ask!(j.fields.event_date(
        &mut j.console,
        "Enter ? of purchase or ? of arrival if bought online: "
    ));
    let roast_date = ask!(DatePrompt::new("Enter roast ?: ")
        .optional()
        .ask(&mut j.console));

    let purchase = CoffeePurchase {
        coffee_name,
        roaster,
        bought_date,
        roast_date: roast_date.non_zero(),
    };
    let result = j.store.insert_purchase(&purchase);
    j.finish(result, "coffee purchase", ())
}
