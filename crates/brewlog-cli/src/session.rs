//! The interactive main menu loop

use crate::forms::{brewing, coffee, cupping, equipment, espresso, purchase};
use crate::journal::{Journal, Outcome};
use crate::menu::{Action, MenuConfig};
use crate::{retrieve, screen, statistics};
use anyhow::{Context, Result};
use brewlog_core::RecordStore;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Runs the main menu until `E0` or end of input
pub fn run<S, R, W>(j: &mut Journal<'_, S, R, W>, menu: &MenuConfig) -> Result<()>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    info!("Journal session started");
    j.console.println(menu.table(j.width));

    loop {
        j.console.print("Enter main option: ");
        let Some(input) = j.console.read_line() else {
            break;
        };

        let Some(action) = menu.select(&input) else {
            debug!(%input, "Unknown main option");
            j.console
                .println("Invalid option. The following options are available:");
            j.console.println(menu.table(j.width));
            continue;
        };

        if action == Action::Quit {
            break;
        }
        dispatch(j, menu, action).with_context(|| format!("failed to run {action:?}"))?;
    }

    j.console.println("Bye, keep enjoying your coffee!");
    info!("Journal session ended");
    Ok(())
}

fn dispatch<S, R, W>(j: &mut Journal<'_, S, R, W>, menu: &MenuConfig, action: Action) -> Result<()>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    debug!(?action, "Running main option");
    let outcome = match action {
        Action::NewBrewing => brewing::add(j)?,
        Action::NewCupping => cupping::add(j)?,
        Action::NewCoffeePurchase => purchase::add(j)?,
        Action::NewCoffee => coffee::add(j)?.map(|_| ()),
        Action::NewBrewingMethod => equipment::add_brewing_method(j)?,
        Action::NewGrinder => equipment::add_grinder(j)?,
        Action::NewEspressoDialingIn => espresso::add(j)?,
        Action::RetrieveBrewing => retrieve::brewing(j)?,
        Action::RetrieveCupping => retrieve::cuppings(j)?,
        Action::RetrieveCoffeePurchase => retrieve::purchases(j)?,
        Action::RetrieveCoffee => retrieve::coffees(j)?,
        Action::RetrieveBrewingMethod => retrieve::brewing_methods(j)?,
        Action::RetrieveGrinder => retrieve::grinders(j)?,
        Action::TotalCount => statistics::total_count(j)?,
        Action::AverageRating => statistics::average_rating(j)?,
        Action::ClearScreen => {
            j.console.print(screen::clear_sequence());
            Outcome::Done(())
        }
        Action::DisplayOptions => {
            j.console.println(menu.table(j.width));
            Outcome::Done(())
        }
        Action::Quit => Outcome::Done(()),
    };

    if outcome == Outcome::Quit {
        j.console.println("Quit");
    }
    Ok(())
}
