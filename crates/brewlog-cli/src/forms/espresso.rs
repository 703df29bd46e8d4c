//! Espresso dialing in: one setup, then shots until the user finishes
//!
//! Each shot is written as a brewing as soon as it is entered, so quitting
//! keeps every shot already shown.

use crate::journal::{ask, Journal, Outcome};
use crate::output::{optional_cell, wrap_notes};
use anyhow::Result;
use brewlog_core::records::{nonzero, text};
use brewlog_core::{Brewing, RecordStore, V60FilterType};
use comfy_table::Table;
use std::io::{BufRead, Write};

const NOTES_WIDTH: usize = 70;

const SHOW_ALL: usize = 1;
const FINISH: usize = 2;
const OPTIONS: [&str; 3] = [
    "Enter next espresso",
    "Display all previous espressos from this dialing in and enter next one",
    "Finish dialing in",
];

pub fn add<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Adding new espresso dialing in");

    let date = ask!(j.fields.event_date(&mut j.console, "Enter dialing in ?: "));
    let coffee_name = ask!(j.fields.coffee_name(&mut j.console, false)?);
    let roaster = ask!(j.fields.roaster(&mut j.console, &coffee_name, false)?);
    let method_name = ask!(j.fields.brewing_method_name(&mut j.console, false)?);
    let roast_date = ask!(j.fields.roast_date(&mut j.console, &coffee_name)?);
    let grinder_name = ask!(j.fields.grinder_name(&mut j.console, false)?);

    let quit = j.console.settings().quit_token.clone();
    let mut shots: Vec<Brewing> = Vec::new();
    loop {
        j.console.println(format!(
            "Entering {}. espresso (Enter {quit} to save the previous espressos and quit):",
            shots.len() + 1
        ));

        let grind_setting = ask!(j.fields.grind_setting(&mut j.console));
        let total_brewing_time_sec = ask!(j.fields.total_brewing_time(&mut j.console));
        let coffee_grams = ask!(j
            .fields
            .coffee_weight(&mut j.console, &method_name, &grinder_name, false)?);
        let water_grams = ask!(j
            .fields
            .water_weight(&mut j.console, &method_name, &grinder_name, false)?);
        let rating = ask!(j.fields.rating(&mut j.console));
        let grind_adjustment = ask!(j.fields.grind_adjustment(&mut j.console));
        let weight_adjustment = ask!(j.fields.coffee_weight_adjustment(&mut j.console));
        let notes = ask!(j.fields.notes(&mut j.console, true, "espresso"));

        let shot = Brewing {
            date,
            coffee_name: coffee_name.clone(),
            roaster: roaster.clone(),
            method_name: method_name.clone(),
            roast_date: roast_date.non_zero(),
            grinder_name: grinder_name.clone(),
            grind_setting,
            total_brewing_time_sec,
            coffee_grams,
            water_grams,
            v60_filter_type: V60FilterType::Unset,
            rating: nonzero(rating),
            grind_adjustment,
            coffee_weight_adjustment_grams: nonzero(weight_adjustment),
            notes: text(notes),
        };
        let result = j.store.insert_brewing(&shot);
        if !j.stored(result, "espresso")? {
            return Ok(Outcome::Rejected);
        }

        let table = shot_table(j.table(), std::slice::from_ref(&shot));
        j.console.println(table);
        shots.push(shot);

        match ask!(j.select(&OPTIONS)) {
            SHOW_ALL => {
                let table = shot_table(j.table(), &shots);
                j.console.println(table);
            }
            FINISH => break,
            _ => {}
        }
    }

    j.console.println("Added espresso dialing in successfully");
    Ok(Outcome::Done(()))
}

fn shot_table(mut table: Table, shots: &[Brewing]) -> Table {
    table.set_header(vec![
        "Grind\nSetting",
        "Time\n(s)",
        "Coffee\nWeight\n(g)",
        "Water\nWeight\n(g)",
        "Recommended\nGrind\nAdjustment",
        "Recommended\nCoffee\nAdjustment (g)",
        "Notes",
        "Rating",
    ]);
    for shot in shots {
        table.add_row(vec![
            shot.grind_setting.to_string(),
            shot.total_brewing_time_sec.to_string(),
            shot.coffee_grams.to_string(),
            shot.water_grams.to_string(),
            shot.grind_adjustment.to_string(),
            optional_cell(shot.coffee_weight_adjustment_grams),
            wrap_notes(shot.notes.as_deref().unwrap_or_default(), NOTES_WIDTH),
            optional_cell(shot.rating),
        ]);
    }
    table
}
