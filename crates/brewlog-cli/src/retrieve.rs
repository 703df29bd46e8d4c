//! Retrieval views (menu category B)

use crate::journal::{ask, Journal, Outcome};
use crate::output::{
    date_cell, grinder_cell, optional_cell, split_sentences, text_cell, wrap_notes,
};
use anyhow::{Context, Result};
use brewlog_core::prompt::{BoolPrompt, ChoicePrompt};
use brewlog_core::records::{nonzero, text};
use brewlog_core::{Brewing, BrewingFilter, BrewingOrder, RecordStore, V60FilterType};
use std::io::{BufRead, Write};

/// Brewing suggestions are a short list with wide notes
const SUGGESTION_ROWS: (usize, usize) = (6, 20);
const SUGGESTION_NOTES_WIDTH: usize = 50;

const BREWING_OPTIONS: [&str; 3] = [
    "Retrieve brewing suggestions",
    "Retrieve brewing ordered by last added",
    "Retrieve brewing ordered by rating",
];

pub fn brewing<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Retrieving brewing");
    match ask!(j.select(&BREWING_OPTIONS)) {
        0 => brewing_suggestions(j),
        1 => brewings(j, BrewingOrder::LastAdded),
        _ => brewings(j, BrewingOrder::Rating),
    }
}

/// Latest brewings for a method, as a recipe to start from
pub fn brewing_suggestions<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Displaying brewing suggestions");
    let (default, max) = SUGGESTION_ROWS;
    let limit = ask!(j.row_limit("suggestions", default, max));

    let method_name = ask!(j.fields.brewing_method_name(&mut j.console, false)?);
    let v60_filter_type = if method_name.eq_ignore_ascii_case("v60") {
        j.console
            .print("Enter v60 filter type (skip if want to display all): ");
        ask!(ChoicePrompt::<V60FilterType>::optional().ask(&mut j.console))
    } else {
        V60FilterType::Unset
    };

    j.console.print("Show optional options (true or false): ");
    let mut filter = BrewingFilter {
        v60_filter_type,
        ..BrewingFilter::default()
    };
    if ask!(BoolPrompt::optional().ask(&mut j.console)) {
        let coffee_name = ask!(j.fields.coffee_name(&mut j.console, true)?);
        if !coffee_name.is_empty() {
            filter.roaster = text(ask!(j.fields.roaster(&mut j.console, &coffee_name, true)?));
        }
        filter.coffee_name = text(coffee_name);

        let grinder_name = ask!(j.fields.grinder_name(&mut j.console, true)?);
        filter.coffee_grams = nonzero(ask!(j
            .fields
            .coffee_weight(&mut j.console, &method_name, &grinder_name, true)?));
        filter.water_grams = nonzero(ask!(j
            .fields
            .water_weight(&mut j.console, &method_name, &grinder_name, true)?));
        filter.grinder_name = text(grinder_name);
    }
    filter.method_name = Some(method_name);

    let suggestions = j
        .store
        .brewing_suggestions(&filter, limit)
        .context("failed to get brewing suggestions")?;

    let mut table = j.table();
    table.set_header(vec![
        "Grind\nSetting",
        "Time\n(s)",
        "Coffee\nWeight\n(g)",
        "Water\nWeight\n(g)",
        "Recommended\nGrind\nAdjustment",
        "Recommended\nCoffee\nAdjustment (g)",
        "Notes",
        "Rating",
        "V60\nFilter\nType",
        "Coffee\nName",
        "Date",
        "Grinder",
    ]);
    for b in &suggestions {
        table.add_row(vec![
            b.grind_setting.to_string(),
            b.total_brewing_time_sec.to_string(),
            b.coffee_grams.to_string(),
            b.water_grams.to_string(),
            b.grind_adjustment.to_string(),
            optional_cell(b.coffee_weight_adjustment_grams),
            wrap_notes(b.notes.as_deref().unwrap_or_default(), SUGGESTION_NOTES_WIDTH),
            optional_cell(b.rating),
            b.v60_filter_type.to_string(),
            b.coffee_name.clone(),
            b.date.to_string(),
            grinder_cell(&b.grinder_name),
        ]);
    }
    j.console.println(table);
    Ok(Outcome::Done(()))
}

pub fn brewings<S, R, W>(j: &mut Journal<'_, S, R, W>, order: BrewingOrder) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let title = match order {
        BrewingOrder::LastAdded => "Displaying brewings by last added",
        BrewingOrder::Rating => "Displaying brewings by rating",
    };
    j.banner(title);
    let max = j.display.max_rows;
    let limit = ask!(j.row_limit("brewings", 0, max));

    j.console.print("Show brewing notes (true or false): ");
    let show_notes = ask!(BoolPrompt::optional().ask(&mut j.console));

    let limit = match limit {
        0 if show_notes => j.display.default_rows_with_notes,
        0 => j.display.default_rows,
        n => n,
    };

    let rows = j
        .store
        .brewings(order, limit)
        .context("failed to get brewings")?;
    let table = brewing_table(j, &rows, show_notes);
    j.console.println(table);
    Ok(Outcome::Done(()))
}

fn brewing_table<S, R, W>(
    j: &Journal<'_, S, R, W>,
    rows: &[Brewing],
    show_notes: bool,
) -> comfy_table::Table
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut table = j.table();
    table.set_header(vec![
        "Date",
        "Coffee\nName",
        "Method",
        "Grind\nSetting",
        "Time\n(s)",
        "Coffee\nWeight\n(g)",
        "Water\nWeight\n(g)",
        "Rating",
        "Recommended\nGrind\nAdjustment",
        "Recommended\nCoffee\nAdjustment (g)",
        "V60\nFilter\nType",
        "Grinder",
        "Roaster",
        "Roast\nDate",
    ]);
    for b in rows {
        table.add_row(vec![
            b.date.to_string(),
            b.coffee_name.clone(),
            b.method_name.clone(),
            b.grind_setting.to_string(),
            b.total_brewing_time_sec.to_string(),
            b.coffee_grams.to_string(),
            b.water_grams.to_string(),
            optional_cell(b.rating),
            b.grind_adjustment.to_string(),
            optional_cell(b.coffee_weight_adjustment_grams),
            b.v60_filter_type.to_string(),
            grinder_cell(&b.grinder_name),
            b.roaster.clone(),
            date_cell(b.roast_date),
        ]);
        if show_notes {
            let notes = split_sentences(b.notes.as_deref().unwrap_or_default());
            table.add_row(vec!["\nNotes:".to_string(), format!("\n{notes}")]);
        }
    }
    table
}

pub fn cuppings<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Displaying cuppings by last added");
    let (default, max) = (j.display.default_rows, j.display.max_rows);
    let limit = ask!(j.row_limit("cuppings", default, max));

    let cuppings = j.store.cuppings(limit).context("failed to get cuppings")?;
    let width = j.display.note_width;
    let mut table = j.table();
    table.set_header(vec!["Date", "Duration\n(min)", "Rank", "Coffee", "Roaster", "Notes"]);
    for cupping in &cuppings {
        table.add_row(vec![
            cupping.date.to_string(),
            cupping.duration_min.to_string(),
            String::new(),
            String::new(),
            String::new(),
            wrap_notes(&cupping.notes, width),
        ]);
        for coffee in &cupping.coffees {
            table.add_row(vec![
                String::new(),
                String::new(),
                coffee.rank.to_string(),
                coffee.coffee_name.clone(),
                coffee.roaster.clone(),
                wrap_notes(&coffee.notes, width),
            ]);
        }
    }
    j.console.println(table);
    Ok(Outcome::Done(()))
}

pub fn purchases<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Displaying coffee purchases by last added");
    let (default, max) = (j.display.default_rows, j.display.max_rows);
    let limit = ask!(j.row_limit("coffee purchases", default, max));

    let purchases = j
        .store
        .purchases(limit)
        .context("failed to get coffee purchases")?;
    let mut table = j.table();
    table.set_header(vec!["Coffee\nName", "Roaster", "Bought\nDate", "Roast\nDate"]);
    for p in &purchases {
        table.add_row(vec![
            p.coffee_name.clone(),
            p.roaster.clone(),
            p.bought_date.to_string(),
            date_cell(p.roast_date),
        ]);
    }
    j.console.println(table);
    Ok(Outcome::Done(()))
}

pub fn coffees<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Displaying coffees by last added");
    let (default, max) = (j.display.default_rows, j.display.max_rows);
    let limit = ask!(j.row_limit("coffees", default, max));

    let coffees = j.store.coffees(limit).context("failed to get coffees")?;
    let mut table = j.table();
    table.set_header(vec![
        "Name",
        "Roaster",
        "Region/Origin",
        "Variety",
        "Processing method",
        "Decaf",
    ]);
    for c in &coffees {
        table.add_row(vec![
            c.name.clone(),
            c.roaster.clone(),
            text_cell(c.region.as_deref()),
            text_cell(c.variety.as_deref()),
            text_cell(c.processing.as_deref()),
            c.decaf.to_string(),
        ]);
    }
    j.console.println(table);
    Ok(Outcome::Done(()))
}

pub fn brewing_methods<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Displaying brewing methods");
    let (default, max) = (j.display.default_rows, j.display.max_rows);
    let limit = ask!(j.row_limit("brewing methods", default, max));

    let methods = j
        .store
        .brewing_methods()
        .context("failed to get brewing methods")?;
    let mut table = j.table();
    table.set_header(vec!["Name"]);
    for method in methods.into_iter().take(limit) {
        table.add_row(vec![method.name]);
    }
    j.console.println(table);
    Ok(Outcome::Done(()))
}

pub fn grinders<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Displaying coffee grinders");
    let (default, max) = (j.display.default_rows, j.display.max_rows);
    let limit = ask!(j.row_limit("coffee grinders", default, max));

    let grinders = j.store.grinders().context("failed to get coffee grinders")?;
    let mut table = j.table();
    table.set_header(vec!["Name", "Company", "Max Grind\nSetting"]);
    for g in grinders.into_iter().take(limit) {
        table.add_row(vec![
            g.name,
            text_cell(g.company.as_deref()),
            optional_cell(g.max_grind_setting),
        ]);
    }
    j.console.println(table);
    Ok(Outcome::Done(()))
}
