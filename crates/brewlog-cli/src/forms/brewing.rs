use crate::journal::{ask, Journal, Outcome};
use anyhow::Result;
use brewlog_core::records::{nonzero, text};
use brewlog_core::{Brewing, RecordStore};
use std::io::{BufRead, Write};

pub fn add<S, R, W>(j: &mut Journal<'_, S, R, W>) -> Result<Outcome>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    j.banner("Adding new coffee brewing");

    let date = ask!(j.fields.event_date(&mut j.console, "Enter brewing ?: "));
    let limit = j.fields.limits().form_coffee_names;
    let coffee_name = ask!(j.fields.coffee_name_with_limit(&mut j.console, false, limit)?);
    let roaster = ask!(j.fields.roaster(&mut j.console, &coffee_name, false)?);
    let method_name = ask!(j.fields.brewing_method_name(&mut j.console, false)?);
    let roast_date = ask!(j.fields.roast_date(&mut j.console, &coffee_name)?);
    let grinder_name = ask!(j.fields.grinder_name(&mut j.console, false)?);
    let grind_setting = ask!(j.fields.grind_setting(&mut j.console));
    let total_brewing_time_sec = ask!(j.fields.total_brewing_time(&mut j.console));
    let coffee_grams = ask!(j
        .fields
        .coffee_weight(&mut j.console, &method_name, &grinder_name, false)?);
    let water_grams = ask!(j
        .fields
        .water_weight(&mut j.console, &method_name, &grinder_name, false)?);
    let v60_filter_type = ask!(j.fields.v60_filter_type(&mut j.console));
    let rating = ask!(j.fields.rating(&mut j.console));
    let grind_adjustment = ask!(j.fields.grind_adjustment(&mut j.console));
    let weight_adjustment = ask!(j.fields.coffee_weight_adjustment(&mut j.console));
    let notes = ask!(j.fields.notes(&mut j.console, true, "brewing"));

    let brewing = Brewing {
        date,
        coffee_name,
        roaster,
        method_name,
        roast_date: roast_date.non_zero(),
        grinder_name,
        grind_setting,
        total_brewing_time_sec,
        coffee_grams,
        water_grams,
        v60_filter_type,
        rating: nonzero(rating),
        grind_adjustment,
        coffee_weight_adjustment_grams: nonzero(weight_adjustment),
        notes: text(notes),
    };
    let result = j.store.insert_brewing(&brewing);
    j.finish(result, "coffee brewing", ())
}
