use chrono::Datelike;
use std::io::{BufRead, Write};

use super::menu::{offer, Pick};
use super::{given, Answer, Console, IntPrompt, DATE_IN_FUTURE, DAY_INVALID};
use crate::date::{Date, MIN_YEAR};

/// Composite date entered as year, month and day
///
/// `message` must contain `?`, which is replaced by `date`, `year`, `month`
/// or `day` for each read, e.g. `Enter roast ?: `. On an optional prompt a
/// skipped year (or month, or day) ends the prompt with [`Date::ZERO`]. A
/// typed date after today is refused and entry starts again at the year.
#[derive(Debug, Clone)]
pub struct DatePrompt {
    message: String,
    optional: bool,
    suggestions: Vec<Date>,
}

impl DatePrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            optional: false,
            suggestions: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Whole dates offered before the year prompt; zero dates are dropped
    pub fn suggestions(mut self, suggestions: Vec<Date>) -> Self {
        self.suggestions = suggestions.into_iter().filter(|d| !d.is_zero()).collect();
        self
    }

    pub fn ask<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<Date> {
        if !self.suggestions.is_empty() {
            console.println(self.message.replace('?', "date"));
            match offer(console, &self.suggestions, self.optional, false) {
                Pick::Chosen(date) => return Answer::Given(date),
                Pick::Quit => return Answer::Quit,
                Pick::Skipped => return Answer::Given(Date::ZERO),
                Pick::Manual => {}
            }
        }

        let today = Date::from(console.settings().today);
        loop {
            let date = given!(self.ask_parts(console));
            if date.is_zero() || date <= today {
                return Answer::Given(date);
            }
            console.println(DATE_IN_FUTURE);
        }
    }

    /// Year, month and day read one after another
    fn ask_parts<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<Date> {
        let today = console.settings().today;
        let this_month = i64::from(today.month());
        let last_month = if this_month == 1 { 12 } else { this_month - 1 };

        console.print(self.message.replace('?', "year"));
        let current_year = i64::from(today.year());
        let year = given!(IntPrompt::new(i64::from(MIN_YEAR), current_year)
            .optional_if(self.optional)
            .suggestions(vec![current_year])
            .ask(console));
        if year == 0 {
            return Answer::Given(Date::ZERO);
        }

        console.print(self.message.replace('?', "month"));
        let month = given!(IntPrompt::new(1, 12)
            .optional_if(self.optional)
            .suggestions(vec![this_month, last_month])
            .ask(console));
        if month == 0 {
            return Answer::Given(Date::ZERO);
        }

        // month is within 1..=12 here
        let month = month as u32;
        let last_day = Date::days_in_month(month).unwrap_or(31);

        console.print(self.message.replace('?', "day"));
        let day = given!(IntPrompt::new(1, i64::from(last_day))
            .optional_if(self.optional)
            .invalid_message(DAY_INVALID)
            .ask(console));
        if day == 0 {
            return Answer::Given(Date::ZERO);
        }

        Answer::Given(Date::new(year as i32, month, day as u32))
    }
}
