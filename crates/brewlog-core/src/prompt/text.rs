use std::io::{BufRead, Write};

use super::menu::{offer, Pick};
use super::{Answer, Console, Input, NOT_AN_OPTION, VALUE_REQUIRED};

/// Free or option-constrained text
///
/// With options set, the answer is one of them, or empty when optional. When
/// no suggestions are given the options are offered as the menu.
#[derive(Debug, Clone, Default)]
pub struct TextPrompt {
    optional: bool,
    options: Vec<String>,
    suggestions: Vec<String>,
}

impl TextPrompt {
    pub fn required() -> Self {
        Self::default()
    }

    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Self::default()
        }
    }

    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn ask<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<String> {
        let menu = if self.suggestions.is_empty() {
            &self.options
        } else {
            &self.suggestions
        };

        if !menu.is_empty() {
            match offer(console, menu, self.optional, true) {
                Pick::Chosen(value) => return Answer::Given(value),
                Pick::Quit => return Answer::Quit,
                Pick::Skipped => return Answer::Given(String::new()),
                Pick::Manual => {}
            }
        }

        loop {
            match console.next_input() {
                Input::Quit => return Answer::Quit,
                Input::Empty if self.optional => return Answer::Given(String::new()),
                Input::Empty => console.print(VALUE_REQUIRED),
                Input::Text(text) if self.options.is_empty() || self.options.contains(&text) => {
                    return Answer::Given(text);
                }
                Input::Text(_) => console.print(NOT_AN_OPTION),
            }
        }
    }
}
