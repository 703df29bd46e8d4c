use std::io::{BufRead, Write};

use super::{Answer, Console, Input, VALUE_INVALID, VALUE_REQUIRED};

const TRUE_TOKENS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_TOKENS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Yes/no answer; skipped optional prompts yield `false`
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolPrompt {
    optional: bool,
}

impl BoolPrompt {
    pub fn required() -> Self {
        Self { optional: false }
    }

    pub fn optional() -> Self {
        Self { optional: true }
    }

    pub fn ask<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<bool> {
        loop {
            match console.next_input() {
                Input::Quit => return Answer::Quit,
                Input::Empty if self.optional => return Answer::Given(false),
                Input::Empty => console.print(VALUE_REQUIRED),
                Input::Text(text) => match parse_flag(&text) {
                    Some(value) => return Answer::Given(value),
                    None => console.print(VALUE_INVALID),
                },
            }
        }
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    if TRUE_TOKENS.contains(&text) {
        Some(true)
    } else if FALSE_TOKENS.contains(&text) {
        Some(false)
    } else {
        None
    }
}
