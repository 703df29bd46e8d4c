use std::io::{BufRead, Write};

use super::menu::{offer, Pick};
use super::{Answer, Console, Input, INPUT_INVALID, VALUE_REQUIRED};

/// Integer within an inclusive range; skipped optional prompts yield `0`
#[derive(Debug, Clone)]
pub struct IntPrompt {
    min: i64,
    max: i64,
    optional: bool,
    suggestions: Vec<i64>,
    invalid_message: &'static str,
}

impl IntPrompt {
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            optional: false,
            suggestions: Vec::new(),
            invalid_message: INPUT_INVALID,
        }
    }

    pub fn optional(self) -> Self {
        self.optional_if(true)
    }

    pub fn optional_if(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn suggestions(mut self, suggestions: Vec<i64>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub(crate) fn invalid_message(mut self, message: &'static str) -> Self {
        self.invalid_message = message;
        self
    }

    pub fn ask<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<i64> {
        if !self.suggestions.is_empty() {
            match offer(console, &self.suggestions, self.optional, true) {
                Pick::Chosen(value) => return Answer::Given(value),
                Pick::Quit => return Answer::Quit,
                Pick::Skipped => return Answer::Given(0),
                Pick::Manual => {}
            }
        }

        loop {
            match console.next_input() {
                Input::Quit => return Answer::Quit,
                Input::Empty if self.optional => return Answer::Given(0),
                Input::Empty => console.print(VALUE_REQUIRED),
                Input::Text(text) => match text.parse::<i64>() {
                    Ok(n) if (self.min..=self.max).contains(&n) => return Answer::Given(n),
                    _ => console.print(self.invalid_message),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scripted, transcript};
    use test_case::test_case;

    #[test_case("5\n", 5 ; "lower bound")]
    #[test_case("100\n", 100 ; "upper bound")]
    #[test_case("4\n101\n18\n", 18 ; "out of range reprompts")]
    #[test_case("abc\n+20\n", 20 ; "explicit sign")]
    fn bounded_values(input: &str, expected: i64) {
        let mut console = scripted(input);
        assert_eq!(IntPrompt::new(5, 100).ask(&mut console), Answer::Given(expected));
    }

    #[test]
    fn invalid_input_message() {
        let mut console = scripted("4\n7.5\n18\n");
        IntPrompt::new(5, 100).ask(&mut console).given().unwrap();
        assert_eq!(transcript(&console).matches(INPUT_INVALID).count(), 2);
    }

    #[test]
    fn negative_ranges() {
        let mut console = scripted("-21\n-20\n");
        assert_eq!(IntPrompt::new(-20, 20).optional().ask(&mut console), Answer::Given(-20));
    }

    #[test]
    fn optional_empty_is_zero_even_outside_range() {
        let mut console = scripted("\n");
        assert_eq!(IntPrompt::new(1, 10).optional().ask(&mut console), Answer::Given(0));
    }

    #[test]
    fn required_empty_reprompts() {
        let mut console = scripted("\n300\n");
        assert_eq!(IntPrompt::new(10, 1800).ask(&mut console), Answer::Given(300));
        assert!(transcript(&console).contains(VALUE_REQUIRED));
    }

    #[test]
    fn suggestion_selected_by_position() {
        let mut console = scripted("2\n");
        let answer = IntPrompt::new(20, 2000).suggestions(vec![250, 300]).ask(&mut console);
        assert_eq!(answer, Answer::Given(300));
    }

    #[test]
    fn out_of_range_selection_goes_manual() {
        let mut console = scripted("3\n275\n");
        let answer = IntPrompt::new(20, 2000).suggestions(vec![250, 300]).ask(&mut console);
        assert_eq!(answer, Answer::Given(275));
    }

    #[test]
    fn quit_from_menu_and_manual_entry() {
        let mut console = scripted("#\n");
        assert!(IntPrompt::new(5, 100).suggestions(vec![18]).ask(&mut console).is_quit());

        let mut console = scripted("m\n#\n");
        assert!(IntPrompt::new(5, 100).suggestions(vec![18]).ask(&mut console).is_quit());
    }
}
