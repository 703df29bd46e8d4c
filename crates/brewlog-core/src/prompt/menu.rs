//! Numbered suggestion menu shared by the text, integer and date prompts

use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::debug;

use super::{Console, Input};

/// What the user did with a suggestion menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Pick<T> {
    Chosen(T),
    Quit,
    /// Empty answer to an optional prompt
    Skipped,
    /// Continue with free-form entry
    Manual,
}

/// Render `suggestions` as a 1-based list and read one selection
///
/// With `cue_input` set, an `Input: ` cue is printed before falling through to
/// manual entry; date prompts leave it off because a year prompt follows.
pub(crate) fn offer<T, R, W>(
    console: &mut Console<R, W>,
    suggestions: &[T],
    optional: bool,
    cue_input: bool,
) -> Pick<T>
where
    T: Display + Clone,
    R: BufRead,
    W: Write,
{
    let manual = console.settings().manual_entry_token.clone();
    console.println(format!(
        "\nSelect one of the following (integer) or enter '{manual}' for manual entry:"
    ));
    for (index, suggestion) in suggestions.iter().enumerate() {
        console.println(format!("{}. {}", index + 1, suggestion));
    }

    let notice = match console.next_input() {
        Input::Quit => return Pick::Quit,
        Input::Empty if optional => return Pick::Skipped,
        Input::Text(text) if text == manual => "Skipping to manual entry.",
        Input::Text(text) => match text.parse::<usize>() {
            Ok(n) if (1..=suggestions.len()).contains(&n) => {
                return Pick::Chosen(suggestions[n - 1].clone());
            }
            _ => {
                debug!(%text, "menu selection out of range, falling back to manual entry");
                "Not a valid option. Skipping to manual entry"
            }
        },
        Input::Empty => "Not a valid option. Skipping to manual entry",
    };

    console.println(notice);
    if cue_input {
        console.print("Input: ");
    }
    Pick::Manual
}
