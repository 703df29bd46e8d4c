//! Line-oriented prompt primitives
//!
//! Every primitive reads one line at a time from a [`Console`] until it has a
//! value that satisfies its constraints, then returns [`Answer::Given`]. Typing
//! exactly the quit token at any read returns [`Answer::Quit`] instead. Invalid
//! input never surfaces as an error: the primitive prints why and reads again.
//!
//! Primitives that carry suggestions first render a 1-based pick-list. The
//! user can pick a number, type the manual-entry token to fall through to free
//! entry, or skip (optional prompts only). Anything else also falls through to
//! free entry with a notice.
//!
//! End of input is treated like the quit token so scripted sessions can never
//! spin on a required prompt.

mod choice;
mod date;
mod flag;
mod menu;
mod number;
mod text;

pub use choice::{Choice, ChoicePrompt};
pub use date::DatePrompt;
pub use flag::BoolPrompt;
pub use number::IntPrompt;
pub use text::TextPrompt;

use brewlog_config::PromptConfig;
use chrono::{Local, NaiveDate};
use std::fmt;
use std::io::{self, BufRead, Stdin, Stdout, Write};
use tracing::{debug, warn};

use crate::date::Date;

pub(crate) const VALUE_REQUIRED: &str = "A value is required. Please try again: ";
pub(crate) const NOT_AN_OPTION: &str = "Not a valid option. Please try again: ";
pub(crate) const INPUT_INVALID: &str = "Input invalid. Please try again: ";
pub(crate) const VALUE_INVALID: &str = "Invalid value. Please try again: ";
pub(crate) const DAY_INVALID: &str = "Day invalid. Please try again: ";
pub(crate) const DATE_IN_FUTURE: &str = "Date is in the future. Please try again.";

/// Outcome of a prompt: a validated value, or the user asked to stop
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Answer<T> {
    Given(T),
    Quit,
}

impl<T> Answer<T> {
    pub fn is_quit(&self) -> bool {
        matches!(self, Answer::Quit)
    }

    pub fn given(self) -> Option<T> {
        match self {
            Answer::Given(value) => Some(value),
            Answer::Quit => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Answer<U> {
        match self {
            Answer::Given(value) => Answer::Given(f(value)),
            Answer::Quit => Answer::Quit,
        }
    }
}

/// Unwraps a given answer or returns `Answer::Quit` from the enclosing prompt
macro_rules! given {
    ($answer:expr) => {
        match $answer {
            $crate::prompt::Answer::Given(value) => value,
            $crate::prompt::Answer::Quit => return $crate::prompt::Answer::Quit,
        }
    };
}
pub(crate) use given;

/// One line read from the console, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The quit token, or end of input
    Quit,
    Empty,
    Text(String),
}

/// Protocol tokens and the clock used by date prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSettings {
    pub quit_token: String,
    pub manual_entry_token: String,
    /// Anchors year bounds and the today/yesterday suggestions
    pub today: NaiveDate,
}

impl PromptSettings {
    pub fn new(config: &PromptConfig) -> Self {
        Self {
            quit_token: config.quit_token.clone(),
            manual_entry_token: config.manual_entry_token.clone(),
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Today followed by yesterday, the usual suggestions for an event date
    pub fn recent_days(&self) -> Vec<Date> {
        let mut days = vec![Date::from(self.today)];
        if let Some(yesterday) = self.today.pred_opt() {
            days.push(Date::from(yesterday));
        }
        days
    }

    /// Form banner hint, e.g. `(Enter # to quit)`
    pub fn quit_hint(&self) -> String {
        format!("(Enter {} to quit)", self.quit_token)
    }
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self::new(&PromptConfig::default())
    }
}

/// Line reader and writer shared by every prompt in a session
pub struct Console<R, W> {
    input: R,
    output: W,
    settings: PromptSettings,
}

/// Console bound to the process's standard streams
pub type StdConsole = Console<io::StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio(settings: PromptSettings) -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout(), settings)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: PromptSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    pub fn settings(&self) -> &PromptSettings {
        &self.settings
    }

    /// Write without a trailing newline, flushing so the cursor sits after it
    pub fn print(&mut self, text: impl fmt::Display) {
        let result = write!(self.output, "{text}").and_then(|_| self.output.flush());
        if let Err(err) = result {
            warn!(error = %err, "failed to write to console");
        }
    }

    pub fn println(&mut self, text: impl fmt::Display) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!(error = %err, "failed to write to console");
        }
    }

    /// Read one line with surrounding whitespace removed, `None` at end of input
    ///
    /// A line that is not valid UTF-8 is reported and read again.
    pub fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match self.input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    debug!("end of console input");
                    return None;
                }
                Ok(_) => match String::from_utf8(std::mem::take(&mut buf)) {
                    Ok(line) => return Some(line.trim().to_string()),
                    Err(err) => {
                        debug!(error = %err, "console line is not valid UTF-8");
                        self.print(INPUT_INVALID);
                    }
                },
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    warn!(error = %err, "failed to read from console");
                    return None;
                }
            }
        }
    }

    /// Read and classify one line
    pub fn next_input(&mut self) -> Input {
        match self.read_line() {
            None => Input::Quit,
            Some(line) if line == self.settings.quit_token => Input::Quit,
            Some(line) if line.is_empty() => Input::Empty,
            Some(line) => Input::Text(line),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
