use std::io::{BufRead, Write};
use std::marker::PhantomData;

use super::{Answer, Console, TextPrompt};

/// A closed set of values entered by label, with an explicit unset member
pub trait Choice: Copy + Eq + 'static {
    const UNSET: Self;
    /// Selectable members, excluding `UNSET`
    const OPTIONS: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        if label.is_empty() {
            return Some(Self::UNSET);
        }
        Self::OPTIONS.iter().copied().find(|option| option.label() == label)
    }
}

/// Text prompt restricted to the labels of a [`Choice`]
#[derive(Debug, Clone, Copy)]
pub struct ChoicePrompt<T> {
    optional: bool,
    _choice: PhantomData<T>,
}

impl<T: Choice> ChoicePrompt<T> {
    pub fn required() -> Self {
        Self {
            optional: false,
            _choice: PhantomData,
        }
    }

    pub fn optional() -> Self {
        Self {
            optional: true,
            _choice: PhantomData,
        }
    }

    pub fn ask<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Answer<T> {
        TextPrompt::optional()
            .optional_if(self.optional)
            .options(T::OPTIONS.iter().map(|option| option.label()))
            .ask(console)
            .map(|label| T::from_label(&label).unwrap_or(T::UNSET))
    }
}
