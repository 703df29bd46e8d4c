//! Main menu and integer sub-menus

use crate::output::new_table;
use brewlog_core::prompt::Input;
use brewlog_core::{Answer, Console};
use comfy_table::Table;
use std::io::{BufRead, Write};

/// Something the main menu can start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewBrewing,
    NewCupping,
    NewCoffeePurchase,
    NewCoffee,
    NewBrewingMethod,
    NewGrinder,
    NewEspressoDialingIn,
    RetrieveBrewing,
    RetrieveCupping,
    RetrieveCoffeePurchase,
    RetrieveCoffee,
    RetrieveBrewingMethod,
    RetrieveGrinder,
    TotalCount,
    AverageRating,
    Quit,
    ClearScreen,
    DisplayOptions,
}

#[derive(Debug, Clone)]
pub struct Category {
    /// Reference letter typed before the entry index, e.g. `A` in `A3`
    pub letter: char,
    pub entries: Vec<(&'static str, Action)>,
}

/// The main menu layout, built once per session
#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub categories: Vec<Category>,
}

impl MenuConfig {
    pub fn standard() -> Self {
        use Action::*;
        Self {
            categories: vec![
                Category {
                    letter: 'A',
                    entries: vec![
                        ("New brewing", NewBrewing),
                        ("New cupping", NewCupping),
                        ("New coffee purchase", NewCoffeePurchase),
                        ("New coffee", NewCoffee),
                        ("New brewing method", NewBrewingMethod),
                        ("New grinder", NewGrinder),
                        ("New espresso dialing in", NewEspressoDialingIn),
                    ],
                },
                Category {
                    letter: 'B',
                    entries: vec![
                        ("Retrieve brewing", RetrieveBrewing),
                        ("Retrieve cupping", RetrieveCupping),
                        ("Retrieve coffee purchase", RetrieveCoffeePurchase),
                        ("Retrieve coffee", RetrieveCoffee),
                        ("Retrieve brewing method", RetrieveBrewingMethod),
                        ("Retrieve grinder", RetrieveGrinder),
                    ],
                },
                Category {
                    letter: 'C',
                    entries: vec![
                        ("Total count", TotalCount),
                        ("Average brewing rating", AverageRating),
                    ],
                },
                Category {
                    letter: 'E',
                    entries: vec![
                        ("Quit", Quit),
                        ("Clear screen", ClearScreen),
                        ("Display options", DisplayOptions),
                    ],
                },
            ],
        }
    }

    /// Resolves a two character selection such as `a0` or `E2`
    pub fn select(&self, input: &str) -> Option<Action> {
        let input = input.trim().to_uppercase();
        let mut chars = input.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return None;
        };
        let index = digit.to_digit(10)? as usize;

        self.categories
            .iter()
            .find(|category| category.letter == letter)?
            .entries
            .get(index)
            .map(|&(_, action)| action)
    }

    /// Categories side by side, one `Option | Description` pair each
    pub fn table(&self, width: u16) -> Table {
        let mut table = new_table(width);
        table.set_header(
            self.categories
                .iter()
                .flat_map(|_| ["Option", "Description"])
                .collect::<Vec<_>>(),
        );

        let longest = self
            .categories
            .iter()
            .map(|category| category.entries.len())
            .max()
            .unwrap_or(0);
        for i in 0..longest {
            let row: Vec<String> = self
                .categories
                .iter()
                .flat_map(|category| match category.entries.get(i) {
                    Some((description, _)) => {
                        [format!("{}{i}", category.letter), description.to_string()]
                    }
                    None => [String::new(), String::new()],
                })
                .collect();
            table.add_row(row);
        }
        table
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn options_table(options: &[&str], width: u16) -> Table {
    let mut table = new_table(width);
    table.set_header(vec!["Option", "Description"]);
    for (i, option) in options.iter().enumerate() {
        table.add_row(vec![i.to_string(), option.to_string()]);
    }
    table
}

/// Shows `options` and reads an index until one is valid or the user quits
pub fn select_option<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &[&str],
    width: u16,
) -> Answer<usize> {
    console.println(options_table(options, width));
    loop {
        console.print("Enter option (integer): ");
        match console.next_input() {
            Input::Quit => return Answer::Quit,
            Input::Text(text) => {
                if let Some(index) = text.parse::<usize>().ok().filter(|&i| i < options.len()) {
                    return Answer::Given(index);
                }
            }
            Input::Empty => {}
        }
        console.println("Invalid option. The following options are available:");
        console.println(options_table(options, width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_core::test_support::{scripted, transcript};
    use test_case::test_case;

    #[test_case("A0", Some(Action::NewBrewing))]
    #[test_case("a6", Some(Action::NewEspressoDialingIn))]
    #[test_case(" b5 ", Some(Action::RetrieveGrinder))]
    #[test_case("C1", Some(Action::AverageRating))]
    #[test_case("e0", Some(Action::Quit))]
    #[test_case("A7", None)]
    #[test_case("D0", None)]
    #[test_case("A", None)]
    #[test_case("A00", None)]
    #[test_case("0A", None)]
    fn selects_actions(input: &str, expected: Option<Action>) {
        assert_eq!(MenuConfig::standard().select(input), expected);
    }

    #[test]
    fn table_lists_every_entry() {
        let rendered = MenuConfig::standard().table(200).to_string();
        for code in ["A0", "A6", "B5", "C1", "E2"] {
            assert!(rendered.contains(code), "missing {code}");
        }
        assert!(rendered.contains("New espresso dialing in"));
    }

    #[test]
    fn select_option_retries_until_valid() {
        let mut console = scripted("x\n3\n\n1\n");
        let answer = select_option(&mut console, &["First", "Second"], 80);
        assert_eq!(answer, Answer::Given(1));

        let out = transcript(&console);
        assert_eq!(
            out.matches("Invalid option. The following options are available:")
                .count(),
            3
        );
        assert_eq!(out.matches("Enter option (integer): ").count(), 4);
    }

    #[test]
    fn select_option_quits() {
        let mut console = scripted("#\n");
        assert_eq!(select_option(&mut console, &["Only"], 80), Answer::Quit);
    }
}
