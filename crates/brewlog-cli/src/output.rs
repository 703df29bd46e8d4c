//! Table rendering and text layout for the retrieval views

use brewlog_core::Date;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use regex::Regex;
use std::fmt::Display;
use std::sync::OnceLock;
use textwrap::{wrap, Options, WordSeparator, WordSplitter, WrapAlgorithm};
use tracing::warn;

/// Width of the attached terminal, or `fallback` when there is none
pub fn terminal_width(fallback: u16) -> u16 {
    match crossterm::terminal::size() {
        Ok((width, _)) if width > 0 => width,
        Ok(_) => fallback,
        Err(e) => {
            warn!(error = %e, fallback, "Unable to read terminal width");
            fallback
        }
    }
}

/// Empty table with the house style, never wider than `width`
pub fn new_table(width: u16) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
    table
}

/// Missing dates are shown as `Unknown`
pub fn date_cell(date: Option<Date>) -> String {
    date.map_or_else(|| "Unknown".to_string(), |d| d.to_string())
}

/// Missing values are shown as `None`
pub fn optional_cell<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

pub fn text_cell(value: Option<&str>) -> String {
    value.unwrap_or("None").to_string()
}

/// Puts a grinder's parenthesised model on its own line, `"Comandante\n(C40)"`
pub fn grinder_cell(name: &str) -> String {
    name.replace('(', "\n(")
}

/// Breaks `text` into lines of at most `width` columns at spaces
///
/// A word longer than `width` is left intact on its own line.
pub fn wrap_notes(text: &str, width: usize) -> String {
    let options = Options::new(width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(false);
    wrap(text, options).join("\n")
}

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.?!:;]) ([A-Z])").expect("valid regex"))
}

/// Starts every sentence of `notes` on a new line
pub fn split_sentences(notes: &str) -> String {
    sentence_break().replace_all(notes, "$1\n$2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 10, ""; "empty")]
    #[test_case("short", 10, "short"; "fits")]
    #[test_case("bright acidity and long finish", 12, "bright\nacidity and\nlong finish"; "wraps at spaces")]
    #[test_case("superlongwordhere ok", 5, "superlongwordhere\nok"; "long word kept whole")]
    #[test_case("café café", 9, "café café"; "measures columns not bytes")]
    fn wraps_notes(text: &str, width: usize, expected: &str) {
        assert_eq!(wrap_notes(text, width), expected);
    }

    #[test]
    fn splits_sentences_before_capitals() {
        assert_eq!(
            split_sentences("Sweet. Bit thin! Try finer: Maybe 2 clicks. ok then"),
            "Sweet.\nBit thin!\nTry finer:\nMaybe 2 clicks. ok then"
        );
    }

    #[test]
    fn missing_values_have_placeholders() {
        assert_eq!(date_cell(None), "Unknown");
        assert_eq!(date_cell(Some(Date::new(2024, 3, 5))), "2024-03-05");
        assert_eq!(optional_cell::<i64>(None), "None");
        assert_eq!(optional_cell(Some(8)), "8");
        assert_eq!(text_cell(None), "None");
    }

    #[test]
    fn grinder_model_moves_to_next_line() {
        assert_eq!(grinder_cell("Comandante (C40 MK4)"), "Comandante \n(C40 MK4)");
    }

    #[test]
    fn table_respects_width() {
        let mut table = new_table(40);
        table.set_header(vec!["Name", "Notes"]);
        table.add_row(vec!["Guji", &wrap_notes("floral jasmine bergamot peach tea", 20)]);
        for line in table.to_string().lines() {
            assert!(line.chars().count() <= 40, "too wide: {line}");
        }
    }
}
