//! Domain records assembled by the entry forms
//!
//! Optional columns are `Option` here; the prompts' zero values (empty
//! string, `0`, [`Date::ZERO`]) are converted at construction time with
//! [`text`], [`nonzero`] and [`Date::non_zero`].

use crate::date::Date;
use crate::prompt::Choice;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Closed enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Paper filter used with a V60 dripper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum V60FilterType {
    #[default]
    Unset,
    Eu,
    Jp,
}

impl Choice for V60FilterType {
    const UNSET: Self = Self::Unset;
    const OPTIONS: &'static [Self] = &[Self::Eu, Self::Jp];

    fn label(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Eu => "eu",
            Self::Jp => "jp",
        }
    }
}

impl fmt::Display for V60FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which way the grind should move for the next brew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrindAdjustment {
    #[default]
    Unset,
    Lower,
    Higher,
}

impl Choice for GrindAdjustment {
    const UNSET: Self = Self::Unset;
    const OPTIONS: &'static [Self] = &[Self::Lower, Self::Higher];

    fn label(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Lower => "lower",
            Self::Higher => "higher",
        }
    }
}

impl fmt::Display for GrindAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A coffee, unique by name and roaster
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coffee {
    pub name: String,
    pub roaster: String,
    pub region: Option<String>,
    pub variety: Option<String>,
    pub processing: Option<String>,
    pub decaf: bool,
}

/// A bag of a known coffee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeePurchase {
    pub coffee_name: String,
    pub roaster: String,
    pub bought_date: Date,
    pub roast_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewingMethod {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grinder {
    pub name: String,
    pub company: Option<String>,
    pub max_grind_setting: Option<i64>,
}

/// One brew, linked to a coffee, a method and a grinder by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brewing {
    pub date: Date,
    pub coffee_name: String,
    pub roaster: String,
    pub method_name: String,
    pub roast_date: Option<Date>,
    pub grinder_name: String,
    pub grind_setting: i64,
    pub total_brewing_time_sec: i64,
    pub coffee_grams: i64,
    pub water_grams: i64,
    pub v60_filter_type: V60FilterType,
    pub rating: Option<i64>,
    pub grind_adjustment: GrindAdjustment,
    pub coffee_weight_adjustment_grams: Option<i64>,
    pub notes: Option<String>,
}

/// A coffee tasted during a cupping, ranked against the others
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuppedCoffee {
    pub coffee_name: String,
    pub roaster: String,
    pub rank: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cupping {
    pub date: Date,
    pub duration_min: i64,
    pub notes: String,
    pub coffees: Vec<CuppedCoffee>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

/// Narrows brewings for suggestion lists and rating averages
///
/// Every `None`/`Unset` field matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrewingFilter {
    pub method_name: Option<String>,
    pub v60_filter_type: V60FilterType,
    pub coffee_name: Option<String>,
    pub roaster: Option<String>,
    pub grinder_name: Option<String>,
    pub coffee_grams: Option<i64>,
    pub water_grams: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewingOrder {
    LastAdded,
    /// Highest rating first, unrated brewings last
    Rating,
}

/// Countable record kinds, in statistics menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Brewing,
    Coffee,
    Cupping,
    CoffeePurchase,
    BrewingMethod,
    Grinder,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        Self::Brewing,
        Self::Coffee,
        Self::Cupping,
        Self::CoffeePurchase,
        Self::BrewingMethod,
        Self::Grinder,
    ];

    /// Plural, human-readable name
    pub fn plural(self) -> &'static str {
        match self {
            Self::Brewing => "brewings",
            Self::Coffee => "coffees",
            Self::Cupping => "cuppings",
            Self::CoffeePurchase => "coffee purchases",
            Self::BrewingMethod => "brewing methods",
            Self::Grinder => "coffee grinders",
        }
    }
}

/// Empty prompt answers become `None`
pub fn text(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Skipped integer answers (zero) become `None`
pub fn nonzero(value: i64) -> Option<i64> {
    (value != 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_labels_round_trip() {
        for option in V60FilterType::OPTIONS {
            assert_eq!(V60FilterType::from_label(option.label()), Some(*option));
        }
        assert_eq!(GrindAdjustment::from_label("higher"), Some(GrindAdjustment::Higher));
        assert_eq!(GrindAdjustment::from_label(""), Some(GrindAdjustment::Unset));
        assert_eq!(GrindAdjustment::from_label("coarser"), None);
    }

    #[test]
    fn zero_values_become_none() {
        assert_eq!(text(String::new()), None);
        assert_eq!(text("fruity".into()), Some("fruity".to_string()));
        assert_eq!(nonzero(0), None);
        assert_eq!(nonzero(-2), Some(-2));
    }

    #[test]
    fn record_kinds_are_listed_once() {
        let plurals: std::collections::HashSet<_> =
            RecordKind::ALL.iter().map(|k| k.plural()).collect();
        assert_eq!(plurals.len(), RecordKind::ALL.len());
    }
}
