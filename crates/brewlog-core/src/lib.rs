//! Core of the brewlog coffee journal
//!
//! The interesting part of brewlog is data entry: every form is a sequence of
//! prompts that validate typed input, offer suggestions mined from earlier
//! entries and honour a shared quit / optional / manual-entry protocol. This
//! crate holds that machinery and the domain model it fills in.
//!
//! ## Layers
//!
//! - [`prompt`]: line-oriented primitives over a [`prompt::Console`]. Each one
//!   reads until it gets a valid value or the quit token and returns an
//!   [`prompt::Answer`].
//! - [`suggest`]: the [`suggest::SuggestionProvider`], which turns history held
//!   by a [`storage::SuggestionSource`] into bounded, de-duplicated pick-lists.
//! - [`fields`]: one assembler per domain field, pairing a fixed prompt with the
//!   right primitive, bounds and suggestions.
//!
//! Storage lives behind the traits in [`storage`]; the SQLite implementation is
//! in `brewlog-sqlite`.

pub mod date;
pub mod error;
pub mod fields;
pub mod prompt;
pub mod records;
pub mod storage;
pub mod suggest;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use date::{Date, DateParseError};
pub use error::{FieldError, StoreError, StoreResult};
pub use fields::FieldAssembler;
pub use prompt::{Answer, Console, PromptSettings};
pub use records::{
    Brewing, BrewingFilter, BrewingMethod, BrewingOrder, Coffee, CoffeePurchase, CuppedCoffee,
    Cupping, GrindAdjustment, Grinder, RecordKind, V60FilterType,
};
pub use storage::{NameQuery, RecordStore, SuggestionSource, WeightKind, WeightQuery};
pub use suggest::SuggestionProvider;
