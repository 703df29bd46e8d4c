//! Entry forms, one per record kind
//!
//! Every form prints a banner, walks its prompts in a fixed order and writes
//! the record in a single insert. Entering the quit token at any prompt
//! abandons the form without writing anything.

pub mod brewing;
pub mod coffee;
pub mod cupping;
pub mod equipment;
pub mod espresso;
pub mod purchase;
