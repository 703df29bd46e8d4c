//! brewlog command line interface
//!
//! Running `brewlog` without a subcommand starts the interactive journal: a
//! main menu of entry forms, retrieval views and statistics over the SQLite
//! journal. The `config` and `stats` subcommands work without prompting.
//!
//! ## Layout
//!
//! - [`session`]: the main menu loop and its dispatch
//! - [`forms`]: one entry form per record kind
//! - [`retrieve`] and [`statistics`]: read-only views
//! - [`journal`]: state shared by forms and views, plus the quit plumbing

pub mod cli;
pub mod commands;
pub mod forms;
pub mod journal;
pub mod logging;
pub mod menu;
pub mod output;
pub mod retrieve;
pub mod screen;
pub mod session;
pub mod statistics;
