//! Subcommand handlers.

pub mod check;
pub mod show;
