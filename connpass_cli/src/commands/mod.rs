//! CLI subcommand implementations.

pub mod events;
pub mod url;
