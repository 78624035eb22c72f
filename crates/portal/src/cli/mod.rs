//! CLI module - Command-line interface for the portal.
//!
//! Provides commands for:
//! - `directorates` / `divisions` - Lookup lists
//! - `list` / `search` / `get` - Employee queries
//! - `create` / `update` / `delete` - Employee changes

pub mod args;

pub use args::{Cli, Commands};
