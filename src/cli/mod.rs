//! CLI module - argument parsing and the `list` subcommand

mod args;
pub mod list;

pub use args::{Cli, Commands};
pub use list::run_list;
