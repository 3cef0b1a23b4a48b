//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tableau binary.

mod commands;
mod generate;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::handle_generate_command;
