//! Command handler modules for the pokerhands CLI.
//!
//! This module contains individual handler functions for each CLI subcommand.
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod classify;
mod duel;
mod solve;

pub use classify::handle_classify_command;
pub use duel::handle_duel_command;
pub use solve::handle_solve_command;
