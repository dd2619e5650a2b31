//! Console collaborators for the Cortex permission core
//!
//! This crate provides:
//! - A blocking console prompter implementing the core's prompt seam
//! - A printing status sink for mediator notifications
//! - An interactive loop for exercising permission requests end to end

mod error;
pub mod prompt;
pub mod repl;

pub use error::CliError;
pub use prompt::{print_confirmation, ConsolePrompter};
pub use repl::{run_cli, PrintingStatusSink};
