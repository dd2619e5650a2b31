//! CLI-specific error types

use thiserror::Error;

/// Errors that can occur while running the interactive shell
#[derive(Debug, Error)]
pub enum CliError {
    /// Readline/input error
    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Decision store error
    #[error("Store error: {0}")]
    Store(#[from] cortex_core::DecisionStoreError),

    /// IO error (stdout, history file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
