//! Interactive permission shell
//!
//! Reads origin URLs, reports their secure-context classification, and
//! drives a geolocation request through a [`PermissionMediator`] so the
//! whole pipeline can be exercised from a terminal.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use cortex_core::{
    is_secure_context_str, Capability, PermissionEvent, PermissionMediator, StatusSink,
};

use crate::error::CliError;
use crate::prompt::ConsolePrompter;

/// Prints mediator notifications the way the browser surfaces them in
/// its status bar.
pub struct PrintingStatusSink;

impl StatusSink for PrintingStatusSink {
    fn notify(&self, event: &PermissionEvent) {
        println!("\x1b[90m{}\x1b[0m", event);
    }
}

/// Run the interactive loop until EOF or `/quit`.
///
/// Each entered line is treated as a requesting origin URL: the loop
/// prints its classification, then resolves a geolocation request
/// against a session-scoped mediator.
///
/// # Errors
///
/// Returns [`CliError`] on readline or decision-store failures.
pub async fn run_cli() -> Result<(), CliError> {
    let mut mediator =
        PermissionMediator::new(ConsolePrompter).with_status_sink(PrintingStatusSink);

    println!("Cortex permission shell");
    println!("Enter an origin URL to simulate a geolocation request.");
    println!("Commands: /decisions  /clear  /quit");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("origin> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                match line {
                    "/quit" | "/exit" => break,
                    "/decisions" => list_decisions(&mediator).await?,
                    "/clear" => {
                        mediator.clear().await?;
                        println!("Forgot all remembered decisions");
                    }
                    origin => {
                        let verdict = if is_secure_context_str(origin) {
                            "secure"
                        } else {
                            "insecure"
                        };
                        println!("context: {}", verdict);

                        let decision = mediator.request(origin, Capability::Geolocation).await;
                        println!("decision: \x1b[1m{}\x1b[0m", decision);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

async fn list_decisions(mediator: &PermissionMediator) -> Result<(), CliError> {
    let records = mediator.remembered().await?;
    if records.is_empty() {
        println!("No remembered decisions");
        return Ok(());
    }
    for record in records {
        println!(
            "{}  {}  {}",
            record.origin, record.capability, record.decision
        );
    }
    Ok(())
}
