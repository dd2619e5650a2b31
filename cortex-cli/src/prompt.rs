//! Console permission prompts
//!
//! Blocking stdin prompt used as the mediator's prompt collaborator when
//! running in a terminal. The options mirror the browser dialog: allow
//! or deny, optionally remembered for the session.

use cortex_core::{PermissionPrompter, PromptChoice};
use std::io::{stdin, stdout, BufRead, Write};

/// Simple console prompter with single-letter choices
///
/// Displays:
/// - y: allow once
/// - a: allow and remember (session)
/// - n: deny once
/// - d: deny and remember (session)
///
/// Closed stdin counts as a dismissal: the request is denied and
/// nothing is remembered.
pub struct ConsolePrompter;

impl PermissionPrompter for ConsolePrompter {
    fn prompt(&self, origin_display: &str) -> PromptChoice {
        println!("\n\x1b[33m{} wants to know your location.\x1b[0m", origin_display);
        println!("  \x1b[1my\x1b[0m  allow once");
        println!("  \x1b[1ma\x1b[0m  allow and remember (session)");
        println!("  \x1b[1mn\x1b[0m  deny once");
        println!("  \x1b[1md\x1b[0m  deny and remember (session)");

        loop {
            print!("\nChoice: ");
            let _ = stdout().flush();

            let Some(input) = read_input() else {
                print_confirmation("Dismissed, denying");
                return PromptChoice::dismissed();
            };

            match input.trim().to_lowercase().as_str() {
                "y" | "yes" => {
                    print_confirmation("Allowed once");
                    return PromptChoice::allow(false);
                }
                "a" | "always" => {
                    print_confirmation("Allowed and remembered for session");
                    return PromptChoice::allow(true);
                }
                "n" | "no" => {
                    print_confirmation("Denied once");
                    return PromptChoice::deny(false);
                }
                "d" | "never" => {
                    print_confirmation("Denied and remembered for session");
                    return PromptChoice::deny(true);
                }
                "" => continue,
                _ => {
                    println!("\x1b[31mInvalid choice. Use y/a/n/d\x1b[0m");
                }
            }
        }
    }
}

/// Read one line from stdin. `None` on EOF or read failure.
fn read_input() -> Option<String> {
    let mut line = String::new();
    match stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

/// Print a dimmed confirmation line
pub fn print_confirmation(message: &str) {
    println!("\x1b[90m{}\x1b[0m", message);
}
