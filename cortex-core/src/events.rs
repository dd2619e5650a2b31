//! Observable permission events.
//!
//! The mediator emits one event per resolved request so the shell can
//! surface what happened (status bar text, logs) and so tests can tell a
//! policy refusal apart from a user denial. Events are informational;
//! nothing in the decision path depends on whether anyone listens.

use std::fmt;

use crate::permission::{Capability, PermissionDecision};

/// Events emitted while a permission request is mediated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionEvent {
    /// The request was refused because the origin is not a secure
    /// context (or could not be parsed at all). No prompt was shown.
    BlockedInsecureOrigin {
        /// Origin string as presented by the requester.
        origin: String,
    },

    /// The request named a capability the shell does not mediate.
    /// No prompt was shown.
    UnreviewedCapability {
        /// Origin string as presented by the requester.
        origin: String,
        /// The refused capability.
        capability: Capability,
    },

    /// A remembered decision was replayed without prompting.
    DecisionReplayed {
        /// Origin string the decision was filed under.
        origin: String,
        /// The replayed decision.
        decision: PermissionDecision,
    },

    /// The user was prompted and a decision was reached.
    DecisionPrompted {
        /// Origin string as presented by the requester.
        origin: String,
        /// The resulting decision (a dismissed prompt resolves to a
        /// denial).
        decision: PermissionDecision,
        /// Whether the decision was written to the store.
        remembered: bool,
    },
}

impl fmt::Display for PermissionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionEvent::BlockedInsecureOrigin { origin } => {
                write!(f, "Blocked location request from {}: insecure context", origin)
            }
            PermissionEvent::UnreviewedCapability { origin, capability } => {
                write!(f, "Refused {} request from {}", capability, origin)
            }
            PermissionEvent::DecisionReplayed { origin, decision } => {
                write!(f, "Replayed remembered decision for {}: {}", origin, decision)
            }
            PermissionEvent::DecisionPrompted {
                origin,
                decision,
                remembered,
            } => {
                write!(f, "Location access {} for {}", decision, origin)?;
                if *remembered {
                    write!(f, " (remembered)")?;
                }
                Ok(())
            }
        }
    }
}

/// Receives permission events as they happen.
///
/// Purely informational; there is no contract on how implementations
/// present the messages. The browser shell routes them to its status
/// bar, the CLI prints them, tests collect them.
pub trait StatusSink: Send + Sync {
    /// Called once per emitted event.
    fn notify(&self, event: &PermissionEvent);
}
