//! Permission system for sensitive capability requests.
//!
//! This module decides what happens when web content asks for a
//! sensitive capability. Decisions the user opts to remember are kept
//! per (origin, capability) for the lifetime of the owning session and
//! replayed instead of re-prompting.
//!
//! # Overview
//!
//! - **[`PermissionMediator`]**: runs a request through classification,
//!   the decision store, and the prompt collaborator
//! - **[`Capability`]**: the closed set of capabilities the shell maps
//!   engine features onto (only geolocation is mediated)
//! - **[`PermissionDecision`]**: the terminal grant/deny outcome
//! - **[`DecisionRecord`]** / **[`PermissionKey`]**: a remembered
//!   decision and the key it is filed under
//! - **[`DecisionStore`]**: trait for decision storage
//! - **[`MemoryDecisionStore`]**: in-memory store (cleared with the
//!   session)
//! - **[`PermissionPrompter`]**: blocking prompt collaborator seam
//!
//! # Default Behavior
//!
//! Requests are **denied without prompting** unless every gate passes:
//! the capability must be geolocation, and the requesting origin must be
//! a secure context. Only then is the store consulted and, on a miss,
//! the user asked.
//!
//! # Example
//!
//! ```rust
//! use cortex_core::permission::{
//!     Capability, PermissionDecision, PermissionMediator, PermissionPrompter, PromptChoice,
//! };
//!
//! struct DenyButRemember;
//!
//! impl PermissionPrompter for DenyButRemember {
//!     fn prompt(&self, _origin_display: &str) -> PromptChoice {
//!         PromptChoice::deny(true)
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let mut mediator = PermissionMediator::new(DenyButRemember);
//!
//! // First request prompts; the denial is remembered.
//! let first = mediator
//!     .request("https://example.com", Capability::Geolocation)
//!     .await;
//! assert_eq!(first, PermissionDecision::Denied);
//!
//! // Second request replays the remembered denial without prompting.
//! let second = mediator
//!     .request("https://example.com", Capability::Geolocation)
//!     .await;
//! assert_eq!(second, PermissionDecision::Denied);
//! # });
//! ```
//!
//! # Request outcomes
//!
//! | Gate | Outcome |
//! |------|---------|
//! | Capability other than geolocation | Denied, no prompt |
//! | Origin not a secure context | Denied, no prompt |
//! | Remembered decision exists | Replayed, no prompt |
//! | Otherwise | Prompt once, optionally remember |

mod decision;
mod mediator;
mod store;

pub use decision::{Capability, DecisionRecord, PermissionDecision, PermissionKey};
pub use mediator::{PermissionMediator, PermissionPrompter, PromptChoice};
pub use store::{DecisionStore, DecisionStoreError, MemoryDecisionStore};
