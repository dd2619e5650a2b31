//! # Cortex Core
//!
//! Origin security classification and permission mediation for the Cortex
//! browser shell.
//!
//! The shell embeds a web rendering engine and forwards every sensitive
//! capability request (currently geolocation) to this crate, then applies
//! the returned decision. Two components cooperate:
//!
//! - **[`secure_context`]**: a pure classifier deciding whether a
//!   requesting origin is even eligible to ask for a sensitive
//!   capability (HTTPS/WSS, local files, loopback HTTP, and wrapper
//!   schemes that inherit from the URL they wrap).
//! - **[`permission`]**: a per-session store of remembered user
//!   decisions, and the [`PermissionMediator`] that runs the
//!   classify → replay → prompt → remember pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use cortex_core::{Capability, PermissionDecision, PermissionMediator};
//! use cortex_core::{PermissionPrompter, PromptChoice};
//!
//! /// Stand-in for a modal dialog.
//! struct AlwaysAllow;
//!
//! impl PermissionPrompter for AlwaysAllow {
//!     fn prompt(&self, _origin_display: &str) -> PromptChoice {
//!         PromptChoice::allow(true)
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let mut mediator = PermissionMediator::new(AlwaysAllow);
//!
//! // A secure origin reaches the prompt; the choice is remembered.
//! let decision = mediator
//!     .request("https://maps.example.com", Capability::Geolocation)
//!     .await;
//! assert_eq!(decision, PermissionDecision::Granted);
//!
//! // An insecure origin is refused before any prompt.
//! let decision = mediator
//!     .request("http://maps.example.com", Capability::Geolocation)
//!     .await;
//! assert_eq!(decision, PermissionDecision::Denied);
//! # });
//! ```
//!
//! ## Security posture
//!
//! Every ambiguous input fails closed: malformed URLs, unparsable nested
//! scheme payloads, invalid IP literals, and dismissed prompts all
//! resolve to [`PermissionDecision::Denied`]. Nothing in the request
//! path panics or returns an error to the caller; every request yields a
//! decision.

pub mod events;
pub mod origin;
pub mod permission;
pub mod secure_context;

pub use events::{PermissionEvent, StatusSink};
pub use origin::Origin;
pub use permission::{
    Capability, DecisionRecord, DecisionStore, DecisionStoreError, MemoryDecisionStore,
    PermissionDecision, PermissionKey, PermissionMediator, PermissionPrompter, PromptChoice,
};
pub use secure_context::{is_secure_context, is_secure_context_str};
