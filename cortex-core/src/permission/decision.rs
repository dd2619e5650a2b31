//! Permission decision types.
//!
//! A decision records what the user chose for one (origin, capability)
//! pair. Decisions are terminal: once recorded they are replayed, never
//! renegotiated, until the owning session forgets them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sensitive capability web content can request.
///
/// This is a closed set owned by the shell: the embedding layer maps its
/// engine's native feature identifiers onto these variants at the
/// boundary. Only geolocation has been reviewed for mediation; every
/// other capability is refused by policy before the store or the user is
/// ever consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Location access.
    Geolocation,

    /// Any capability the shell does not mediate.
    Other,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Geolocation => write!(f, "geolocation"),
            Capability::Other => write!(f, "unmediated capability"),
        }
    }
}

/// The outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    /// The user allowed the capability.
    Granted,

    /// The user declined, or policy refused the request outright.
    Denied,
}

impl PermissionDecision {
    /// Whether this decision allows the capability.
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionDecision::Granted)
    }
}

impl std::fmt::Display for PermissionDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionDecision::Granted => write!(f, "granted"),
            PermissionDecision::Denied => write!(f, "denied"),
        }
    }
}

/// Index into the decision store.
///
/// Keys carry the origin exactly as the caller presented it, not a
/// normalized form: two spellings of the same origin are distinct keys.
/// This scopes a remembered decision to the exact display string the
/// user saw when they made it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionKey {
    /// Origin string as presented by the caller.
    pub origin: String,

    /// Capability the decision applies to.
    pub capability: Capability,
}

impl PermissionKey {
    /// Create a key for an (origin, capability) pair.
    pub fn new(origin: impl Into<String>, capability: Capability) -> Self {
        Self {
            origin: origin.into(),
            capability,
        }
    }
}

/// A remembered user decision.
///
/// # Example
///
/// ```rust
/// use cortex_core::permission::{Capability, DecisionRecord, PermissionDecision};
///
/// let record = DecisionRecord::new(
///     "https://example.com",
///     Capability::Geolocation,
///     PermissionDecision::Granted,
/// );
/// assert!(record.decision.is_granted());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Origin string the decision was made for.
    pub origin: String,

    /// Capability the decision covers.
    pub capability: Capability,

    /// What the user chose.
    pub decision: PermissionDecision,

    /// When the decision was recorded.
    pub created_at: DateTime<Utc>,
}

impl DecisionRecord {
    /// Record a decision for an (origin, capability) pair.
    pub fn new(
        origin: impl Into<String>,
        capability: Capability,
        decision: PermissionDecision,
    ) -> Self {
        Self {
            origin: origin.into(),
            capability,
            decision,
            created_at: Utc::now(),
        }
    }

    /// The store key this record is filed under.
    pub fn key(&self) -> PermissionKey {
        PermissionKey::new(self.origin.clone(), self.capability)
    }
}

impl PartialEq for DecisionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.capability == other.capability
            && self.decision == other.decision
    }
}

impl Eq for DecisionRecord {}
