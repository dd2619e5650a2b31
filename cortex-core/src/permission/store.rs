//! Decision storage trait and the in-memory implementation.

use super::decision::{DecisionRecord, PermissionKey};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Errors that can occur in decision store operations.
///
/// The in-memory store is infallible; these variants exist for
/// shell-owned implementations backed by real storage.
#[derive(Debug, thiserror::Error)]
pub enum DecisionStoreError {
    /// Failed to read decisions from storage.
    #[error("Failed to read decisions: {0}")]
    Read(String),

    /// Failed to write decisions to storage.
    #[error("Failed to write decisions: {0}")]
    Write(String),

    /// IO error during storage operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for decision storage implementations.
///
/// A store holds at most one decision per [`PermissionKey`]. Entries are
/// created only when the user opts to remember a choice and live until
/// deleted or the store is dropped with its session.
#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// Save a remembered decision, replacing any previous one for its key.
    async fn save(&self, record: DecisionRecord) -> Result<(), DecisionStoreError>;

    /// Load the remembered decision for a key, if any.
    async fn load(&self, key: &PermissionKey) -> Result<Option<DecisionRecord>, DecisionStoreError>;

    /// Load every remembered decision.
    async fn load_all(&self) -> Result<Vec<DecisionRecord>, DecisionStoreError>;

    /// Remove the decision for a key.
    ///
    /// Returns `true` if a decision was removed, `false` if not found.
    async fn delete(&self, key: &PermissionKey) -> Result<bool, DecisionStoreError>;

    /// Forget every remembered decision.
    async fn clear(&self) -> Result<(), DecisionStoreError>;
}

/// In-memory decision store.
///
/// Decisions live for the owning session and are gone when it ends.
/// This is the store the mediator uses unless given another one.
pub struct MemoryDecisionStore {
    records: RwLock<HashMap<PermissionKey, DecisionRecord>>,
}

impl MemoryDecisionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryDecisionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionStore for MemoryDecisionStore {
    async fn save(&self, record: DecisionRecord) -> Result<(), DecisionStoreError> {
        let mut records = self.records.write().expect("RwLock poisoned");
        records.insert(record.key(), record);
        Ok(())
    }

    async fn load(&self, key: &PermissionKey) -> Result<Option<DecisionRecord>, DecisionStoreError> {
        Ok(self
            .records
            .read()
            .expect("RwLock poisoned")
            .get(key)
            .cloned())
    }

    async fn load_all(&self) -> Result<Vec<DecisionRecord>, DecisionStoreError> {
        Ok(self
            .records
            .read()
            .expect("RwLock poisoned")
            .values()
            .cloned()
            .collect())
    }

    async fn delete(&self, key: &PermissionKey) -> Result<bool, DecisionStoreError> {
        let mut records = self.records.write().expect("RwLock poisoned");
        Ok(records.remove(key).is_some())
    }

    async fn clear(&self) -> Result<(), DecisionStoreError> {
        let mut records = self.records.write().expect("RwLock poisoned");
        records.clear();
        Ok(())
    }
}
