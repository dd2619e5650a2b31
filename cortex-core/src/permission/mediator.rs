//! Permission request mediation.

use url::Url;

use super::decision::{Capability, DecisionRecord, PermissionDecision, PermissionKey};
use super::store::{DecisionStore, DecisionStoreError, MemoryDecisionStore};
use crate::events::{PermissionEvent, StatusSink};
use crate::origin::Origin;
use crate::secure_context::is_secure_context;

/// A user's answer to a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptChoice {
    /// Whether the user allowed the request.
    pub allowed: bool,

    /// Whether the decision should be remembered for the session.
    pub remember: bool,
}

impl PromptChoice {
    /// The user allowed the request.
    pub fn allow(remember: bool) -> Self {
        Self {
            allowed: true,
            remember,
        }
    }

    /// The user declined the request.
    pub fn deny(remember: bool) -> Self {
        Self {
            allowed: false,
            remember,
        }
    }

    /// The prompt was dismissed without an explicit choice.
    ///
    /// Resolves to a denial that is not remembered.
    pub fn dismissed() -> Self {
        Self {
            allowed: false,
            remember: false,
        }
    }
}

/// Obtains a user decision for a permission request.
///
/// Implementations block until the user answers: a modal dialog in the
/// browser shell, a console prompt, or a test stub returning fixed
/// values. A prompt dismissed without an explicit choice must be
/// reported with `allowed: false`.
pub trait PermissionPrompter: Send + Sync {
    /// Ask whether `origin_display` may use the requested capability.
    fn prompt(&self, origin_display: &str) -> PromptChoice;
}

/// Mediates sensitive capability requests from web content.
///
/// A request passes four gates in order: the capability must be
/// mediated at all, the requesting origin must be a secure context, a
/// remembered decision is replayed if one exists, and only then is the
/// user prompted. Decisions the user opts to remember are written back
/// to the store, denials included, so a declined site is not asked
/// again.
///
/// The mediator exclusively owns its store; `request` takes `&mut self`
/// so one request is fully resolved before the next can observe the
/// store.
///
/// # Example
///
/// ```rust
/// use cortex_core::permission::{
///     Capability, MemoryDecisionStore, PermissionDecision, PermissionMediator,
///     PermissionPrompter, PromptChoice,
/// };
///
/// struct Dismiss;
///
/// impl PermissionPrompter for Dismiss {
///     fn prompt(&self, _origin_display: &str) -> PromptChoice {
///         PromptChoice::dismissed()
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let mut mediator =
///     PermissionMediator::new(Dismiss).with_store(MemoryDecisionStore::new());
///
/// // A dismissed prompt resolves to a denial.
/// let decision = mediator
///     .request("https://example.com", Capability::Geolocation)
///     .await;
/// assert_eq!(decision, PermissionDecision::Denied);
/// # });
/// ```
pub struct PermissionMediator {
    store: Box<dyn DecisionStore>,
    prompter: Box<dyn PermissionPrompter>,
    status: Option<Box<dyn StatusSink>>,
}

impl PermissionMediator {
    /// Create a mediator with an in-memory store and the given prompter.
    pub fn new(prompter: impl PermissionPrompter + 'static) -> Self {
        Self {
            store: Box::new(MemoryDecisionStore::new()),
            prompter: Box::new(prompter),
            status: None,
        }
    }

    /// Replace the decision store.
    pub fn with_store(mut self, store: impl DecisionStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Attach a sink for observable notifications.
    pub fn with_status_sink(mut self, sink: impl StatusSink + 'static) -> Self {
        self.status = Some(Box::new(sink));
        self
    }

    /// Resolve a permission request to a decision.
    ///
    /// `origin` is the requesting origin exactly as the engine presented
    /// it; it is also the string a remembered decision is filed under.
    /// Never fails and never panics: malformed input resolves to
    /// [`PermissionDecision::Denied`].
    pub async fn request(&mut self, origin: &str, capability: Capability) -> PermissionDecision {
        if capability != Capability::Geolocation {
            self.emit(PermissionEvent::UnreviewedCapability {
                origin: origin.to_string(),
                capability,
            });
            return PermissionDecision::Denied;
        }

        let url = match Url::parse(origin) {
            Ok(url) => url,
            Err(_) => {
                self.emit(PermissionEvent::BlockedInsecureOrigin {
                    origin: origin.to_string(),
                });
                return PermissionDecision::Denied;
            }
        };

        if !is_secure_context(&url) {
            self.emit(PermissionEvent::BlockedInsecureOrigin {
                origin: origin.to_string(),
            });
            return PermissionDecision::Denied;
        }

        let key = PermissionKey::new(origin, capability);
        match self.store.load(&key).await {
            Ok(Some(record)) => {
                self.emit(PermissionEvent::DecisionReplayed {
                    origin: origin.to_string(),
                    decision: record.decision,
                });
                return record.decision;
            }
            Ok(None) => {}
            Err(e) => {
                // A broken store must not block the request; treat the
                // lookup as a miss and fall through to the prompt.
                log::warn!("failed to load remembered decision for {}: {}", origin, e);
            }
        }

        let display = Origin::from_url(&url).to_string();
        let choice = self.prompter.prompt(&display);
        let decision = if choice.allowed {
            PermissionDecision::Granted
        } else {
            PermissionDecision::Denied
        };

        if choice.remember {
            let record = DecisionRecord::new(origin, capability, decision);
            if let Err(e) = self.store.save(record).await {
                log::warn!("failed to remember decision for {}: {}", origin, e);
            }
        }

        self.emit(PermissionEvent::DecisionPrompted {
            origin: origin.to_string(),
            decision,
            remembered: choice.remember,
        });

        decision
    }

    /// Remembered decisions currently held by the store.
    pub async fn remembered(&self) -> Result<Vec<DecisionRecord>, DecisionStoreError> {
        self.store.load_all().await
    }

    /// Forget the remembered decision for one key.
    ///
    /// Returns `true` if a decision was removed.
    pub async fn forget(&self, key: &PermissionKey) -> Result<bool, DecisionStoreError> {
        self.store.delete(key).await
    }

    /// Forget every remembered decision.
    pub async fn clear(&self) -> Result<(), DecisionStoreError> {
        self.store.clear().await
    }

    fn emit(&self, event: PermissionEvent) {
        if let Some(sink) = &self.status {
            sink.notify(&event);
        }
    }
}
