//! End-to-end tests for the permission pipeline: classification, the
//! decision store, the prompt collaborator, and the status sink working
//! together through a `PermissionMediator`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cortex_core::{
    Capability, MemoryDecisionStore, PermissionDecision, PermissionEvent, PermissionMediator,
    PermissionPrompter, PromptChoice, StatusSink,
};

/// Prompter stub returning queued choices and counting invocations.
#[derive(Clone)]
struct QueuedPrompter {
    choices: Arc<Mutex<Vec<PromptChoice>>>,
    calls: Arc<AtomicUsize>,
}

impl QueuedPrompter {
    fn new(choices: Vec<PromptChoice>) -> Self {
        Self {
            choices: Arc::new(Mutex::new(choices)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PermissionPrompter for QueuedPrompter {
    fn prompt(&self, _origin_display: &str) -> PromptChoice {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut choices = self.choices.lock().unwrap();
        if choices.is_empty() {
            PromptChoice::dismissed()
        } else {
            choices.remove(0)
        }
    }
}

#[derive(Clone, Default)]
struct CollectingSink {
    events: Arc<Mutex<Vec<PermissionEvent>>>,
}

impl CollectingSink {
    fn events(&self) -> Vec<PermissionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl StatusSink for CollectingSink {
    fn notify(&self, event: &PermissionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

#[tokio::test]
async fn grant_remember_replay_flow() {
    let prompter = QueuedPrompter::new(vec![PromptChoice::allow(true)]);
    let sink = CollectingSink::default();
    let mut mediator = PermissionMediator::new(prompter.clone())
        .with_store(MemoryDecisionStore::new())
        .with_status_sink(sink.clone());

    let first = mediator
        .request("https://maps.example.com", Capability::Geolocation)
        .await;
    let second = mediator
        .request("https://maps.example.com", Capability::Geolocation)
        .await;

    assert_eq!(first, PermissionDecision::Granted);
    assert_eq!(second, PermissionDecision::Granted);
    assert_eq!(prompter.calls(), 1);

    assert_eq!(
        sink.events(),
        vec![
            PermissionEvent::DecisionPrompted {
                origin: "https://maps.example.com".to_string(),
                decision: PermissionDecision::Granted,
                remembered: true,
            },
            PermissionEvent::DecisionReplayed {
                origin: "https://maps.example.com".to_string(),
                decision: PermissionDecision::Granted,
            },
        ]
    );
}

#[tokio::test]
async fn policy_refusals_are_distinguishable_from_user_denials() {
    let prompter = QueuedPrompter::new(vec![PromptChoice::deny(false)]);
    let sink = CollectingSink::default();
    let mut mediator = PermissionMediator::new(prompter.clone()).with_status_sink(sink.clone());

    // Policy refusal: unreviewed capability.
    mediator.request("https://a.test", Capability::Other).await;
    // Policy refusal: insecure context.
    mediator.request("http://b.test", Capability::Geolocation).await;
    // User denial after a prompt.
    mediator.request("https://c.test", Capability::Geolocation).await;

    assert_eq!(prompter.calls(), 1);
    assert_eq!(
        sink.events(),
        vec![
            PermissionEvent::UnreviewedCapability {
                origin: "https://a.test".to_string(),
                capability: Capability::Other,
            },
            PermissionEvent::BlockedInsecureOrigin {
                origin: "http://b.test".to_string(),
            },
            PermissionEvent::DecisionPrompted {
                origin: "https://c.test".to_string(),
                decision: PermissionDecision::Denied,
                remembered: false,
            },
        ]
    );
}

#[tokio::test]
async fn remembered_decisions_key_on_the_exact_origin_string() {
    // Two spellings of the same origin do not share a remembered
    // decision.
    let prompter = QueuedPrompter::new(vec![PromptChoice::allow(true), PromptChoice::deny(true)]);
    let mut mediator = PermissionMediator::new(prompter.clone());

    let bare = mediator
        .request("https://example.com", Capability::Geolocation)
        .await;
    let slash = mediator
        .request("https://example.com/", Capability::Geolocation)
        .await;

    assert_eq!(bare, PermissionDecision::Granted);
    assert_eq!(slash, PermissionDecision::Denied);
    assert_eq!(prompter.calls(), 2);
    assert_eq!(mediator.remembered().await.unwrap().len(), 2);
}

#[tokio::test]
async fn wrapper_scheme_origins_inherit_their_payload_verdict() {
    let prompter = QueuedPrompter::new(vec![PromptChoice::allow(false), PromptChoice::allow(false)]);
    let mut mediator = PermissionMediator::new(prompter.clone());

    let secure_blob = mediator
        .request("blob:https://example.com/id", Capability::Geolocation)
        .await;
    let insecure_blob = mediator
        .request("blob:http://example.com/id", Capability::Geolocation)
        .await;

    assert_eq!(secure_blob, PermissionDecision::Granted);
    assert_eq!(insecure_blob, PermissionDecision::Denied);
    // Only the secure blob origin reached the prompt.
    assert_eq!(prompter.calls(), 1);
}

#[tokio::test]
async fn insecure_origins_never_reach_the_store() {
    let prompter = QueuedPrompter::new(vec![]);
    let mut mediator = PermissionMediator::new(prompter);

    for origin in [
        "http://example.com",
        "http://192.168.1.10",
        "ftp://example.com",
        "blob:http://example.com/id",
        "not a url",
    ] {
        let decision = mediator.request(origin, Capability::Geolocation).await;
        assert_eq!(decision, PermissionDecision::Denied, "for {}", origin);
    }

    assert!(mediator.remembered().await.unwrap().is_empty());
}
