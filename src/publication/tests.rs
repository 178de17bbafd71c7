use std::sync::Arc;

use super::gate::{generate_token, ActivationFailure, PublicationGate};
use crate::event::model::Event;
use crate::store::MemoryRecordStore;

fn pending_event(uid: i64, hash: &str) -> Event {
    let mut event = Event::new(uid, 10, format!("Event {uid}"));
    event.hidden = true;
    event.publication_hash = hash.to_string();
    event
}

fn gate_with(events: Vec<Event>) -> (PublicationGate, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    for event in events {
        store.insert_event(event);
    }
    (PublicationGate::new(store.clone()), store)
}

#[tokio::test]
async fn test_activate_empty_token_fails() {
    let (gate, _) = gate_with(vec![pending_event(1, "123456ABC")]);
    assert!(matches!(
        gate.activate("").await,
        Err(ActivationFailure::EmptyToken)
    ));
}

#[tokio::test]
async fn test_activate_publishes_hidden_event_once() {
    let (gate, store) = gate_with(vec![pending_event(1, "123456ABC")]);

    assert!(gate.activate("123456ABC").await.is_ok());

    let event = store.event(1).unwrap();
    assert!(!event.hidden);
    assert_eq!(event.publication_hash, "");

    assert!(matches!(
        gate.activate("123456ABC").await,
        Err(ActivationFailure::UnknownToken)
    ));
}

#[tokio::test]
async fn test_activate_unknown_token_fails() {
    let (gate, store) = gate_with(vec![pending_event(1, "123456ABC")]);

    assert!(matches!(
        gate.activate("654321CBA").await,
        Err(ActivationFailure::UnknownToken)
    ));
    assert!(store.event(1).unwrap().hidden);
}

#[tokio::test]
async fn test_activate_is_case_sensitive() {
    let (gate, store) = gate_with(vec![pending_event(1, "123456ABC")]);

    assert!(gate.activate("123456abc").await.is_err());
    assert!(store.event(1).unwrap().hidden);
}

#[tokio::test]
async fn test_activate_visible_event_fails() {
    let mut visible = pending_event(1, "123456ABC");
    visible.hidden = false;
    let (gate, store) = gate_with(vec![visible]);

    assert!(matches!(
        gate.activate("123456ABC").await,
        Err(ActivationFailure::AlreadyPublished)
    ));
    assert_eq!(store.event(1).unwrap().publication_hash, "123456ABC");
}

#[tokio::test]
async fn test_activate_ambiguous_token_fails() {
    let (gate, store) = gate_with(vec![
        pending_event(1, "123456ABC"),
        pending_event(2, "123456ABC"),
    ]);

    assert!(matches!(
        gate.activate("123456ABC").await,
        Err(ActivationFailure::AmbiguousToken(2))
    ));
    assert!(store.event(1).unwrap().hidden);
    assert!(store.event(2).unwrap().hidden);
}

#[tokio::test]
async fn test_activate_leaves_other_events_alone() {
    let (gate, store) = gate_with(vec![
        pending_event(1, "123456ABC"),
        pending_event(2, "ZZZ"),
    ]);

    gate.activate("123456ABC").await.unwrap();

    let other = store.event(2).unwrap();
    assert!(other.hidden);
    assert_eq!(other.publication_hash, "ZZZ");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_activations_succeed_once() {
    let (gate, store) = gate_with(vec![pending_event(1, "123456ABC")]);

    let attempts: Vec<_> = (0..8)
        .map(|_| {
            let gate = gate.clone();
            tokio::spawn(async move { gate.activate("123456ABC").await.is_ok() })
        })
        .collect();

    let mut successes = 0;
    for attempt in attempts {
        if attempt.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert!(!store.event(1).unwrap().hidden);
}

#[test]
fn test_generate_token_format() {
    let token = generate_token();
    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_ne!(token, generate_token());
}
