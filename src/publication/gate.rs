use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::store::{RecordStore, StoreError};

/// Why an activation did not happen. Only ever shown to users as a single
/// generic failure message.
#[derive(Debug, Error)]
pub enum ActivationFailure {
    #[error("no publication token was submitted")]
    EmptyToken,
    #[error("no record carries the submitted token")]
    UnknownToken,
    #[error("{0} records carry the submitted token")]
    AmbiguousToken(usize),
    #[error("the record is already published")]
    AlreadyPublished,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A new publication token: 32 lowercase hex characters.
pub fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Turns a pending record (hidden, with a token) into a published one
/// (visible, no token). Each token activates at most once.
#[derive(Clone)]
pub struct PublicationGate {
    store: Arc<dyn RecordStore>,
}

impl PublicationGate {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn activate(&self, submitted_token: &str) -> Result<(), ActivationFailure> {
        if submitted_token.is_empty() {
            return Err(ActivationFailure::EmptyToken);
        }

        let candidates = self.store.find_by_publication_hash(submitted_token).await?;
        let candidate = match candidates.as_slice() {
            [] => return Err(ActivationFailure::UnknownToken),
            [candidate] => *candidate,
            many => return Err(ActivationFailure::AmbiguousToken(many.len())),
        };

        if !candidate.hidden {
            return Err(ActivationFailure::AlreadyPublished);
        }

        // The write re-checks hidden + token, so a concurrent activation
        // that got there first makes this one fail.
        if self.store.publish(candidate.uid, submitted_token).await? {
            log::info!("Published event {}", candidate.uid);
            Ok(())
        } else {
            Err(ActivationFailure::AlreadyPublished)
        }
    }
}
