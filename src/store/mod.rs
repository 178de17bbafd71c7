//! Record storage.
//!
//! - `memory` - in-process tables behind a lock, used by tests and demos
//! - `postgres` - sqlx backed store for the server

mod memory;
mod postgres;

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::category::model::Category;
use crate::event::model::{Event, Folder};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// A record whose stored publication hash matched a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationCandidate {
    pub uid: i64,
    pub hidden: bool,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn find_folders(&self) -> Result<Vec<Folder>, StoreError>;

    /// Events that are neither hidden nor canceled, with their category uids.
    async fn find_visible_events(&self) -> Result<Vec<Event>, StoreError>;

    async fn find_categories(&self, uids: &[i64]) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, uid: i64) -> Result<Option<Category>, StoreError>;

    /// All events whose publication hash equals `hash` exactly.
    async fn find_by_publication_hash(
        &self,
        hash: &str,
    ) -> Result<Vec<PublicationCandidate>, StoreError>;

    /// Make the event visible and clear its hash, but only while it is still
    /// hidden and still carries `hash`. Returns whether the write applied.
    async fn publish(&self, uid: i64, hash: &str) -> Result<bool, StoreError>;
}
