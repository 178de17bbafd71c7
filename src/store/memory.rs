use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use super::{PublicationCandidate, RecordStore, StoreError};
use crate::category::model::Category;
use crate::event::model::{Event, Folder};

#[derive(Default)]
struct Tables {
    folders: BTreeMap<i64, Folder>,
    events: BTreeMap<i64, Event>,
    categories: BTreeMap<i64, Category>,
}

/// Record store kept in memory.
#[derive(Default)]
pub struct MemoryRecordStore {
    tables: RwLock<Tables>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_folder(&self, folder: Folder) {
        self.tables.write().folders.insert(folder.uid, folder);
    }

    pub fn insert_event(&self, event: Event) {
        self.tables.write().events.insert(event.uid, event);
    }

    pub fn insert_category(&self, category: Category) {
        self.tables.write().categories.insert(category.uid, category);
    }

    pub fn event(&self, uid: i64) -> Option<Event> {
        self.tables.read().events.get(&uid).cloned()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn find_folders(&self) -> Result<Vec<Folder>, StoreError> {
        Ok(self.tables.read().folders.values().copied().collect())
    }

    async fn find_visible_events(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self
            .tables
            .read()
            .events
            .values()
            .filter(|event| !event.hidden && !event.is_canceled())
            .cloned()
            .collect())
    }

    async fn find_categories(&self, uids: &[i64]) -> Result<Vec<Category>, StoreError> {
        let tables = self.tables.read();
        Ok(uids
            .iter()
            .filter_map(|uid| tables.categories.get(uid).cloned())
            .collect())
    }

    async fn find_category(&self, uid: i64) -> Result<Option<Category>, StoreError> {
        Ok(self.tables.read().categories.get(&uid).cloned())
    }

    async fn find_by_publication_hash(
        &self,
        hash: &str,
    ) -> Result<Vec<PublicationCandidate>, StoreError> {
        Ok(self
            .tables
            .read()
            .events
            .values()
            .filter(|event| event.publication_hash == hash)
            .map(|event| PublicationCandidate {
                uid: event.uid,
                hidden: event.hidden,
            })
            .collect())
    }

    async fn publish(&self, uid: i64, hash: &str) -> Result<bool, StoreError> {
        let mut tables = self.tables.write();
        match tables.events.get_mut(&uid) {
            Some(event) if event.hidden && event.publication_hash == hash => {
                event.hidden = false;
                event.publication_hash.clear();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
