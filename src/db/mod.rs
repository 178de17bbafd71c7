//! Application state shared by the request handlers.

use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::category::list::CategoryListView;
use crate::config::AppConfig;
use crate::event::list::EventListView;
use crate::event::model::TimeFrame;
use crate::publication::PublicationGate;
use crate::store::{PgRecordStore, RecordStore};
use crate::view::{ListSettings, ViewContext, ViewError};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub context: Arc<ViewContext>,
    pub settings: ListSettings,
    pub category_list: Arc<CategoryListView>,
    pub event_list: Arc<EventListView>,
    pub publication_gate: PublicationGate,
    /// Rendered category lists keyed by generation and time frame.
    pub category_list_cache: Cache<String, String>,
    /// Bumped on every publication. Lists rendered under an older
    /// generation are never looked up again.
    category_list_generation: Arc<AtomicU64>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let database_url = config
            .database_url
            .as_deref()
            .ok_or("SEMINARS_DATABASE_URL must be set")?;

        let store = PgRecordStore::connect(database_url).await?;
        store.migrate().await?;
        log::info!("Connected to database and applied migrations");

        Ok(Self::with_store(Arc::new(store), config)?)
    }

    pub fn with_store(store: Arc<dyn RecordStore>, config: &AppConfig) -> Result<Self, ViewError> {
        let context = Arc::new(ViewContext::from_config(config));
        let settings = ListSettings::from_config(config);

        let category_list = CategoryListView::builder()
            .store(store.clone())
            .context(context.clone())
            .settings(settings.clone())
            .build()?;

        let event_list = EventListView::new(store.clone(), context.clone(), settings.clone());

        let category_list_cache = Cache::builder()
            .time_to_live(config.cache_ttl)
            .max_capacity(16)
            .build();

        Ok(AppState {
            publication_gate: PublicationGate::new(store.clone()),
            store,
            context,
            settings,
            category_list: Arc::new(category_list),
            event_list: Arc::new(event_list),
            category_list_cache,
            category_list_generation: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Cache key for the category list in `time_frame`. Read it before
    /// rendering and insert under the same key.
    pub fn category_list_key(&self, time_frame: TimeFrame) -> String {
        format!(
            "{}:{}",
            self.category_list_generation.load(Ordering::Acquire),
            time_frame.as_str()
        )
    }

    /// Drop every cached category list. Must run after the store write that
    /// changed which events are visible.
    pub fn invalidate_category_lists(&self) {
        self.category_list_generation.fetch_add(1, Ordering::AcqRel);
        self.category_list_cache.invalidate_all();
    }
}
