//! The category list: every category used by the events currently on show.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::{sort_by_title, Category};
use crate::event::filter::EventFilter;
use crate::event::load_scope;
use crate::event::model::TimeFrame;
use crate::html;
use crate::i18n::LABEL_NO_CATEGORIES;
use crate::store::RecordStore;
use crate::template::{Markers, CATEGORY_LIST, CATEGORY_LIST_ITEM};
use crate::view::{ListSettings, ViewContext, ViewError};

pub struct CategoryListView {
    store: Arc<dyn RecordStore>,
    context: Arc<ViewContext>,
    settings: ListSettings,
}

#[derive(Default)]
pub struct CategoryListViewBuilder {
    store: Option<Arc<dyn RecordStore>>,
    context: Option<Arc<ViewContext>>,
    settings: ListSettings,
}

impl CategoryListViewBuilder {
    pub fn store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn context(mut self, context: Arc<ViewContext>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn settings(mut self, settings: ListSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Result<CategoryListView, ViewError> {
        Ok(CategoryListView {
            store: self
                .store
                .ok_or(ViewError::MissingCollaborator("record store"))?,
            context: self
                .context
                .ok_or(ViewError::MissingCollaborator("view context"))?,
            settings: self.settings,
        })
    }
}

impl CategoryListView {
    pub fn builder() -> CategoryListViewBuilder {
        CategoryListViewBuilder::default()
    }

    pub fn settings(&self) -> &ListSettings {
        &self.settings
    }

    /// Categories of all matching events, deduplicated and sorted by title.
    pub async fn categories(
        &self,
        time_frame: TimeFrame,
        now: DateTime<Utc>,
    ) -> Result<Vec<Category>, ViewError> {
        let scope = load_scope(
            self.store.as_ref(),
            &self.settings.pages,
            self.settings.recursive,
        )
        .await?;
        let filter = EventFilter::new(&scope, time_frame);
        let events = filter.apply(self.store.find_visible_events().await?, now);

        let uids: BTreeSet<i64> = events
            .iter()
            .flat_map(|event| event.categories.iter().copied())
            .collect();
        let uids: Vec<i64> = uids.into_iter().collect();

        let mut categories = self.store.find_categories(&uids).await?;
        sort_by_title(&mut categories);
        Ok(categories)
    }

    /// Render the list, or the "no categories" message when nothing matches.
    pub async fn render(
        &self,
        time_frame: Option<TimeFrame>,
        now: DateTime<Utc>,
    ) -> Result<String, ViewError> {
        let time_frame = time_frame.unwrap_or(self.settings.time_frame);
        let categories = self.categories(time_frame, now).await?;

        if categories.is_empty() {
            return Ok(self.context.message(LABEL_NO_CATEGORIES)?);
        }

        let mut items = String::new();
        for category in &categories {
            let mut markers = Markers::new();
            markers.insert("CATEGORY", self.render_category(category));
            items.push_str(&self.context.templates.render(CATEGORY_LIST_ITEM, &markers)?);
        }

        let mut markers = Markers::new();
        markers.insert("ITEMS", items);
        Ok(self.context.templates.render(CATEGORY_LIST, &markers)?)
    }

    fn render_category(&self, category: &Category) -> String {
        let rendered = self
            .context
            .renderer
            .render(std::slice::from_ref(category), self.settings.display_mode);

        match self.settings.list_page_id {
            Some(page_id) => {
                let href = self.context.links.category_link(page_id, category.uid);
                html::link(&href, &rendered)
            }
            None => rendered,
        }
    }
}
