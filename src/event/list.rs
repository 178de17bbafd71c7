//! The event list, optionally narrowed to one category.

use chrono::{DateTime, Utc};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::filter::EventFilter;
use super::load_scope;
use super::model::{Event, TimeFrame};
use crate::category::model::Category;
use crate::html::escape_html;
use crate::i18n::{
    LABEL_CATEGORIES, LABEL_DATE, LABEL_TITLE, MESSAGE_NO_RESULTS, MESSAGE_WILL_BE_ANNOUNCED,
};
use crate::store::RecordStore;
use crate::template::{Markers, EVENT_LIST, EVENT_LIST_ITEM};
use crate::view::{parse_uid, ListSettings, ViewContext, ViewError};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct EventListView {
    store: Arc<dyn RecordStore>,
    context: Arc<ViewContext>,
    settings: ListSettings,
}

impl EventListView {
    pub fn new(
        store: Arc<dyn RecordStore>,
        context: Arc<ViewContext>,
        settings: ListSettings,
    ) -> Self {
        Self {
            store,
            context,
            settings,
        }
    }

    /// Matching events sorted by begin date, undated events last.
    pub async fn events(
        &self,
        category: Option<i64>,
        time_frame: TimeFrame,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, ViewError> {
        let scope = load_scope(
            self.store.as_ref(),
            &self.settings.pages,
            self.settings.recursive,
        )
        .await?;
        let filter = EventFilter::new(&scope, time_frame).with_category(category);
        let mut events = filter.apply(self.store.find_visible_events().await?, now);
        events.sort_by_key(|event| (event.begin.is_none(), event.begin, event.uid));
        Ok(events)
    }

    /// Render the list. A `category` that is not a valid uid matches nothing.
    pub async fn render(
        &self,
        category: Option<&str>,
        time_frame: Option<TimeFrame>,
        now: DateTime<Utc>,
    ) -> Result<String, ViewError> {
        let category = match category.map(parse_uid) {
            Some(None) => return Ok(self.context.message(MESSAGE_NO_RESULTS)?),
            Some(uid) => uid,
            None => None,
        };
        let time_frame = time_frame.unwrap_or(self.settings.time_frame);

        let events = self.events(category, time_frame, now).await?;
        if events.is_empty() {
            return Ok(self.context.message(MESSAGE_NO_RESULTS)?);
        }

        let categories = self.categories_of(&events).await?;

        let mut rows = String::new();
        for event in &events {
            let event_categories: Vec<Category> = event
                .categories
                .iter()
                .filter_map(|uid| categories.get(uid).cloned())
                .collect();

            let mut markers = Markers::new();
            markers.insert("TITLE", escape_html(&event.title));
            markers.insert("DATE", escape_html(&self.date_range(event)));
            markers.insert(
                "CATEGORIES",
                self.context
                    .renderer
                    .render(&event_categories, self.settings.display_mode),
            );
            rows.push_str(&self.context.templates.render(EVENT_LIST_ITEM, &markers)?);
        }

        let translator = &self.context.translator;
        let mut markers = Markers::new();
        markers.insert("LABEL_TITLE", escape_html(&translator.translate(LABEL_TITLE)));
        markers.insert("LABEL_DATE", escape_html(&translator.translate(LABEL_DATE)));
        markers.insert(
            "LABEL_CATEGORIES",
            escape_html(&translator.translate(LABEL_CATEGORIES)),
        );
        markers.insert("ROWS", rows);
        Ok(self.context.templates.render(EVENT_LIST, &markers)?)
    }

    async fn categories_of(&self, events: &[Event]) -> Result<HashMap<i64, Category>, ViewError> {
        let uids: BTreeSet<i64> = events
            .iter()
            .flat_map(|event| event.categories.iter().copied())
            .collect();
        let uids: Vec<i64> = uids.into_iter().collect();

        Ok(self
            .store
            .find_categories(&uids)
            .await?
            .into_iter()
            .map(|category| (category.uid, category))
            .collect())
    }

    fn date_range(&self, event: &Event) -> String {
        let Some(begin) = event.begin else {
            return self.context.translator.translate(MESSAGE_WILL_BE_ANNOUNCED);
        };
        let end = event.end.unwrap_or(begin);

        if begin.date_naive() == end.date_naive() {
            begin.format(DATE_FORMAT).to_string()
        } else {
            format!("{} - {}", begin.format(DATE_FORMAT), end.format(DATE_FORMAT))
        }
    }
}
