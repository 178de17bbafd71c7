use chrono::{DateTime, Utc};

use super::model::{Event, TimeFrame};
use super::scope::RecordScope;

/// Criteria for the events shown by the list views.
pub struct EventFilter<'a> {
    pub scope: &'a dyn RecordScope,
    pub time_frame: TimeFrame,
    pub category: Option<i64>,
}

impl<'a> EventFilter<'a> {
    pub fn new(scope: &'a dyn RecordScope, time_frame: TimeFrame) -> Self {
        Self {
            scope,
            time_frame,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Option<i64>) -> Self {
        self.category = category;
        self
    }

    pub fn matches(&self, event: &Event, now: DateTime<Utc>) -> bool {
        !event.hidden
            && !event.is_canceled()
            && self.scope.matches(event)
            && self.time_frame.matches(event, now)
            && self.category.map_or(true, |uid| event.has_category(uid))
    }

    pub fn apply(&self, events: Vec<Event>, now: DateTime<Utc>) -> Vec<Event> {
        events
            .into_iter()
            .filter(|event| self.matches(event, now))
            .collect()
    }
}
