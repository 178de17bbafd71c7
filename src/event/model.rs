use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::scope::Scoped;

/// Lifecycle status as stored in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Planned,
    Canceled,
    Confirmed,
}

impl EventStatus {
    pub fn from_code(code: i16) -> Self {
        match code {
            1 => EventStatus::Canceled,
            2 => EventStatus::Confirmed,
            _ => EventStatus::Planned,
        }
    }

    pub fn code(self) -> i16 {
        match self {
            EventStatus::Planned => 0,
            EventStatus::Canceled => 1,
            EventStatus::Confirmed => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub uid: i64,
    /// Storage folder containing the record.
    pub pid: i64,
    pub title: String,
    pub begin: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub hidden: bool,
    /// Secret; never serialized and absent from the OpenAPI schema.
    #[serde(skip)]
    pub publication_hash: String,
    /// Category uids in display order.
    pub categories: Vec<i64>,
}

impl Event {
    pub fn new(uid: i64, pid: i64, title: impl Into<String>) -> Self {
        Self {
            uid,
            pid,
            title: title.into(),
            begin: None,
            end: None,
            status: EventStatus::Planned,
            hidden: false,
            publication_hash: String::new(),
            categories: Vec::new(),
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.status == EventStatus::Canceled
    }

    pub fn has_category(&self, category_uid: i64) -> bool {
        self.categories.contains(&category_uid)
    }
}

impl Scoped for Event {
    fn folder_id(&self) -> i64 {
        self.pid
    }
}

/// A storage folder. `pid` 0 means the folder sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub uid: i64,
    pub pid: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TimeFrame {
    Past,
    PastAndCurrent,
    Current,
    #[default]
    CurrentAndUpcoming,
    Upcoming,
    All,
}

impl TimeFrame {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "past" => Some(TimeFrame::Past),
            "pastAndCurrent" => Some(TimeFrame::PastAndCurrent),
            "current" => Some(TimeFrame::Current),
            "currentAndUpcoming" => Some(TimeFrame::CurrentAndUpcoming),
            "upcoming" => Some(TimeFrame::Upcoming),
            "all" => Some(TimeFrame::All),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeFrame::Past => "past",
            TimeFrame::PastAndCurrent => "pastAndCurrent",
            TimeFrame::Current => "current",
            TimeFrame::CurrentAndUpcoming => "currentAndUpcoming",
            TimeFrame::Upcoming => "upcoming",
            TimeFrame::All => "all",
        }
    }

    /// Whether `event` falls into this time frame at `now`. An event without
    /// an end date ends when it begins; undated events count as upcoming.
    pub fn matches(self, event: &Event, now: DateTime<Utc>) -> bool {
        let Some(begin) = event.begin else {
            return matches!(
                self,
                TimeFrame::Upcoming | TimeFrame::CurrentAndUpcoming | TimeFrame::All
            );
        };
        let end = event.end.unwrap_or(begin);

        match self {
            TimeFrame::Past => end < now,
            TimeFrame::PastAndCurrent => begin <= now,
            TimeFrame::Current => begin <= now && end >= now,
            TimeFrame::CurrentAndUpcoming => end >= now || begin >= now,
            TimeFrame::Upcoming => begin > now,
            TimeFrame::All => true,
        }
    }
}
