#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

use seminars_frontend::category::model::Category;
use seminars_frontend::event::model::{Event, EventStatus, Folder};
use seminars_frontend::store::MemoryRecordStore;
use seminars_frontend::AppConfig;

pub const PENDING_HASH: &str = "123456ABC";
pub const PENDING_EVENT: i64 = 15;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn event(uid: i64, pid: i64, begin: DateTime<Utc>, days: i64, categories: &[i64]) -> Event {
    let mut event = Event::new(uid, pid, format!("Event {uid}"));
    event.begin = Some(begin);
    event.end = Some(begin + Duration::days(days));
    event.status = EventStatus::Confirmed;
    event.categories = categories.to_vec();
    event
}

/// Folder 1 holds folder 2; folder 3 stands alone.
///
/// | event | folder | when     | categories | notes                |
/// |-------|--------|----------|------------|----------------------|
/// | 10    | 1      | upcoming | 1, 2       |                      |
/// | 11    | 2      | current  | 3          |                      |
/// | 12    | 3      | upcoming | 4          | other folder         |
/// | 13    | 1      | past     | 5          |                      |
/// | 14    | 1      | upcoming | 4          | canceled             |
/// | 15    | 1      | upcoming | 4          | hidden, pending hash |
/// | 16    | 1      | undated  |            | planned              |
pub fn seeded_store(now: DateTime<Utc>) -> Arc<MemoryRecordStore> {
    let store = Arc::new(MemoryRecordStore::new());

    store.insert_folder(Folder { uid: 1, pid: 0 });
    store.insert_folder(Folder { uid: 2, pid: 1 });
    store.insert_folder(Folder { uid: 3, pid: 0 });

    store.insert_category(Category::new(1, "category B").with_icon("b.gif"));
    store.insert_category(Category::new(2, "category A").with_icon("a.gif"));
    store.insert_category(Category::new(3, "Tom & Jerry"));
    store.insert_category(Category::new(4, "unused"));
    store.insert_category(Category::new(5, "past only"));

    store.insert_event(event(10, 1, now + Duration::days(10), 1, &[1, 2]));
    store.insert_event(event(11, 2, now - Duration::days(1), 2, &[3]));
    store.insert_event(event(12, 3, now + Duration::days(5), 0, &[4]));
    store.insert_event(event(13, 1, now - Duration::days(30), 1, &[5]));

    let mut canceled = event(14, 1, now + Duration::days(3), 0, &[4]);
    canceled.status = EventStatus::Canceled;
    store.insert_event(canceled);

    let mut pending = event(PENDING_EVENT, 1, now + Duration::days(20), 0, &[4]);
    pending.hidden = true;
    pending.publication_hash = PENDING_HASH.to_string();
    store.insert_event(pending);

    let mut undated = Event::new(16, 1, "Date & time to be announced");
    undated.status = EventStatus::Planned;
    store.insert_event(undated);

    store
}

pub fn config_for_folder_one(recursive: bool) -> AppConfig {
    AppConfig {
        pages: vec![1],
        recursive,
        ..AppConfig::default()
    }
}
