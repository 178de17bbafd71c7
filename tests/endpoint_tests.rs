//! HTTP endpoints served against the in-memory store.

mod common;

use actix_web::{http::StatusCode, test, web, App};
use chrono::Utc;

use common::{config_for_folder_one, seeded_store, PENDING_EVENT, PENDING_HASH};
use seminars_frontend::event::model::TimeFrame;
use seminars_frontend::{routes, AppConfig, AppState};

fn state(config: &AppConfig) -> (AppState, std::sync::Arc<seminars_frontend::store::MemoryRecordStore>) {
    let store = seeded_store(Utc::now());
    let state = AppState::with_store(store.clone(), config).expect("state should build");
    (state, store)
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, String) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(web::scope("/api").configure(routes)),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[actix_web::test]
async fn test_category_list_endpoint() {
    let (state, _) = state(&config_for_folder_one(true));

    let (status, body) = get(&state, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("category A"));
    assert!(body.contains("Tom &amp; Jerry"));
    assert!(!body.contains("unused"));
}

#[actix_web::test]
async fn test_category_list_endpoint_ignores_unknown_time_frame() {
    let (state, _) = state(&config_for_folder_one(true));

    let (status, body) = get(&state, "/api/categories?timeFrame=someday").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("category A"));
}

#[actix_web::test]
async fn test_category_list_endpoint_past() {
    let (state, _) = state(&config_for_folder_one(true));

    let (status, body) = get(&state, "/api/categories?timeFrame=past").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("past only"));
    assert!(!body.contains("category A"));
}

#[actix_web::test]
async fn test_single_category_endpoint() {
    let (state, _) = state(&AppConfig::default());

    let (status, body) = get(&state, "/api/categories/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Tom &amp; Jerry");
}

#[actix_web::test]
async fn test_single_category_endpoint_normalizes_bad_ids_to_not_found() {
    let (state, _) = state(&AppConfig::default());

    for uri in ["/api/categories/9999", "/api/categories/foo", "/api/categories/0", "/api/categories/-1"] {
        let (status, body) = get(&state, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("The requested category does not exist."), "{uri}");
    }
}

#[actix_web::test]
async fn test_event_list_endpoint() {
    let (state, _) = state(&config_for_folder_one(true));

    let (status, body) = get(&state, "/api/events").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Event 10"));
    assert!(body.contains("Event 11"));
    assert!(!body.contains("Event 13"), "past event");
    assert!(!body.contains("Event 14"), "canceled event");
    assert!(!body.contains("Event 15"), "hidden event");
    assert!(body.contains("category B, category A"));
    assert!(body.contains("Date &amp; time to be announced"));
    assert!(body.contains("will be announced"));

    let current = body.find("Event 11").unwrap();
    let upcoming = body.find("Event 10").unwrap();
    let undated = body.find("Date &amp; time").unwrap();
    assert!(current < upcoming && upcoming < undated);
}

#[actix_web::test]
async fn test_event_list_endpoint_by_category() {
    let (state, _) = state(&config_for_folder_one(true));

    let (status, body) = get(&state, "/api/events?category=3").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Event 11"));
    assert!(!body.contains("Event 10"));
}

#[actix_web::test]
async fn test_event_list_endpoint_with_invalid_category() {
    let (state, _) = state(&config_for_folder_one(true));

    let (status, body) = get(&state, "/api/events?category=foo").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("There are no events that match your criteria."));
}

#[actix_web::test]
async fn test_publish_endpoint_publishes_once() {
    let (state, store) = state(&config_for_folder_one(true));

    let (status, body) = get(&state, &format!("/api/publish?hash={PENDING_HASH}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The event has been published successfully."));

    let event = store.event(PENDING_EVENT).unwrap();
    assert!(!event.hidden);
    assert!(event.publication_hash.is_empty());

    let (status, body) = get(&state, &format!("/api/publish?hash={PENDING_HASH}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("could not be published"));
}

#[actix_web::test]
async fn test_publish_endpoint_failures_share_one_message() {
    let (state, _) = state(&config_for_folder_one(true));

    let (missing_status, missing) = get(&state, "/api/publish").await;
    let (empty_status, empty) = get(&state, "/api/publish?hash=").await;
    let (unknown_status, unknown) = get(&state, "/api/publish?hash=nope").await;

    assert_eq!(missing_status, StatusCode::BAD_REQUEST);
    assert_eq!(empty_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(missing, empty);
    assert_eq!(empty, unknown);
}

#[actix_web::test]
async fn test_publish_refreshes_cached_category_list() {
    let (state, _) = state(&config_for_folder_one(true));

    let (_, before) = get(&state, "/api/categories").await;
    assert!(!before.contains("unused"));

    let (status, _) = get(&state, &format!("/api/publish?hash={PENDING_HASH}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = get(&state, "/api/categories").await;
    assert!(after.contains("unused"));
}

#[actix_web::test]
async fn test_list_rendered_before_publish_is_not_served_after() {
    let (state, _) = state(&config_for_folder_one(true));

    // A render that read the store before the publication and finishes
    // after it inserts under the key it read up front.
    let key_before = state.category_list_key(TimeFrame::CurrentAndUpcoming);
    let (_, stale) = get(&state, "/api/categories").await;
    assert!(!stale.contains("unused"));

    let (status, _) = get(&state, &format!("/api/publish?hash={PENDING_HASH}")).await;
    assert_eq!(status, StatusCode::OK);

    state.category_list_cache.insert(key_before.clone(), stale).await;
    assert_ne!(state.category_list_key(TimeFrame::CurrentAndUpcoming), key_before);

    let (_, after) = get(&state, "/api/categories").await;
    assert!(after.contains("unused"));
}

#[actix_web::test]
async fn test_publish_endpoint_in_german() {
    let config = AppConfig {
        locale: "de".to_string(),
        ..config_for_folder_one(true)
    };
    let (state, _) = state(&config);

    let (_, body) = get(&state, &format!("/api/publish?hash={PENDING_HASH}")).await;

    assert!(body.contains("erfolgreich veröffentlicht"));
}
