use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::view::requested_time_frame;
use crate::{html_response, AppState, ErrorResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    /// Only show events in this category.
    pub category: Option<String>,
    /// One of past, pastAndCurrent, current, currentAndUpcoming, upcoming, all.
    pub time_frame: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = "Events",
    params(EventListQuery),
    responses(
        (status = 200, description = "Event list as an HTML fragment", body = String, content_type = "text/html"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_event_list(
    state: web::Data<AppState>,
    query: web::Query<EventListQuery>,
) -> impl Responder {
    let time_frame = requested_time_frame(query.time_frame.as_deref());

    match state
        .event_list
        .render(query.category.as_deref(), time_frame, chrono::Utc::now())
        .await
    {
        Ok(html) => html_response(HttpResponse::Ok(), html),
        Err(e) => {
            log::error!("Failed to render event list: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Failed to render event list"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/events").route(web::get().to(get_event_list)));
}
