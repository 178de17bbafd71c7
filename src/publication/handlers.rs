use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use super::gate::ActivationFailure;
use crate::i18n::{MESSAGE_PUBLISHING_FAILED, MESSAGE_PUBLISHING_SUCCESSFUL};
use crate::{html_response, AppState, ErrorResponse};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PublishQuery {
    /// Publication token sent to the event's author.
    pub hash: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/publish",
    tag = "Publication",
    params(PublishQuery),
    responses(
        (status = 200, description = "Event published", body = String, content_type = "text/html"),
        (status = 400, description = "Event could not be published", body = String, content_type = "text/html"),
        (status = 500, description = "Message rendering failure", body = ErrorResponse)
    )
)]
pub async fn publish_event(
    state: web::Data<AppState>,
    query: web::Query<PublishQuery>,
) -> impl Responder {
    let token = query.hash.as_deref().unwrap_or_default();

    let (response, message_key) = match state.publication_gate.activate(token).await {
        Ok(()) => {
            // Newly visible events can add categories to the list.
            state.invalidate_category_lists();
            (HttpResponse::Ok(), MESSAGE_PUBLISHING_SUCCESSFUL)
        }
        Err(ActivationFailure::Store(e)) => {
            log::error!("Publication failed on storage error: {}", e);
            (HttpResponse::BadRequest(), MESSAGE_PUBLISHING_FAILED)
        }
        Err(reason) => {
            log::debug!("Publication refused: {}", reason);
            (HttpResponse::BadRequest(), MESSAGE_PUBLISHING_FAILED)
        }
    };

    match state.context.message(message_key) {
        Ok(html) => html_response(response, html),
        Err(e) => {
            log::error!("Failed to render message: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Failed to render message"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/publish").route(web::get().to(publish_event)));
}
