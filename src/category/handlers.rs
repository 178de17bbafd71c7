use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::i18n::MESSAGE_MISSING_CATEGORY;
use crate::view::{parse_uid, requested_time_frame};
use crate::{html_response, AppState, ErrorResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListQuery {
    /// One of past, pastAndCurrent, current, currentAndUpcoming, upcoming, all.
    pub time_frame: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    params(CategoryListQuery),
    responses(
        (status = 200, description = "Category list as an HTML fragment", body = String, content_type = "text/html"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_category_list(
    state: web::Data<AppState>,
    query: web::Query<CategoryListQuery>,
) -> impl Responder {
    let time_frame = requested_time_frame(query.time_frame.as_deref())
        .unwrap_or(state.settings.time_frame);
    let cache_key = state.category_list_key(time_frame);

    if let Some(html) = state.category_list_cache.get(&cache_key).await {
        log::debug!("Category list for '{}' served from cache", cache_key);
        return html_response(HttpResponse::Ok(), html);
    }

    match state
        .category_list
        .render(Some(time_frame), chrono::Utc::now())
        .await
    {
        Ok(html) => {
            state
                .category_list_cache
                .insert(cache_key, html.clone())
                .await;
            html_response(HttpResponse::Ok(), html)
        }
        Err(e) => {
            log::error!("Failed to render category list: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Failed to render category list"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/categories/{uid}",
    tag = "Categories",
    params(
        ("uid" = String, Path, description = "Category uid")
    ),
    responses(
        (status = 200, description = "Category as an HTML fragment", body = String, content_type = "text/html"),
        (status = 404, description = "Category not found", body = String, content_type = "text/html"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_category(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let category = match parse_uid(&path.into_inner()) {
        Some(uid) => state.store.find_category(uid).await,
        None => Ok(None),
    };

    match category {
        Ok(Some(category)) => {
            let html = state
                .context
                .renderer
                .render(std::slice::from_ref(&category), state.settings.display_mode);
            html_response(HttpResponse::Ok(), html)
        }
        Ok(None) => match state.context.message(MESSAGE_MISSING_CATEGORY) {
            Ok(html) => html_response(HttpResponse::NotFound(), html),
            Err(e) => {
                log::error!("Failed to render message: {}", e);
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::internal_error("Failed to render message"))
            }
        },
        Err(e) => {
            log::error!("Failed to load category: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Failed to load category"))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/categories").route(web::get().to(get_category_list)))
        .service(web::resource("/categories/{uid}").route(web::get().to(get_category)));
}
