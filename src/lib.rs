use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpResponse, HttpResponseBuilder, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod category;
pub mod config;
pub mod db;
pub mod event;
pub mod html;
pub mod i18n;
pub mod link;
pub mod publication;
pub mod store;
pub mod template;
pub mod view;

pub use crate::config::AppConfig;
pub use crate::db::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

/// Finish `builder` with an HTML fragment body.
pub fn html_response(mut builder: HttpResponseBuilder, body: String) -> HttpResponse {
    builder
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::category::handlers::get_category_list,
        crate::category::handlers::get_category,
        crate::event::handlers::get_event_list,
        crate::publication::handlers::publish_event,
    ),
    components(
        schemas(
            category::model::Category,
            category::model::DisplayMode,
            event::model::Event,
            event::model::EventStatus,
            event::model::TimeFrame,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Categories", description = "Category list and single category fragments."),
        (name = "Events", description = "Event list fragments."),
        (name = "Publication", description = "One-time publication of hidden events.")
    )
)]
pub struct ApiDoc;

/// Register the HTML fragment routes under the current scope.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(category::handlers::config)
        .configure(event::handlers::config)
        .configure(publication::handlers::config);
}

pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let app_state = match AppState::new(&config).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to start. Please check SEMINARS_DATABASE_URL in .env and ensure the database is running. Error: {}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("seminars_frontend")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create Prometheus metrics middleware: {}", e))?;

    log::info!("Starting server at http://{}", config.bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(app_state.clone())
            .service(web::scope("/api").configure(routes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await?;

    Ok(())
}
