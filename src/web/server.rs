use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::session::Session;
use crate::tracker::HttpPositionSource;

use super::api::features as feature_handlers;
use super::api::solar as solar_handlers;
use super::api::tracker as tracker_handlers;
use super::api::viewer as viewer_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: Arc<Mutex<Session>>,
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let source = Arc::new(HttpPositionSource::new(&config.satellite.api_base));
    let session = Session::new(
        source,
        config.tracking(),
        &config.satellite.name,
        config.preset_viewer(),
    );

    let state = AppState {
        config: Arc::new(config),
        session: Arc::new(Mutex::new(session)),
    };
    let session = state.session.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        // Feature routing
        .route("/api/features", get(feature_handlers::current))
        .route("/api/features/select", post(feature_handlers::select))
        // Tracking
        .route("/api/tracker/status", get(tracker_handlers::status))
        .route("/api/scene", get(tracker_handlers::scene))
        .route("/api/alerts", get(tracker_handlers::alerts))
        .route("/api/viewer/position", post(viewer_handlers::set_position))
        // Solar
        .route("/api/solar/series", get(solar_handlers::series))
        .route("/api/solar/csv", post(solar_handlers::upload_csv))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    // Stop the poll worker and alert timers on the way out.
    session.lock().await.shutdown().await;
    Ok(())
}
