use axum::{extract::State, Json};

use crate::alert::Banner;
use crate::scene::SceneSnapshot;
use crate::tracker::PollerStatus;
use crate::web::server::AppState;

#[utoipa::path(
    get,
    path = "/api/tracker/status",
    responses(
        (status = 200, description = "Poller status", body = PollerStatus)
    ),
    tag = "tracker"
)]
pub async fn status(State(state): State<AppState>) -> Json<PollerStatus> {
    let session = state.session.lock().await;
    Json(session.tracker_status())
}

#[utoipa::path(
    get,
    path = "/api/scene",
    responses(
        (status = 200, description = "Map scene, null before tracking init", body = Option<SceneSnapshot>)
    ),
    tag = "tracker"
)]
pub async fn scene(State(state): State<AppState>) -> Json<Option<SceneSnapshot>> {
    let session = state.session.lock().await;
    Json(session.scene_snapshot())
}

#[utoipa::path(
    get,
    path = "/api/alerts",
    responses(
        (status = 200, description = "Active proximity banners", body = Vec<Banner>)
    ),
    tag = "tracker"
)]
pub async fn alerts(State(state): State<AppState>) -> Json<Vec<Banner>> {
    let session = state.session.lock().await;
    Json(session.alerts())
}
