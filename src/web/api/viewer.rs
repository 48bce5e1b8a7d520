use axum::{extract::State, Json};

use crate::geo::GeoPoint;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[utoipa::path(
    post,
    path = "/api/viewer/position",
    request_body = GeoPoint,
    responses(
        (status = 200, description = "Viewer resolved", body = GeoPoint),
        (status = 409, description = "Viewer already resolved this session", body = ErrorResponse)
    ),
    tag = "viewer"
)]
pub async fn set_position(
    State(state): State<AppState>,
    Json(position): Json<GeoPoint>,
) -> ApiResult<Json<GeoPoint>> {
    let mut session = state.session.lock().await;
    if session.resolve_viewer(position) {
        Ok(Json(position))
    } else {
        Err(ApiError::Conflict("viewer_already_set"))
    }
}
