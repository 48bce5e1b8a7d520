use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::features::Feature;
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectFeatureRequest {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/features/select",
    request_body = SelectFeatureRequest,
    responses(
        (status = 200, description = "Section now visible", body = Feature)
    ),
    tag = "features"
)]
pub async fn select(
    State(state): State<AppState>,
    Json(request): Json<SelectFeatureRequest>,
) -> Json<Feature> {
    let mut session = state.session.lock().await;
    Json(session.select(&request.name))
}

#[utoipa::path(
    get,
    path = "/api/features",
    responses(
        (status = 200, description = "Currently visible section", body = Feature)
    ),
    tag = "features"
)]
pub async fn current(State(state): State<AppState>) -> Json<Feature> {
    let session = state.session.lock().await;
    Json(session.feature().clone())
}
