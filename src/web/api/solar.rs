use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::solar::{SolarError, SolarSeries};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CsvLoadResponse {
    pub rows: usize,
}

#[utoipa::path(
    get,
    path = "/api/solar/series",
    responses(
        (status = 200, description = "Bound chart series", body = SolarSeries),
        (status = 404, description = "Solar section not initialized", body = ErrorResponse)
    ),
    tag = "solar"
)]
pub async fn series(State(state): State<AppState>) -> ApiResult<Json<SolarSeries>> {
    let session = state.session.lock().await;
    session
        .solar_series()
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("solar_not_initialized"))
}

#[utoipa::path(
    post,
    path = "/api/solar/csv",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Series replaced", body = CsvLoadResponse),
        (status = 400, description = "Rejected upload; previous series kept", body = ErrorResponse),
        (status = 404, description = "Solar section not initialized", body = ErrorResponse)
    ),
    tag = "solar"
)]
pub async fn upload_csv(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Json<CsvLoadResponse>> {
    let mut session = state.session.lock().await;
    match session.load_solar_csv(&body) {
        None => Err(ApiError::NotFound("solar_not_initialized")),
        Some(Err(err)) => Err(map_solar_error(err)),
        Some(Ok(rows)) => Ok(Json(CsvLoadResponse { rows })),
    }
}

fn map_solar_error(err: SolarError) -> ApiError {
    match err {
        SolarError::EmptyDataset => ApiError::Rejected {
            code: "empty_dataset",
            message: err.to_string(),
        },
        SolarError::Csv(e) => ApiError::Validation(e.to_string()),
    }
}
