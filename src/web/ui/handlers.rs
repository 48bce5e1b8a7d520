use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::DashboardTemplate;

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    DashboardTemplate {
        satellite_name: state.config.satellite.name.clone(),
        poll_interval_s: state.config.satellite.poll_interval.as_secs(),
    }
}
