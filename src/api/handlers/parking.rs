use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::responses::ParkingStatusResponse;
use crate::domain::services::fees::is_night_hour;
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Timelike, Utc};
use std::sync::Arc;

pub async fn parking_status(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let slots = state.slot_repo.list_all().await?;
    Ok(Json(ParkingStatusResponse::from_slots(&slots)))
}

pub async fn time_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let now = Utc::now().with_timezone(&state.config.tz());
    let is_night = is_night_hour(now.hour());

    Json(serde_json::json!({
        "current_hour": now.hour(),
        "current_time": now.format("%H:%M").to_string(),
        "is_night_time": is_night,
        "night_surcharge_applies": is_night,
    }))
}
