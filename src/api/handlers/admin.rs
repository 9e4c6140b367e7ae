use axum::{extract::State, response::IntoResponse, Json};
use crate::api::extractors::auth::AdminUser;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::info;

pub async fn reset_bookings(
    State(state): State<Arc<AppState>>,
    AdminUser(context): AdminUser,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.reset_all().await?;

    info!("All bookings reset by admin {}", context.user_id);

    Ok(Json(json!({
        "success": true,
        "message": "All bookings reset",
    })))
}

pub async fn booking_stats(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let counts = state.slot_repo.counts().await?;

    let mut stats = Map::new();
    for entry in counts {
        stats.insert(
            entry.slot_type.as_str().to_string(),
            json!({
                "total": entry.total,
                "booked": entry.booked,
                "available": entry.available,
            }),
        );
    }

    Ok(Json(Value::Object(stats)))
}
