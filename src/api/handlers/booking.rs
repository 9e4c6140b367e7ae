use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{BookSlotsRequest, CalculateFeesRequest};
use crate::api::dtos::responses::BookingResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::slot::SlotCategory;
use crate::domain::models::user::ROLE_ADMIN;
use crate::domain::services::fees;
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Timelike, Utc};
use std::sync::Arc;

pub async fn book_slots(
    State(state): State<Arc<AppState>>,
    AuthUser(context): AuthUser,
    Json(payload): Json<BookSlotsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category: SlotCategory = payload
        .slot_type
        .parse()
        .map_err(|_| AppError::Validation(format!("Unknown category '{}'", payload.slot_type)))?;

    let booking = state
        .booking_service
        .book(&context.user_id, category, &payload.slots)
        .await?;

    let pricing = fees::FeeBreakdown {
        base_amount: booking.base_amount,
        platform_fee: booking.platform_fee,
        night_surcharge: booking.night_surcharge,
        total_fees: booking.platform_fee + booking.night_surcharge,
        grand_total: booking.grand_total,
        is_night_time: booking.night_surcharge > 0,
    };

    Ok(Json(BookingResponse {
        success: true,
        message: format!("Successfully booked {} slots", booking.slot_names.len()),
        booked_slots: booking.slot_names.0.clone(),
        pricing,
        booking_reference: booking.reference,
    }))
}

pub async fn my_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(context): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_by_user(&context.user_id).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(context): AuthUser,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_reference(&reference)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.user_id != context.user_id && context.role != ROLE_ADMIN {
        return Err(AppError::Forbidden("Not your booking".into()));
    }

    Ok(Json(booking))
}

pub async fn calculate_fees(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(payload): Json<CalculateFeesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let local_hour = Utc::now().with_timezone(&state.config.tz()).hour();

    let breakdown = match (payload.base_amount, payload.slot_type, payload.slot_count) {
        (Some(base_amount), _, _) => fees::breakdown(base_amount, local_hour),
        (None, Some(slot_type), Some(slot_count)) => {
            let category: SlotCategory = slot_type
                .parse()
                .map_err(|_| AppError::Validation(format!("Unknown category '{slot_type}'")))?;
            fees::compute(category, slot_count as usize, local_hour)
        }
        _ => {
            return Err(AppError::Validation(
                "Provide base_amount, or type and slot_count".into(),
            ))
        }
    };

    Ok(Json(breakdown))
}
