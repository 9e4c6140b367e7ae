use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{admin, auth, booking, health, parking};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tower_cookies::CookieManagerLayer;
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/admin-login", post(auth::admin_login))
        .route("/api/logout", post(auth::logout))
        .route("/api/check-auth", get(auth::check_auth))

        // Parking status (public)
        .route("/api/parking-status", get(parking::parking_status))
        .route("/api/time-info", get(parking::time_info))

        // Booking flow (authenticated users)
        .route("/api/book-slots", post(booking::book_slots))
        .route("/api/my-bookings", get(booking::my_bookings))
        .route("/api/booking/{reference}", get(booking::get_booking))
        .route("/api/calculate-fees", post(booking::calculate_fees))

        // Admin
        .route("/api/reset-bookings", post(admin::reset_bookings))
        .route("/api/booking-stats", get(admin::booking_stats))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
