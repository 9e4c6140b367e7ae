mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

// Two simultaneous requests race for the same slot: exactly one wins,
// the other gets a conflict, and the slot ends up booked exactly once.
#[tokio::test]
async fn test_concurrent_requests_for_same_slot() {
    let app = TestApp::new().await;
    let first = app.register("racer1@example.com", "secret", "Racer One").await;
    let second = app.register("racer2@example.com", "secret", "Racer Two").await;

    let payload = json!({ "type": "vip", "slots": ["V5"] });

    let (res_a, res_b) = tokio::join!(
        app.post_json("/api/book-slots", payload.clone(), Some(&first)),
        app.post_json("/api/book-slots", payload.clone(), Some(&second)),
    );

    let statuses = [res_a.status(), res_b.status()];
    assert!(
        statuses.contains(&StatusCode::OK),
        "one request should win: {statuses:?}"
    );
    assert!(
        statuses.contains(&StatusCode::CONFLICT),
        "one request should lose: {statuses:?}"
    );

    let status = parse_body(app.get("/api/parking-status", None).await).await;
    let booked: Vec<&str> = status["vip"]["booked"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(booked, vec!["V5"]);

    let admin = app.admin_token().await;
    let stats = parse_body(app.get("/api/booking-stats", Some(&admin)).await).await;
    assert_eq!(stats["vip"]["booked"], 1);
}

#[tokio::test]
async fn test_concurrent_disjoint_bookings_both_succeed() {
    let app = TestApp::new().await;
    let first = app.register("par1@example.com", "secret", "Par One").await;
    let second = app.register("par2@example.com", "secret", "Par Two").await;

    let (res_a, res_b) = tokio::join!(
        app.post_json(
            "/api/book-slots",
            json!({ "type": "executive", "slots": ["E0201", "E0202"] }),
            Some(&first)
        ),
        app.post_json(
            "/api/book-slots",
            json!({ "type": "executive", "slots": ["E0301", "E0302"] }),
            Some(&second)
        ),
    );

    assert_eq!(res_a.status(), StatusCode::OK);
    assert_eq!(res_b.status(), StatusCode::OK);

    let admin = app.admin_token().await;
    let stats = parse_body(app.get("/api/booking-stats", Some(&admin)).await).await;
    assert_eq!(stats["executive"]["booked"], 4);
}
