//! Booking API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::{booking_body, TestApp};

#[tokio::test]
async fn test_create_booking_embeds_guide() {
    let app = TestApp::new();
    let guide_id = app.create_guide("Sergey Sergeev", 10, true).await;

    let response = app
        .post_booking(json!({
            "tour_name": "Santa hunt",
            "hunter_name": "Sponge Bob",
            "guide_id": guide_id,
            "date": "2025-11-12",
            "participants_count": 4,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        body,
        json!({
            "id": id,
            "tour_name": "Santa hunt",
            "hunter_name": "Sponge Bob",
            "date": "2025-11-12",
            "participants_count": 4,
            "guide": {
                "id": guide_id,
                "name": "Sergey Sergeev",
                "experience_years": 10,
                "is_active": true
            }
        })
    );

    let stored = app.booking_on(guide_id, "2025-11-12").unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.hunter_name, "Sponge Bob");
}

#[test_case(0, StatusCode::UNPROCESSABLE_ENTITY ; "zero participants")]
#[test_case(1, StatusCode::CREATED ; "lower bound")]
#[test_case(10, StatusCode::CREATED ; "upper bound")]
#[test_case(11, StatusCode::UNPROCESSABLE_ENTITY ; "eleven participants")]
#[tokio::test]
async fn test_participants_count_bounds(count: i32, expected: StatusCode) {
    let app = TestApp::new();
    let guide_id = app.create_random_guide(4, true).await;

    let response = app
        .post_booking(booking_body(guide_id, "2025-11-12", count))
        .await;

    response.assert_status(expected);
    assert_eq!(
        app.booking_on(guide_id, "2025-11-12").is_some(),
        expected == StatusCode::CREATED
    );
}

#[tokio::test]
async fn test_impossible_calendar_date_is_rejected() {
    let app = TestApp::new();
    let guide_id = app.create_random_guide(4, true).await;

    let response = app
        .post_booking(booking_body(guide_id, "2025-02-30", 2))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["title"], "Validation failed");
    assert_eq!(body["detail"], "Invalid date format, expected YYYY-MM-DD");
    assert_eq!(app.store.booking_count(), 0);
}

#[tokio::test]
async fn test_malformed_date_is_field_error() {
    let app = TestApp::new();
    let guide_id = app.create_random_guide(4, true).await;

    let response = app
        .post_booking(booking_body(guide_id, "12.11.2025", 2))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "date");
    assert_eq!(
        body["errors"][0]["message"],
        "Date must be in format YYYY-MM-DD"
    );
}

/// The second booking of a day fails and the first one stays intact
#[tokio::test]
async fn test_guide_cannot_be_booked_twice_on_same_day() {
    let app = TestApp::new();
    let guide_id = app.create_random_guide(5, true).await;

    let first = app
        .post_booking(booking_body(guide_id, "2025-11-12", 3))
        .await;
    first.assert_status(StatusCode::CREATED);
    let first_id = first.json::<Value>()["id"].as_i64().unwrap();

    let second = app
        .post_booking(booking_body(guide_id, "2025-11-12", 5))
        .await;

    second.assert_status(StatusCode::CONFLICT);
    let body: Value = second.json();
    assert_eq!(body["title"], "Guide already booked");
    assert_eq!(
        body["detail"],
        format!("Guide #{} already booked on 2025-11-12", guide_id)
    );
    assert_eq!(body["instance"], "/api/bookings");

    let stored = app.booking_on(guide_id, "2025-11-12").unwrap();
    assert_eq!(stored.id, first_id);
    assert_eq!(stored.participants_count, 3);
    assert_eq!(app.store.booking_count(), 1);

    app.post_booking(booking_body(guide_id, "2025-11-13", 5))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_inactive_guide_cannot_be_booked() {
    let app = TestApp::new();
    let guide_id = app.create_random_guide(8, false).await;

    let response = app
        .post_booking(booking_body(guide_id, "2025-11-12", 2))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["title"], "Guide is inactive");
    assert_eq!(body["detail"], format!("Guide #{} is inactive", guide_id));
    assert!(app.booking_on(guide_id, "2025-11-12").is_none());
}

#[tokio::test]
async fn test_unknown_guide_cannot_be_booked() {
    let app = TestApp::new();

    let response = app.post_booking(booking_body(404, "2025-11-12", 2)).await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["detail"], "Guide #404 not found");
    assert_eq!(app.store.booking_count(), 0);
}

#[tokio::test]
async fn test_booking_outcomes_are_exported_as_metrics() {
    let app = TestApp::new();
    let guide_id = app.create_random_guide(5, true).await;
    app.post_booking(booking_body(guide_id, "2025-12-01", 2))
        .await
        .assert_status(StatusCode::CREATED);

    let metrics = app.server.get("/metrics").await.text();

    assert!(metrics.contains(r#"app_booking_create_total{result="success"}"#));
    assert!(metrics.contains(r#"hunting_guide_write_total{operation="create",result="success"}"#));
}
