//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use chrono::NaiveDate;
use fake::{faker::name::en::Name, Fake};
use serde_json::{json, Value};

use hunting_booking::config::CorsSettings;
use hunting_booking::domain::HuntingBooking;
use hunting_booking::infrastructure::repositories::InMemoryStore;
use hunting_booking::startup::{build_router, AppState};

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    /// Create a new test application with the full middleware stack
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let state = AppState::in_memory(store.clone());
        let router = build_router(
            state,
            &CorsSettings {
                allowed_origins: vec![],
            },
        );
        let server = TestServer::new(router).expect("Failed to start test server");

        Self { server, store }
    }

    /// POST /api/guides and return the raw response
    pub async fn post_guide(&self, body: Value) -> TestResponse {
        self.server.post("/api/guides").json(&body).await
    }

    /// Create a guide and return its id
    pub async fn create_guide(&self, name: &str, experience_years: i32, is_active: bool) -> i64 {
        let response = self
            .post_guide(json!({
                "name": name,
                "experience_years": experience_years,
                "is_active": is_active,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["id"]
            .as_i64()
            .expect("created guide has an id")
    }

    /// Create a guide with a random name
    pub async fn create_random_guide(&self, experience_years: i32, is_active: bool) -> i64 {
        self.create_guide(&fake_name(), experience_years, is_active)
            .await
    }

    /// POST /api/bookings and return the raw response
    pub async fn post_booking(&self, body: Value) -> TestResponse {
        self.server.post("/api/bookings").json(&body).await
    }

    /// Look the stored booking up directly, bypassing the API
    pub fn booking_on(&self, guide_id: i64, date: &str) -> Option<HuntingBooking> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date");
        self.store.booking_on(guide_id, date)
    }
}

/// Random full name for fixtures
pub fn fake_name() -> String {
    Name().fake()
}

/// Booking request body with random tour and hunter names
pub fn booking_body(guide_id: i64, date: &str, participants_count: i32) -> Value {
    json!({
        "tour_name": format!("{} tour", fake_name()),
        "hunter_name": fake_name(),
        "guide_id": guide_id,
        "date": date,
        "participants_count": participants_count,
    })
}
