//! Guide API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{booking_body, fake_name, TestApp};

fn names(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap().to_string())
        .collect()
}

/// Valid create echoes the input with an id and a Location header
#[tokio::test]
async fn test_create_guide_returns_created_guide() {
    let app = TestApp::new();
    let name = fake_name();

    let response = app
        .post_guide(json!({"name": name, "experience_years": 5, "is_active": false}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(
        body,
        json!({"id": id, "name": name, "experience_years": 5, "is_active": false})
    );
    assert_eq!(
        response.header("location").to_str().unwrap(),
        format!("/guides/{}", id)
    );
}

#[tokio::test]
async fn test_create_guide_defaults_to_active() {
    let app = TestApp::new();

    let response = app
        .post_guide(json!({"name": "Ivan Ivanov", "experience_years": 5}))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["is_active"], true);
}

/// Field validation produces a 422 problem document listing the fields
#[tokio::test]
async fn test_create_guide_with_invalid_fields_fails() {
    let app = TestApp::new();

    let response = app
        .post_guide(json!({"name": "A", "experience_years": -1}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/problem+json"
    );
    let body: Value = response.json();
    assert_eq!(body["type"], "about:blank");
    assert_eq!(body["title"], "Validation failed");
    assert_eq!(body["status"], 422);
    assert_eq!(body["detail"], "Request validation failed");
    assert_eq!(body["instance"], "/api/guides");

    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["experience_years", "name"]);
    assert_eq!(app.store.guide_count(), 0);
}

#[tokio::test]
async fn test_create_guide_with_blank_name_fails() {
    let app = TestApp::new();

    let response = app
        .post_guide(json!({"name": "     ", "experience_years": 1}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/guides")
        .content_type("application/json")
        .text("{\"name\": ")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["title"], "Bad request");
    assert_eq!(body["instance"], "/api/guides");
}

#[tokio::test]
async fn test_get_guide_by_id() {
    let app = TestApp::new();
    let id = app.create_guide("Sergey Sergeev", 10, true).await;

    let response = app.server.get(&format!("/api/guides/{}", id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Sergey Sergeev");
}

#[tokio::test]
async fn test_get_unknown_guide_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/api/guides/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["title"], "Guide not found");
    assert_eq!(body["detail"], "Guide #999 not found");
    assert_eq!(body["instance"], "/api/guides/999");
}

#[tokio::test]
async fn test_unknown_route_is_problem_details() {
    let app = TestApp::new();

    let response = app.server.get("/api/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/problem+json"
    );
    let body: Value = response.json();
    assert_eq!(body["title"], "HTTP error");
    assert_eq!(body["status"], 404);
    assert_eq!(body["detail"], "Not Found");
    assert_eq!(body["instance"], "/api/nope");
}

#[tokio::test]
async fn test_unsupported_method_is_problem_details() {
    let app = TestApp::new();
    let id = app.create_random_guide(3, true).await;

    let response = app
        .server
        .patch(&format!("/api/guides/{}", id))
        .json(&json!({"name": "Ivan"}))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/problem+json"
    );
    let body: Value = response.json();
    assert_eq!(body["title"], "HTTP error");
    assert_eq!(body["status"], 405);
    assert_eq!(body["instance"], format!("/api/guides/{}", id));
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.server.get("/api/guides/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_orders_by_experience_then_name() {
    let app = TestApp::new();
    app.create_guide("Petr Petrov", 2, true).await;
    app.create_guide("Sergey Sergeev", 10, true).await;
    app.create_guide("Alexander Alexandrov", 8, false).await;
    app.create_guide("Ivan Ivanov", 2, true).await;

    let response = app.server.get("/api/guides").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 4);
    assert_eq!(
        names(&body),
        vec![
            "Sergey Sergeev",
            "Alexander Alexandrov",
            "Ivan Ivanov",
            "Petr Petrov"
        ]
    );
}

/// Active listing never includes inactive guides and honors the threshold
#[tokio::test]
async fn test_active_guides_respect_flag_and_min_experience() {
    let app = TestApp::new();
    app.create_guide("Ivan Ivanov", 5, true).await;
    app.create_guide("Petr Petrov", 2, true).await;
    app.create_guide("Alexander Alexandrov", 8, false).await;
    app.create_guide("Nikolay Nikolaev", 1, false).await;

    let all_active: Value = app.server.get("/api/guides_active").await.json();
    assert_eq!(names(&all_active), vec!["Ivan Ivanov", "Petr Petrov"]);
    assert!(all_active["items"]
        .as_array()
        .unwrap()
        .iter()
        .all(|g| g["is_active"] == true));

    let seasoned: Value = app
        .server
        .get("/api/guides_active?min_experience=3")
        .await
        .json();
    assert_eq!(names(&seasoned), vec!["Ivan Ivanov"]);
    assert_eq!(seasoned["total"], 1);
}

#[tokio::test]
async fn test_negative_min_experience_is_rejected() {
    let app = TestApp::new();

    let response = app.server.get("/api/guides_active?min_experience=-1").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["errors"][0]["field"], "min_experience");
}

#[tokio::test]
async fn test_update_guide_overwrites_fields() {
    let app = TestApp::new();
    let id = app.create_guide("Vasily Vasiliev", 4, true).await;

    let response = app
        .server
        .put(&format!("/api/guides/{}", id))
        .json(&json!({"name": "Vasily V.", "experience_years": 6, "is_active": false}))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"id": id, "name": "Vasily V.", "experience_years": 6, "is_active": false})
    );

    let active: Value = app.server.get("/api/guides_active").await.json();
    assert_eq!(active["total"], 0);
}

#[tokio::test]
async fn test_update_unknown_guide_is_not_found() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/api/guides/77")
        .json(&json!({"name": "Nobody", "experience_years": 1, "is_active": true}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["detail"], "Guide #77 not found");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = TestApp::new();
    let id = app.create_random_guide(3, true).await;

    let response = app.server.delete(&format!("/api/guides/{}", id)).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    app.server
        .get(&format!("/api/guides/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&format!("/api/guides/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_guide_removes_its_bookings() {
    let app = TestApp::new();
    let id = app.create_random_guide(3, true).await;
    app.post_booking(booking_body(id, "2025-11-12", 2))
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(app.store.booking_count(), 1);

    app.server
        .delete(&format!("/api/guides/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(app.store.booking_count(), 0);
    assert!(app.booking_on(id, "2025-11-12").is_none());
}
