//! Router tests that run without a database: validation rejections, the
//! uninitialized-store guard, and the root status endpoint. The pool is
//! built with connect_lazy so no connection is ever opened; every request
//! here must be answered before a session would be acquired.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use campus_api::{app_router, AppState, Store};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/campus_unreachable")
        .expect("lazy pool");
    app_router(AppState::new(Store::new(pool)))
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.expect("request")
}

#[tokio::test]
async fn root_reports_server_status() {
    let app = test_app();
    let response = send(&app, "GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let status = body["status"].as_str().expect("status string");
    assert!(status.contains("not initialized"));
}

#[tokio::test]
async fn add_student_rejects_bad_usn() {
    let app = test_app();
    for usn in ["4pm22cs001", "SHORT1", "4PM22CS-01"] {
        let response = send(
            &app,
            "POST",
            "/student",
            Some(json!({"usn": usn, "name": "Alice", "semester": 6})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "usn {}", usn);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn add_student_rejects_semester_out_of_range() {
    let app = test_app();
    for semester in [0, 9] {
        let response = send(
            &app,
            "POST",
            "/student",
            Some(json!({"usn": "4PM22CS001", "name": "Alice", "semester": semester})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn add_subject_rejects_bad_code() {
    let app = test_app();
    let response = send(
        &app,
        "POST",
        "/subject",
        Some(json!({"subject_code": "bc", "name": "Networks", "semester": 5})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn add_faculty_rejects_non_numeric_code() {
    let app = test_app();
    for code in ["12A4", "123", "12345"] {
        let response = send(
            &app,
            "POST",
            "/faculty",
            Some(json!({"code": code, "name": "Prof. Smith"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "code {}", code);
    }
}

#[tokio::test]
async fn submit_message_rejects_invalid_email() {
    let app = test_app();
    let response = send(
        &app,
        "POST",
        "/submit-message",
        Some(json!({"name": "Bob", "email": "not-an-email", "message": "hi"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn operations_before_init_return_503() {
    let app = test_app();

    let response = send(
        &app,
        "POST",
        "/student",
        Some(json!({"usn": "4PM22CS001", "name": "Alice", "semester": 6})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "store_uninitialized");

    let response = send(&app, "DELETE", "/student/4PM22CS001", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = send(&app, "GET", "/students/semester/6", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = send(&app, "GET", "/faculty/by-subject/BCS601", None).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn delete_message_requires_email_param() {
    let app = test_app();
    let response = send(&app, "DELETE", "/delete-message", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = test_app();
    let response = send(&app, "GET", "/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
