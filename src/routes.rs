//! Router construction: every endpoint of the service on one router.

use crate::handlers::{admin, faculties, messages, students, subjects};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(admin::root))
        .route("/init-db", get(admin::init_db))
        .route("/student", post(students::add))
        .route("/student/:usn", delete(students::remove))
        .route(
            "/students/semester/:semester",
            get(students::list_by_semester),
        )
        .route("/subject", post(subjects::add))
        .route("/subject/:subject_code", delete(subjects::remove))
        .route(
            "/subject/by-faculty/:faculty_code",
            get(subjects::list_by_faculty),
        )
        .route("/faculty", post(faculties::add))
        .route("/faculty/:code", delete(faculties::remove))
        .route(
            "/faculty/by-subject/:subject_code",
            get(faculties::list_by_subject),
        )
        .route("/submit-message", post(messages::submit))
        .route("/delete-message", delete(messages::remove))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}
