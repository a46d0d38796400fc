//! Student endpoints: add, delete, list by semester.

use crate::error::AppError;
use crate::models::{Student, StudentInput};
use crate::response::status_body;
use crate::service::students;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<StudentInput>,
) -> Result<impl IntoResponse, AppError> {
    let input = input.normalized()?;
    let mut session = state.store.session().await?;
    students::insert(&mut session, &input).await?;
    Ok(Json(status_body("Student added")))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(usn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.store.session().await?;
    if !students::delete(&mut session, &usn).await? {
        return Err(AppError::NotFound(format!("student {}", usn)));
    }
    Ok(Json(status_body("Student deleted")))
}

pub async fn list_by_semester(
    State(state): State<AppState>,
    Path(semester): Path<i32>,
) -> Result<Json<Vec<Student>>, AppError> {
    let mut session = state.store.session().await?;
    let rows = students::list_by_semester(&mut session, semester).await?;
    Ok(Json(rows))
}
