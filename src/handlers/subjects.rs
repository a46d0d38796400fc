//! Subject endpoints: add, delete, list by linked faculty.

use crate::error::AppError;
use crate::models::{Subject, SubjectInput};
use crate::response::status_body;
use crate::service::subjects;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<SubjectInput>,
) -> Result<impl IntoResponse, AppError> {
    let input = input.normalized()?;
    let mut session = state.store.session().await?;
    subjects::insert(&mut session, &input).await?;
    Ok(Json(status_body("Subject added")))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(subject_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.store.session().await?;
    if !subjects::delete(&mut session, &subject_code).await? {
        return Err(AppError::NotFound(format!("subject {}", subject_code)));
    }
    Ok(Json(status_body("Subject deleted")))
}

pub async fn list_by_faculty(
    State(state): State<AppState>,
    Path(faculty_code): Path<String>,
) -> Result<Json<Vec<Subject>>, AppError> {
    let mut session = state.store.session().await?;
    let rows = subjects::by_faculty(&mut session, &faculty_code).await?;
    Ok(Json(rows))
}
