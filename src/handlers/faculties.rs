//! Faculty endpoints: add, delete, list by linked subject.

use crate::error::AppError;
use crate::models::{Faculty, FacultyInput};
use crate::response::status_body;
use crate::service::faculties;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<FacultyInput>,
) -> Result<impl IntoResponse, AppError> {
    let input = input.normalized()?;
    let mut session = state.store.session().await?;
    faculties::insert(&mut session, &input).await?;
    Ok(Json(status_body("Faculty added")))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.store.session().await?;
    if !faculties::delete(&mut session, &code).await? {
        return Err(AppError::NotFound(format!("faculty {}", code)));
    }
    Ok(Json(status_body("Faculty deleted")))
}

pub async fn list_by_subject(
    State(state): State<AppState>,
    Path(subject_code): Path<String>,
) -> Result<Json<Vec<Faculty>>, AppError> {
    let mut session = state.store.session().await?;
    let rows = faculties::by_subject(&mut session, &subject_code).await?;
    Ok(Json(rows))
}
