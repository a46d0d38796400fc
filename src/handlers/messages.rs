//! Contact-message endpoints: submit, delete by email.

use crate::error::AppError;
use crate::models::MessageInput;
use crate::response::{MessageCreated, MessageDeleted};
use crate::service::messages;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<MessageInput>,
) -> Result<impl IntoResponse, AppError> {
    let input = input.normalized()?;
    let mut session = state.store.session().await?;
    let id = messages::insert(&mut session, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageCreated {
            message: "Message received".into(),
            id,
        }),
    ))
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    email: String,
}

/// Removes the first-inserted message matching the email; later duplicates
/// stay in place.
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.store.session().await?;
    let deleted = messages::delete_first_by_email(&mut session, &query.email).await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(format!(
            "no message for {}",
            query.email
        )));
    }
    Ok(Json(MessageDeleted {
        status: "Message deleted".into(),
        email: query.email,
    }))
}
