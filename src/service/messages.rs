//! Contact-message persistence.

use crate::error::AppError;
use crate::models::MessageInput;
use sqlx::PgConnection;

/// Insert a message and return its generated id.
pub async fn insert(conn: &mut PgConnection, input: &MessageInput) -> Result<i32, AppError> {
    tracing::debug!(email = %input.email, "insert message");
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO messages (name, email, message) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.message)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Delete the first-inserted message for an email (lowest id); any later
/// rows with the same email are untouched. Returns the deleted id, or None
/// when no row matched.
pub async fn delete_first_by_email(
    conn: &mut PgConnection,
    email: &str,
) -> Result<Option<i32>, AppError> {
    tracing::debug!(email = %email, "delete message");
    let deleted: Option<i32> = sqlx::query_scalar(
        r#"
        DELETE FROM messages
        WHERE id = (SELECT id FROM messages WHERE email = $1 ORDER BY id LIMIT 1)
        RETURNING id
        "#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await?;
    Ok(deleted)
}
