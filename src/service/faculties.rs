//! Faculty persistence and the by-subject side of the association lookup.

use crate::error::AppError;
use crate::models::{Faculty, FacultyInput};
use sqlx::PgConnection;

pub async fn insert(conn: &mut PgConnection, input: &FacultyInput) -> Result<(), AppError> {
    tracing::debug!(code = %input.code, "insert faculty");
    sqlx::query("INSERT INTO faculties (code, name) VALUES ($1, $2)")
        .bind(&input.code)
        .bind(&input.name)
        .execute(conn)
        .await?;
    Ok(())
}

/// Delete by primary key. Returns false when no row matched. A faculty still
/// linked in faculty_subjects is rejected by the store (FK restrict) and
/// surfaces as a conflict.
pub async fn delete(conn: &mut PgConnection, code: &str) -> Result<bool, AppError> {
    tracing::debug!(code = %code, "delete faculty");
    let result = sqlx::query("DELETE FROM faculties WHERE code = $1")
        .bind(code)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// All faculties linked to a subject, via the explicit join table.
/// Fails with NotFound when the subject itself is absent.
pub async fn by_subject(
    conn: &mut PgConnection,
    subject_code: &str,
) -> Result<Vec<Faculty>, AppError> {
    let exists = sqlx::query("SELECT 1 FROM subjects WHERE subject_code = $1")
        .bind(subject_code)
        .fetch_optional(&mut *conn)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound(format!("subject {}", subject_code)));
    }
    let rows = sqlx::query_as::<_, Faculty>(
        r#"
        SELECT f.code, f.name
        FROM faculties f
        JOIN faculty_subjects fs ON fs.faculty_code = f.code
        WHERE fs.subject_code = $1
        ORDER BY f.code
        "#,
    )
    .bind(subject_code)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}
