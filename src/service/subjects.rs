//! Subject persistence and the by-faculty side of the association lookup.

use crate::error::AppError;
use crate::models::{Subject, SubjectInput};
use sqlx::PgConnection;

pub async fn insert(conn: &mut PgConnection, input: &SubjectInput) -> Result<(), AppError> {
    tracing::debug!(subject_code = %input.subject_code, "insert subject");
    sqlx::query("INSERT INTO subjects (subject_code, name, semester) VALUES ($1, $2, $3)")
        .bind(&input.subject_code)
        .bind(&input.name)
        .bind(input.semester)
        .execute(conn)
        .await?;
    Ok(())
}

/// Delete by primary key. Returns false when no row matched. A subject still
/// linked in faculty_subjects is rejected by the store (FK restrict) and
/// surfaces as a conflict.
pub async fn delete(conn: &mut PgConnection, subject_code: &str) -> Result<bool, AppError> {
    tracing::debug!(subject_code = %subject_code, "delete subject");
    let result = sqlx::query("DELETE FROM subjects WHERE subject_code = $1")
        .bind(subject_code)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// All subjects linked to a faculty, via the explicit join table.
/// Fails with NotFound when the faculty itself is absent.
pub async fn by_faculty(
    conn: &mut PgConnection,
    faculty_code: &str,
) -> Result<Vec<Subject>, AppError> {
    let exists = sqlx::query("SELECT 1 FROM faculties WHERE code = $1")
        .bind(faculty_code)
        .fetch_optional(&mut *conn)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound(format!("faculty {}", faculty_code)));
    }
    let rows = sqlx::query_as::<_, Subject>(
        r#"
        SELECT s.subject_code, s.name, s.semester
        FROM subjects s
        JOIN faculty_subjects fs ON fs.subject_code = s.subject_code
        WHERE fs.faculty_code = $1
        ORDER BY s.subject_code
        "#,
    )
    .bind(faculty_code)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}
