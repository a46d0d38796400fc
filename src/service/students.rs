//! Student persistence.

use crate::error::AppError;
use crate::models::{Student, StudentInput};
use sqlx::PgConnection;

pub async fn insert(conn: &mut PgConnection, input: &StudentInput) -> Result<(), AppError> {
    tracing::debug!(usn = %input.usn, "insert student");
    sqlx::query("INSERT INTO students (usn, name, semester) VALUES ($1, $2, $3)")
        .bind(&input.usn)
        .bind(&input.name)
        .bind(input.semester)
        .execute(conn)
        .await?;
    Ok(())
}

/// Delete by primary key. Returns false when no row matched.
pub async fn delete(conn: &mut PgConnection, usn: &str) -> Result<bool, AppError> {
    tracing::debug!(usn = %usn, "delete student");
    let result = sqlx::query("DELETE FROM students WHERE usn = $1")
        .bind(usn)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_by_semester(
    conn: &mut PgConnection,
    semester: i32,
) -> Result<Vec<Student>, AppError> {
    let rows = sqlx::query_as::<_, Student>(
        "SELECT usn, name, semester FROM students WHERE semester = $1 ORDER BY usn",
    )
    .bind(semester)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}
