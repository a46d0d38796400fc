//! Persisted row types and create-request inputs.
//!
//! Row types mirror the table layout in [`crate::store`]. Inputs are the
//! shapes accepted by POST endpoints; they are normalized and checked by
//! [`crate::service::validation`] before anything touches the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub usn: String,
    pub name: String,
    pub semester: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subject {
    pub subject_code: String,
    pub name: String,
    pub semester: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Faculty {
    pub code: String,
    pub name: String,
}

/// Explicit join row for the faculty<->subject many-to-many association.
/// The pair is the composite identity; both halves are foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FacultySubjectLink {
    pub faculty_code: String,
    pub subject_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentInput {
    pub usn: String,
    pub name: String,
    pub semester: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjectInput {
    pub subject_code: String,
    pub name: String,
    pub semester: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacultyInput {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageInput {
    pub name: String,
    pub email: String,
    pub message: String,
}
