//! HTTP handlers: entity CRUD plus admin (root, init-db).

pub mod admin;
pub mod faculties;
pub mod messages;
pub mod students;
pub mod subjects;
