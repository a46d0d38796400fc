//! Data access per entity, plus input validation. Every function runs
//! against one request-scoped session.

pub mod faculties;
pub mod messages;
pub mod students;
pub mod subjects;
pub mod validation;
