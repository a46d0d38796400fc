//! Campus API: students, subjects, faculty, and contact messages over PostgreSQL.

pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::app_router;
pub use state::AppState;
pub use store::Store;
