//! Store handle: pool ownership, idempotent schema setup, scoped sessions.

use crate::error::AppError;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};

/// One connection checked out for the duration of a single request.
/// Dropping it returns the connection to the pool.
pub type Session = PoolConnection<Postgres>;

const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS students (
        usn VARCHAR(20) PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        semester INT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS subjects (
        subject_code VARCHAR(10) PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        semester INT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS faculties (
        code VARCHAR(4) PRIMARY KEY,
        name VARCHAR(100) NOT NULL
    )
    "#,
    // No ON DELETE CASCADE: removing a linked subject or faculty is rejected
    // by the store and surfaces as a conflict.
    r#"
    CREATE TABLE IF NOT EXISTS faculty_subjects (
        faculty_code VARCHAR(4) NOT NULL REFERENCES faculties(code),
        subject_code VARCHAR(10) NOT NULL REFERENCES subjects(subject_code),
        PRIMARY KEY (faculty_code, subject_code)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS messages (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Owns the connection pool and the process-wide "schema is ready" flag.
/// Constructed once at startup and injected into handlers via `AppState`.
pub struct Store {
    pool: PgPool,
    ready: AtomicBool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            ready: AtomicBool::new(false),
        }
    }

    /// Create the schema if absent and mark the store ready. Idempotent: a
    /// second call returns without touching the database. The flag check is
    /// unsynchronized; deployments call this once at startup (or via
    /// /init-db) before traffic arrives.
    pub async fn init(&self) -> Result<(), AppError> {
        if self.ready.load(Ordering::SeqCst) {
            return Ok(());
        }
        for ddl in SCHEMA_DDL {
            tracing::debug!(sql = %ddl, "schema setup");
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        self.ready.store(true, Ordering::SeqCst);
        tracing::info!("store initialized");
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check out one session for the current request. Fails with
    /// `Uninitialized` before `init` has completed, rather than letting a
    /// query fail against missing tables.
    pub async fn session(&self) -> Result<Session, AppError> {
        if !self.is_ready() {
            return Err(AppError::Uninitialized);
        }
        Ok(self.pool.acquire().await?)
    }
}
