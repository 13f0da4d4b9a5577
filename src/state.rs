//! Shared application state for all routes.

use sqlx::SqlitePool;

/// The process-wide store handle, created at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
