//! Shared application state for all routes.

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    /// The store handle. Every handler reaches the database through this pool.
    pub pool: SqlitePool,
}
