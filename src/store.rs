//! Connection pool setup and table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Tables in dependency order. `movie` references the other two, but the
/// connection runs with foreign-key enforcement off, so a dangling reference
/// is stored as given.
const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS director (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS genre (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS movie (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(255),
        description VARCHAR(255),
        trailer VARCHAR(255),
        year INTEGER,
        rating FLOAT,
        genre_id INTEGER REFERENCES genre(id),
        director_id INTEGER REFERENCES director(id)
    )
    "#,
];

/// Open a pool for `database_url`, creating the database file if it does not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Single-connection pool over a private in-memory database.
/// The connection is never recycled, since closing it would drop the data.
pub async fn memory_pool() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create `director`, `genre` and `movie` if they are missing. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
