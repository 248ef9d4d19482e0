//! Read-only access to directors and genres.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use crate::error::AppError;
use crate::models::{Director, Genre};

pub struct DirectorService;

impl DirectorService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, AppError> {
        fetch_all(pool, "SELECT id, name FROM director ORDER BY id").await
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Director>, AppError> {
        fetch_by_id(pool, "SELECT id, name FROM director WHERE id = ?", id).await
    }
}

pub struct GenreService;

impl GenreService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, AppError> {
        fetch_all(pool, "SELECT id, name FROM genre ORDER BY id").await
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Genre>, AppError> {
        fetch_by_id(pool, "SELECT id, name FROM genre WHERE id = ?", id).await
    }
}

async fn fetch_all<T>(pool: &SqlitePool, sql: &str) -> Result<Vec<T>, AppError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    tracing::debug!(sql = %sql, "query");
    Ok(sqlx::query_as::<_, T>(sql).fetch_all(pool).await?)
}

async fn fetch_by_id<T>(pool: &SqlitePool, sql: &str, id: i64) -> Result<Option<T>, AppError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    tracing::debug!(sql = %sql, id, "query");
    Ok(sqlx::query_as::<_, T>(sql).bind(id).fetch_optional(pool).await?)
}
