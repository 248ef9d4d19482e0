//! Movie reads and writes against SQLite.

use sqlx::sqlite::SqliteQueryResult;
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::AppError;
use crate::models::{Movie, MovieFilter, MovieInput, MoviePatch, MovieRow};
use crate::sql::{delete_movie, insert_movie, select_movie_by_id, select_movies, update_movie, QueryBuf, SqlValue};

pub struct MovieService;

impl MovieService {
    /// List movies ordered by id. Filters are exact matches and combine with AND.
    pub async fn list(pool: &SqlitePool, filter: &MovieFilter) -> Result<Vec<Movie>, AppError> {
        let q = select_movies(filter);
        let rows = Self::query_many(pool, q).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    /// Fetch one movie with its genre and director embedded.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, AppError> {
        let q = select_movie_by_id(id);
        let row = Self::query_one(pool, q).await?;
        Ok(row.map(Movie::from))
    }

    /// Insert a movie; returns the assigned id.
    pub async fn create(pool: &SqlitePool, input: &MovieInput) -> Result<i64, AppError> {
        let q = insert_movie(input.assignments());
        let id = Self::execute(pool, q).await?.last_insert_rowid();
        tracing::info!(movie_id = id, "movie created");
        Ok(id)
    }

    /// Insert inside a caller-owned transaction.
    pub async fn create_tx(conn: &mut SqliteConnection, input: &MovieInput) -> Result<i64, AppError> {
        let q = insert_movie(input.assignments());
        tracing::debug!(sql = %q.sql, params = ?q.params, "query (tx)");
        let mut query = sqlx::query(&q.sql);
        for p in q.params {
            query = p.bind(query);
        }
        let id = query.execute(&mut *conn).await?.last_insert_rowid();
        Ok(id)
    }

    /// Overwrite every mutable column. Returns `false` if the movie does not exist.
    pub async fn replace(pool: &SqlitePool, id: i64, input: &MovieInput) -> Result<bool, AppError> {
        let found = Self::apply_update(pool, id, input.assignments()).await?;
        if found {
            tracing::info!(movie_id = id, "movie replaced");
        }
        Ok(found)
    }

    /// Overwrite only the columns present in the patch. Returns `false` if the movie does not exist.
    pub async fn patch(pool: &SqlitePool, id: i64, patch: &MoviePatch) -> Result<bool, AppError> {
        let found = Self::apply_update(pool, id, patch.assignments()).await?;
        if found {
            tracing::info!(movie_id = id, "movie patched");
        }
        Ok(found)
    }

    /// Delete by id. Returns `false` if nothing was deleted.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let deleted = Self::execute(pool, delete_movie(id)).await?.rows_affected() > 0;
        if deleted {
            tracing::info!(movie_id = id, "movie deleted");
        }
        Ok(deleted)
    }

    async fn apply_update(
        pool: &SqlitePool,
        id: i64,
        assignments: Vec<(&str, SqlValue)>,
    ) -> Result<bool, AppError> {
        match update_movie(id, assignments) {
            Some(q) => Ok(Self::execute(pool, q).await?.rows_affected() > 0),
            None => Self::exists(pool, id).await,
        }
    }

    async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM movie WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    async fn query_one(pool: &SqlitePool, q: QueryBuf) -> Result<Option<MovieRow>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, MovieRow>(&q.sql);
        for p in q.params {
            query = p.bind_as(query);
        }
        Ok(query.fetch_optional(pool).await?)
    }

    async fn query_many(pool: &SqlitePool, q: QueryBuf) -> Result<Vec<MovieRow>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, MovieRow>(&q.sql);
        for p in q.params {
            query = p.bind_as(query);
        }
        Ok(query.fetch_all(pool).await?)
    }

    async fn execute(pool: &SqlitePool, q: QueryBuf) -> Result<SqliteQueryResult, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params {
            query = p.bind(query);
        }
        Ok(query.execute(pool).await?)
    }
}
