//! Director and genre handlers. Both are read-only.

use crate::error::AppError;
use crate::handlers::movie::parse_id;
use crate::models::{Director, Genre};
use crate::service::{DirectorService, GenreService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_directors(State(state): State<AppState>) -> Result<Json<Vec<Director>>, AppError> {
    Ok(Json(DirectorService::list(&state.pool).await?))
}

pub async fn read_director(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Director>, AppError> {
    let id = parse_id(&id_str)?;
    let director = DirectorService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("director", id))?;
    Ok(Json(director))
}

pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, AppError> {
    Ok(Json(GenreService::list(&state.pool).await?))
}

pub async fn read_genre(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Genre>, AppError> {
    let id = parse_id(&id_str)?;
    let genre = GenreService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("genre", id))?;
    Ok(Json(genre))
}
