//! Movie handlers: list, create, read, replace, patch, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{Movie, MovieFilter, MovieInput, MoviePatch};
use crate::service::{MovieService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// An empty value counts as absent; anything else must be an integer.
fn query_int(params: &HashMap<String, String>, key: &str) -> Result<Option<i64>, AppError> {
    match params.get(key).map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{} must be an integer", key))),
    }
}

fn parse_filter(params: &HashMap<String, String>) -> Result<MovieFilter, AppError> {
    Ok(MovieFilter {
        genre_id: query_int(params, "genre_id")?,
        director_id: query_int(params, "director_id")?,
    })
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let filter = parse_filter(&params)?;
    let movies = MovieService::list(&state.pool, &filter).await?;
    Ok(Json(movies))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MovieInput>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate(&input)?;
    let id = MovieService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/movies/{}", id))]))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let id = parse_id(&id_str)?;
    let movie = MovieService::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("movie", id))?;
    Ok(Json(movie))
}

/// PUT: full replace. Keys missing from the body are stored as null.
pub async fn replace(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(input): JsonBody<MovieInput>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    RequestValidator::validate(&input)?;
    if !MovieService::replace(&state.pool, id, &input).await? {
        return Err(AppError::not_found("movie", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(patch): JsonBody<MoviePatch>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    RequestValidator::validate_partial(&patch)?;
    if !MovieService::patch(&state.pool, id, &patch).await? {
        return Err(AppError::not_found("movie", id));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !MovieService::delete(&state.pool, id).await? {
        return Err(AppError::not_found("movie", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
