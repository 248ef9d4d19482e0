//! Load directors, genres and movies from a JSON fixture file.
//!
//! Directors and genres have no write endpoints, so a fresh database gets its
//! reference data from here.

use crate::error::SeedError;
use crate::models::{Director, Genre, MovieInput};
use crate::service::{MovieService, RequestValidator};
use serde::Deserialize;
use sqlx::SqlitePool;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seed {
    #[serde(default)]
    pub directors: Vec<Director>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub movies: Vec<MovieInput>,
}

/// Counts of rows written by [`apply_seed`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub directors: usize,
    pub genres: usize,
    pub movies: usize,
}

pub async fn load_seed(path: impl AsRef<Path>) -> Result<Seed, SeedError> {
    let text = tokio::fs::read_to_string(path.as_ref()).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Write a seed in one transaction. Directors and genres keep their ids and
/// replace any existing row with the same id; movies always get new ids.
pub async fn apply_seed(pool: &SqlitePool, seed: &Seed) -> Result<SeedSummary, SeedError> {
    for d in &seed.directors {
        RequestValidator::validate_name(d.name.as_deref())?;
    }
    for g in &seed.genres {
        RequestValidator::validate_name(g.name.as_deref())?;
    }
    for m in &seed.movies {
        RequestValidator::validate(m)?;
    }

    let mut tx = pool.begin().await?;
    for d in &seed.directors {
        sqlx::query("INSERT OR REPLACE INTO director (id, name) VALUES (?, ?)")
            .bind(d.id)
            .bind(&d.name)
            .execute(&mut *tx)
            .await?;
    }
    for g in &seed.genres {
        sqlx::query("INSERT OR REPLACE INTO genre (id, name) VALUES (?, ?)")
            .bind(g.id)
            .bind(&g.name)
            .execute(&mut *tx)
            .await?;
    }
    for m in &seed.movies {
        MovieService::create_tx(&mut *tx, m).await?;
    }
    tx.commit().await?;

    let summary = SeedSummary {
        directors: seed.directors.len(),
        genres: seed.genres.len(),
        movies: seed.movies.len(),
    };
    tracing::info!(
        directors = summary.directors,
        genres = summary.genres,
        movies = summary.movies,
        "seed applied"
    );
    Ok(summary)
}
