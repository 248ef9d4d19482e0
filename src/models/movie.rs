//! Movie entity: the joined row, its JSON representation, and request bodies.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::models::{Director, Genre};
use crate::sql::SqlValue;

/// Mutable movie columns, in table order.
pub const MOVIE_COLUMNS: [&str; 7] = [
    "title",
    "description",
    "trailer",
    "year",
    "rating",
    "genre_id",
    "director_id",
];

/// A `movie` row LEFT JOINed with its genre and director.
///
/// `genre_ref` / `director_ref` are the joined primary keys: `None` when the
/// foreign key is null or points at a row that does not exist.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
    pub genre_ref: Option<i64>,
    pub genre_name: Option<String>,
    pub director_ref: Option<i64>,
    pub director_name: Option<String>,
}

/// Movie as served by the API. Related entities are embedded when they resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<Director>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            description: row.description,
            trailer: row.trailer,
            year: row.year,
            rating: row.rating,
            genre_id: row.genre_id,
            director_id: row.director_id,
            genre: row.genre_ref.map(|id| Genre {
                id,
                name: row.genre_name,
            }),
            director: row.director_ref.map(|id| Director {
                id,
                name: row.director_name,
            }),
        }
    }
}

/// Body for POST and PUT. A missing key deserializes to `None` and is stored as NULL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

impl MovieInput {
    /// Every mutable column paired with its new value.
    pub fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", self.title.clone().into()),
            ("description", self.description.clone().into()),
            ("trailer", self.trailer.clone().into()),
            ("year", self.year.into()),
            ("rating", self.rating.into()),
            ("genre_id", self.genre_id.into()),
            ("director_id", self.director_id.into()),
        ]
    }
}

/// Body for PATCH.
///
/// The outer `Option` records whether the key was sent at all; the inner one is
/// the value, so `{"year": null}` clears the year while `{}` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoviePatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub year: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub genre_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub director_id: Option<Option<i64>>,
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl MoviePatch {
    /// Only the columns that were present in the request body.
    pub fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        let mut out: Vec<(&'static str, SqlValue)> = Vec::new();
        if let Some(v) = &self.title {
            out.push(("title", v.clone().into()));
        }
        if let Some(v) = &self.description {
            out.push(("description", v.clone().into()));
        }
        if let Some(v) = &self.trailer {
            out.push(("trailer", v.clone().into()));
        }
        if let Some(v) = self.year {
            out.push(("year", v.into()));
        }
        if let Some(v) = self.rating {
            out.push(("rating", v.into()));
        }
        if let Some(v) = self.genre_id {
            out.push(("genre_id", v.into()));
        }
        if let Some(v) = self.director_id {
            out.push(("director_id", v.into()));
        }
        out
    }
}

/// Exact-match filters for the movie list. Supplied conditions are ANDed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}
