//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the movie table.

use crate::models::MovieFilter;
use crate::sql::SqlValue;

/// Quote identifier for SQLite (safe: only fixed column names reach here).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlValue) {
        self.params.push(v);
    }
}

/// Movie columns plus the joined genre and director, aliased to match `MovieRow`.
const MOVIE_SELECT: &str = "SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating, \
     m.genre_id, m.director_id, \
     g.id AS genre_ref, g.name AS genre_name, \
     d.id AS director_ref, d.name AS director_name \
     FROM movie m \
     LEFT JOIN genre g ON g.id = m.genre_id \
     LEFT JOIN director d ON d.id = m.director_id";

/// SELECT movies with exact-match filters. Every supplied condition must hold.
pub fn select_movies(filter: &MovieFilter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    if let Some(genre_id) = filter.genre_id {
        q.push_param(SqlValue::Int(genre_id));
        where_parts.push("m.genre_id = ?");
    }
    if let Some(director_id) = filter.director_id {
        q.push_param(SqlValue::Int(director_id));
        where_parts.push("m.director_id = ?");
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!("{}{} ORDER BY m.id", MOVIE_SELECT, where_clause);
    q
}

/// SELECT one movie by id.
pub fn select_movie_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(SqlValue::Int(id));
    q.sql = format!("{} WHERE m.id = ?", MOVIE_SELECT);
    q
}

/// INSERT with the given columns; the id is assigned by the database.
pub fn insert_movie(assignments: Vec<(&str, SqlValue)>) -> QueryBuf {
    let mut q = QueryBuf::new();
    if assignments.is_empty() {
        q.sql = "INSERT INTO movie DEFAULT VALUES".to_string();
        return q;
    }
    let mut cols = Vec::with_capacity(assignments.len());
    for (col, val) in assignments {
        cols.push(quoted(col));
        q.push_param(val);
    }
    let placeholders = vec!["?"; cols.len()].join(", ");
    q.sql = format!(
        "INSERT INTO movie ({}) VALUES ({})",
        cols.join(", "),
        placeholders
    );
    q
}

/// UPDATE by id: SET only the given columns. Returns `None` when there is nothing to set.
pub fn update_movie(id: i64, assignments: Vec<(&str, SqlValue)>) -> Option<QueryBuf> {
    if assignments.is_empty() {
        return None;
    }
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(assignments.len());
    for (col, val) in assignments {
        sets.push(format!("{} = ?", quoted(col)));
        q.push_param(val);
    }
    q.push_param(SqlValue::Int(id));
    q.sql = format!("UPDATE movie SET {} WHERE id = ?", sets.join(", "));
    Some(q)
}

/// DELETE by id.
pub fn delete_movie(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(SqlValue::Int(id));
    q.sql = "DELETE FROM movie WHERE id = ?".to_string();
    q
}
