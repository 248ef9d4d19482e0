//! Values that can be bound to a SQLite query.

use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{Sqlite, SqliteArguments};

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;
pub type SqliteQueryAs<'q, O> = QueryAs<'q, Sqlite, O, SqliteArguments<'q>>;

/// A column value carried alongside generated SQL until it is bound.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn bind<'q>(self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        match self {
            SqlValue::Null => query.bind(None::<i64>),
            SqlValue::Int(n) => query.bind(n),
            SqlValue::Real(n) => query.bind(n),
            SqlValue::Text(s) => query.bind(s),
        }
    }

    pub fn bind_as<'q, O>(self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        match self {
            SqlValue::Null => query.bind(None::<i64>),
            SqlValue::Int(n) => query.bind(n),
            SqlValue::Real(n) => query.bind(n),
            SqlValue::Text(s) => query.bind(s),
        }
    }
}

impl From<Option<i64>> for SqlValue {
    fn from(v: Option<i64>) -> Self {
        v.map(SqlValue::Int).unwrap_or(SqlValue::Null)
    }
}

impl From<Option<f64>> for SqlValue {
    fn from(v: Option<f64>) -> Self {
        v.map(SqlValue::Real).unwrap_or(SqlValue::Null)
    }
}

impl From<Option<String>> for SqlValue {
    fn from(v: Option<String>) -> Self {
        v.map(SqlValue::Text).unwrap_or(SqlValue::Null)
    }
}
