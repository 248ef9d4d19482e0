use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genre` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: Option<String>,
}
