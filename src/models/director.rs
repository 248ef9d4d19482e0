use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `director` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Director {
    pub id: i64,
    pub name: Option<String>,
}
