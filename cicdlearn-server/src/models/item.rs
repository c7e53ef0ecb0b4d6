//! Item record from the `items` table

use serde::Serialize;
use sqlx::FromRow;

/// Row in `items`. `id` comes from the table's SERIAL sequence.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
}
