// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
/// Categories are seeded by migration and read-only from the service's
/// perspective.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display name, e.g. "Science".
    pub name: String,

    /// Type label. Serialized as 'type' since `type` is a reserved keyword
    /// in Rust.
    #[serde(rename = "type")]
    pub category_type: String,
}
