// src/models/category.rs

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: i64,

    /// Display name (e.g., "Science").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, the shape clients render as a sidebar.
/// Serializes as a JSON object with the ids as (string) keys, in ascending order.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn to_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub status: bool,
    pub message: &'static str,
    pub categories: CategoryMap,
}
