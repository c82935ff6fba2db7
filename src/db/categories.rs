// src/db/categories.rs

use sqlx::AnyPool;

use super::StoreResult;
use crate::models::category::Category;

/// Categories inserted on first start.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn list_all(pool: &AnyPool) -> StoreResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(categories)
}

pub async fn find(pool: &AnyPool, id: i64) -> StoreResult<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

/// Case-insensitive lookup by display name.
pub async fn find_by_type(pool: &AnyPool, name: &str) -> StoreResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, type FROM categories WHERE LOWER(type) = LOWER($1) ORDER BY id LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(category)
}

/// Inserts [`DEFAULT_CATEGORIES`] when the table is empty.
/// Returns the number of rows inserted.
pub async fn seed_defaults(pool: &AnyPool) -> StoreResult<u64> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for name in DEFAULT_CATEGORIES {
        inserted += sqlx::query("INSERT INTO categories (type) VALUES ($1)")
            .bind(name)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}
