// src/handlers/categories.rs

use axum::{
    Json,
    extract::State,
    response::IntoResponse,
};
use sqlx::AnyPool;

use crate::{
    db,
    error::AppError,
    extract::{AppPath, AppQuery},
    models::{
        category::{self, CategoriesResponse},
        question::QuestionsResponse,
    },
    utils::pagination::{Page, PageParams},
};

/// Lists all categories as an id -> type map.
/// An empty table is still a successful (empty) listing.
pub async fn list_categories(State(pool): State<AnyPool>) -> Result<impl IntoResponse, AppError> {
    let categories = db::categories::list_all(&pool).await?;

    Ok(Json(CategoriesResponse {
        status: true,
        message: "Fetched categories successfully",
        categories: category::to_map(categories),
    }))
}

/// Lists one page of the questions belonging to a category.
pub async fn list_category_questions(
    State(pool): State<AnyPool>,
    AppPath(id): AppPath<i64>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let category = db::categories::find(&pool, id)
        .await?
        .ok_or(AppError::NotFound(format!("category {} not found", id)))?;

    let page = db::questions::list_page_in_category(&pool, category.id, Page::from(&params)).await?;

    Ok(Json(QuestionsResponse {
        status: true,
        message: "Fetched questions successfully",
        questions: page.questions,
        total_questions: page.total,
        categories: None,
        current_category: Some(category.kind),
    }))
}
