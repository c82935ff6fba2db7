// src/handlers/quizzes.rs

use std::collections::HashSet;

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::AnyPool;

use crate::{
    db,
    error::AppError,
    extract::AppJson,
    models::quiz::{self, QuizRequest, QuizResponse, QuizScope},
};

/// Returns a random question the player has not seen yet.
///
/// * `quiz_category` narrows the pool to one category (by id, or by name);
///   no category, `id: 0` or the "click"/"all" sentinel mean any category.
/// * Ids listed in `previous_questions` are never returned.
/// * 404 when the category does not exist or nothing unseen is left.
pub async fn next_question(
    State(pool): State<AnyPool>,
    AppJson(payload): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category_id = match payload.scope() {
        QuizScope::Any => None,
        QuizScope::CategoryId(id) => {
            let category = db::categories::find(&pool, id)
                .await?
                .ok_or(AppError::NotFound(format!("category {} not found", id)))?;
            Some(category.id)
        }
        QuizScope::CategoryName(name) => {
            let category = db::categories::find_by_type(&pool, &name)
                .await?
                .ok_or(AppError::NotFound(format!("category '{}' not found", name)))?;
            Some(category.id)
        }
    };

    let candidates = db::questions::list_all(&pool, category_id).await?;
    let previous: HashSet<i64> = payload.previous_questions.iter().copied().collect();

    let question = quiz::select_next(&candidates, &previous, &mut rand::thread_rng())
        .cloned()
        .ok_or(AppError::NotFound("no unseen questions remain".to_string()))?;

    tracing::debug!(
        "Quiz picked question {} ({} previously seen)",
        question.id,
        previous.len()
    );

    Ok(Json(QuizResponse {
        status: true,
        question,
    }))
}
