// src/handlers/questions.rs

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::AnyPool;
use validator::Validate;

use crate::{
    db::{self, Backend, questions::NewQuestion},
    error::AppError,
    extract::{AppJson, AppPath, AppQuery},
    models::{
        category::{self, Category},
        question::{
            CreateQuestionRequest, CreatedResponse, DeletedResponse, Question, QuestionsResponse,
            SearchRequest,
        },
    },
    utils::pagination::{Page, PageParams},
};

/// Lists one page of all questions (ordered by id) plus every category for the sidebar.
/// Pages past the end come back empty with a 200.
pub async fn list_questions(
    State(pool): State<AnyPool>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let categories = db::categories::list_all(&pool).await?;
    let page = db::questions::list_page(&pool, Page::from(&params)).await?;

    Ok(Json(QuestionsResponse {
        status: true,
        message: "Fetched questions successfully",
        questions: page.questions,
        total_questions: page.total,
        categories: Some(category::to_map(categories)),
        // Not scoped to a category; every question carries its own.
        current_category: None,
    }))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(pool): State<AnyPool>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    db::questions::delete(&pool, id).await?;
    tracing::info!("Deleted question {}", id);

    let total = db::questions::count(&pool).await?;

    Ok(Json(DeletedResponse {
        status: true,
        message: "Question deleted successfully",
        deleted: id,
        total_questions: total,
    }))
}

/// Creates a new question.
///
/// * Malformed or incomplete bodies are rejected by the extractor (400).
/// * Blank text, overlong text or an out-of-range difficulty fail validation (422).
/// * A category that does not exist is reported by the storage layer (422).
pub async fn create_question(
    State(pool): State<AnyPool>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Unprocessable(validation_errors.to_string()));
    }

    let question = db::questions::create(
        &pool,
        NewQuestion {
            question: payload.question.trim(),
            answer: payload.answer.trim(),
            category: payload.category,
            difficulty: payload.difficulty,
        },
    )
    .await?;

    tracing::info!(
        "Created question {} in category {}",
        question.id,
        question.category
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            status: true,
            message: "New question added successfully",
            created: question.id,
            question,
        }),
    ))
}

/// Case-insensitive substring search over question text, paginated.
pub async fn search_questions(
    State(pool): State<AnyPool>,
    State(backend): State<Backend>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::BadRequest("searchTerm must not be empty".to_string()))?;

    let page = db::questions::search_page(&pool, backend, term, Page::from(&params)).await?;
    let categories = db::categories::list_all(&pool).await?;
    let current_category = shared_category(&page.questions, &categories);

    Ok(Json(QuestionsResponse {
        status: true,
        message: "Fetched questions successfully",
        questions: page.questions,
        total_questions: page.total,
        categories: None,
        current_category,
    }))
}

/// The category name shared by every question, or `None` if they differ (or there are none).
fn shared_category(questions: &[Question], categories: &[Category]) -> Option<String> {
    let (first, rest) = questions.split_first()?;
    if rest.iter().any(|q| q.category != first.category) {
        return None;
    }

    categories
        .iter()
        .find(|c| c.id == first.category)
        .map(|c| c.kind.clone())
}
