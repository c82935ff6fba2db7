// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::prelude::FromRow;
use validator::Validate;

use super::category::CategoryMap;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Id of the owning category.
    pub category: i64,
    pub difficulty: i64,
}

/// DTO for creating a new question.
/// `category` and `difficulty` accept either JSON numbers or numeric strings.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(max = 1000), custom(function = validate_not_blank))]
    pub question: String,
    #[validate(length(max = 1000), custom(function = validate_not_blank))]
    pub answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i64,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("must_not_be_blank"));
    }
    Ok(())
}

/// Body of `POST /questions/search`. Older clients send `search` instead of `searchTerm`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search", default)]
    pub search_term: Option<String>,
}

/// Envelope shared by the paginated question listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub status: bool,
    pub message: &'static str,
    pub questions: Vec<Question>,
    /// Size of the whole result set, not just this page.
    pub total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub status: bool,
    pub message: &'static str,
    pub created: i64,
    pub question: Question,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub status: bool,
    pub message: &'static str,
    pub deleted: i64,
    pub total_questions: i64,
}
