// src/handlers/fallback.rs

use crate::error::AppError;

/// No route matches the path.
pub async fn not_found() -> AppError {
    AppError::NotFound("resource not found".to_string())
}

/// The path exists but not for this HTTP method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
