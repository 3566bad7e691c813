use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CategoriesPayload, CategoryQuestionsPayload};
use crate::api::validation::validate_id;

/// `GET /categories`
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CategoriesPayload>>, ApiError> {
    let categories = state.trivia_service().categories().await?;
    Ok(Json(ApiResponse::success(CategoriesPayload { categories })))
}

/// `GET /categories/{id}/questions`
///
/// Every question in one category. An unknown category is a bad request.
pub async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<CategoryQuestionsPayload>>, ApiError> {
    let Path(id) = id?;
    let id = validate_id(id, "category")?;

    let result = state.trivia_service().questions_for_category(id).await?;

    Ok(Json(ApiResponse::success(CategoryQuestionsPayload {
        questions: result.questions,
        total_questions: result.total_questions,
        current_category: result.current_category,
    })))
}
