use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, QuizPayload, QuizRequest};

/// `POST /quizzes`
///
/// Returns a random unseen question, or `null` once the category is exhausted.
pub async fn next_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuizPayload>>, ApiError> {
    let Json(payload) = payload?;

    let category = payload
        .quiz_category
        .ok_or_else(|| ApiError::validation("Missing field: quiz_category"))?;
    let category_id = category
        .id
        .as_i32()
        .ok_or_else(|| ApiError::validation("quiz_category.id must be an integer"))?;

    let question = state
        .trivia_service()
        .next_quiz_question(category_id, &payload.previous_questions)
        .await?;

    Ok(Json(ApiResponse::success(QuizPayload { question })))
}
