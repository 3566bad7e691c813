use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use std::sync::Arc;

use super::{
    ApiError, ApiResponse, AppState, CreateQuestionRequest, CreatedPayload, DeletedPayload,
    PageQuery, QuestionsPayload, SearchPayload, SearchQuestionsRequest,
};
use crate::api::validation::{require_int, require_text, validate_difficulty, validate_page};
use crate::models::trivia::NewQuestion;

/// `GET /questions?page=N`
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<QuestionsPayload>>, ApiError> {
    let Query(query) = query?;
    let page = validate_page(query.page);

    let listing = state.trivia_service().questions_page(page).await?;

    Ok(Json(ApiResponse::success(QuestionsPayload {
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
        current_category: None,
    })))
}

/// `DELETE /questions/{id}`
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<DeletedPayload>>, ApiError> {
    let Path(id) = id?;

    let deleted = state.trivia_service().delete_question(id).await?;
    Ok(Json(ApiResponse::success(DeletedPayload { deleted })))
}

/// `POST /questions`
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CreatedPayload>>, ApiError> {
    let Json(payload) = payload?;

    let input = NewQuestion {
        question: require_text("question", payload.question)?,
        answer: require_text("answer", payload.answer)?,
        difficulty: validate_difficulty(require_int("difficulty", payload.difficulty.as_ref())?)?,
        category_id: require_int("category", payload.category.as_ref())?,
    };

    let question = state.trivia_service().create_question(input).await?;

    Ok(Json(ApiResponse::success(CreatedPayload {
        created: question.id,
        question,
    })))
}

/// `POST /questions/search`
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SearchPayload>>, ApiError> {
    let Json(payload) = payload?;
    let term = payload
        .search_term
        .ok_or_else(|| ApiError::validation("Missing field: searchTerm"))?;

    let questions = state.trivia_service().search_questions(&term).await?;

    Ok(Json(ApiResponse::success(SearchPayload {
        total_questions: questions.len(),
        questions,
        current_category: None,
    })))
}
