use serde::{Deserialize, Serialize};

use crate::models::trivia::{CategoryMap, QuestionDto};

/// Success envelope: `{"success": true, ...payload}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status,
            message: message.into(),
        }
    }
}

/// A number the trivia front-end may send either as JSON number or as a numeric string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FlexibleInt {
    Number(i64),
    Text(String),
}

impl FlexibleInt {
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Number(n) => i32::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionsPayload {
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchPayload {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsPayload {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedPayload {
    pub deleted: i32,
}

#[derive(Debug, Serialize)]
pub struct CreatedPayload {
    pub created: i32,
    pub question: QuestionDto,
}

#[derive(Debug, Serialize)]
pub struct QuizPayload {
    pub question: Option<QuestionDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<FlexibleInt>,
    pub category: Option<FlexibleInt>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: FlexibleInt,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_is_flat() {
        let body =
            serde_json::to_value(ApiResponse::success(DeletedPayload { deleted: 7 })).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "deleted": 7}));
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorResponse::new(404, "Page Not Found")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": 404, "message": "Page Not Found"})
        );
    }

    #[test]
    fn test_quiz_category_id_number_or_string() {
        let numeric: QuizRequest = serde_json::from_str(
            r#"{"previous_questions":[],"quiz_category":{"type":"Science","id":1}}"#,
        )
        .unwrap();
        let text: QuizRequest =
            serde_json::from_str(r#"{"quiz_category":{"type":"click","id":"0"}}"#).unwrap();

        assert_eq!(numeric.quiz_category.unwrap().id.as_i32(), Some(1));
        assert_eq!(text.quiz_category.unwrap().id.as_i32(), Some(0));
        assert!(text.previous_questions.is_empty());
    }
}
