//! Domain service for the trivia question bank.

use crate::models::trivia::{
    CategoryMap, CategoryQuestions, NewQuestion, QuestionDto, QuestionListing,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("{0}")]
    NotFound(String),

    #[error("Page Not Found")]
    PageNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for TriviaError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait TriviaService: Send + Sync {
    /// All categories keyed by id. Fails with `NotFound` when there are none.
    async fn categories(&self) -> Result<CategoryMap, TriviaError>;

    /// One page of questions (1-based). An empty page is `PageNotFound`.
    async fn questions_page(&self, page: u64) -> Result<QuestionListing, TriviaError>;

    /// Deletes a question and returns its id.
    async fn delete_question(&self, id: i32) -> Result<i32, TriviaError>;

    async fn create_question(&self, input: NewQuestion) -> Result<QuestionDto, TriviaError>;

    /// Case-insensitive substring search over question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<QuestionDto>, TriviaError>;

    async fn questions_for_category(
        &self,
        category_id: i32,
    ) -> Result<CategoryQuestions, TriviaError>;

    /// A random question not in `previous`. Category `0` draws from every category.
    async fn next_quiz_question(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> Result<Option<QuestionDto>, TriviaError>;
}
