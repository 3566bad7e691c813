//! `SeaORM` implementation of the `TriviaService` trait.

use crate::config::Config;
use crate::constants::trivia::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::db::Store;
use crate::models::trivia::{
    CategoryMap, CategoryQuestions, NewQuestion, QuestionDto, QuestionListing, category_map,
};
use crate::services::trivia_service::{TriviaError, TriviaService};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct SeaOrmTriviaService {
    store: Store,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmTriviaService {
    #[must_use]
    pub const fn new(store: Store, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }

    fn validate_new_question(input: &NewQuestion) -> Result<(), TriviaError> {
        if input.question.trim().is_empty() {
            return Err(TriviaError::Validation("Question text is required".to_string()));
        }
        if input.answer.trim().is_empty() {
            return Err(TriviaError::Validation("Answer is required".to_string()));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&input.difficulty) {
            return Err(TriviaError::Validation(format!(
                "Difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl TriviaService for SeaOrmTriviaService {
    async fn categories(&self) -> Result<CategoryMap, TriviaError> {
        let categories = category_map(self.store.list_categories().await?);
        if categories.is_empty() {
            return Err(TriviaError::NotFound("No categories found".to_string()));
        }
        Ok(categories)
    }

    async fn questions_page(&self, page: u64) -> Result<QuestionListing, TriviaError> {
        if page == 0 {
            return Err(TriviaError::PageNotFound);
        }

        let per_page = self.config.read().await.trivia.questions_per_page;
        let result = self.store.question_page(page, per_page).await?;
        if result.questions.is_empty() {
            return Err(TriviaError::PageNotFound);
        }

        let categories = category_map(self.store.list_categories().await?);

        Ok(QuestionListing {
            questions: result.questions,
            total_questions: result.total_questions,
            categories,
        })
    }

    async fn delete_question(&self, id: i32) -> Result<i32, TriviaError> {
        if self.store.delete_question(id).await? {
            Ok(id)
        } else {
            Err(TriviaError::Unprocessable(format!("Question {id} does not exist")))
        }
    }

    async fn create_question(&self, input: NewQuestion) -> Result<QuestionDto, TriviaError> {
        Self::validate_new_question(&input)?;

        if self.store.get_category(input.category_id).await?.is_none() {
            return Err(TriviaError::Unprocessable(format!(
                "Category {} does not exist",
                input.category_id
            )));
        }

        let model = self.store.create_question(input).await?;
        Ok(model.into())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<QuestionDto>, TriviaError> {
        let rows = self.store.search_questions(term).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn questions_for_category(
        &self,
        category_id: i32,
    ) -> Result<CategoryQuestions, TriviaError> {
        let category = self
            .store
            .get_category(category_id)
            .await?
            .ok_or_else(|| {
                TriviaError::Validation(format!("Category {category_id} does not exist"))
            })?;

        let questions: Vec<QuestionDto> = self
            .store
            .questions_by_category(category_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            current_category: category.category_type,
        })
    }

    async fn next_quiz_question(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> Result<Option<QuestionDto>, TriviaError> {
        let candidates = self.store.quiz_candidates(category_id, previous).await?;
        let picked = candidates.choose(&mut rand::rng()).cloned();
        Ok(picked.map(Into::into))
    }
}
