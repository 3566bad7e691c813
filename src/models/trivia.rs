use serde::Serialize;
use std::collections::BTreeMap;

use crate::entities::{categories, questions};

/// Category id to label, serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<i32, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl From<questions::Model> for QuestionDto {
    fn from(model: questions::Model) -> Self {
        Self {
            id: model.id,
            question: model.question,
            answer: model.answer,
            difficulty: model.difficulty,
            category: model.category_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
}

/// A page of the question bank together with every category.
#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub categories: CategoryMap,
}

#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: String,
}

#[must_use]
pub fn category_map(rows: Vec<categories::Model>) -> CategoryMap {
    rows.into_iter().map(|c| (c.id, c.category_type)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_serializes_as_object() {
        let map = category_map(vec![
            categories::Model { id: 2, category_type: "Art".to_string() },
            categories::Model { id: 1, category_type: "Science".to_string() },
        ]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["1"], "Science");
        assert_eq!(json["2"], "Art");
    }

    #[test]
    fn test_question_dto_uses_category_field() {
        let dto = QuestionDto::from(questions::Model {
            id: 9,
            question: "What boxer's original name is Cassius Clay?".to_string(),
            answer: "Muhammad Ali".to_string(),
            difficulty: 1,
            category_id: 4,
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["category"], 4);
        assert_eq!(json["answer"], "Muhammad Ali");
    }
}
