use crate::constants::trivia::ALL_CATEGORIES;
use crate::entities::{prelude::*, questions};
use crate::models::trivia::{NewQuestion, QuestionPage};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::{fold_term, matches_term};

pub struct QuestionRepository {
    conn: DatabaseConnection,
}

impl QuestionRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// One page of questions ordered by id. `page` is 1-based; pages outside
    /// `1..=number_of_pages` come back empty without querying rows.
    pub async fn page(&self, page: u64, per_page: u64) -> anyhow::Result<QuestionPage> {
        let paginator = Questions::find()
            .order_by_asc(questions::Column::Id)
            .paginate(&self.conn, per_page.max(1));

        let counts = paginator.num_items_and_pages().await?;
        if page == 0 || page > counts.number_of_pages {
            return Ok(QuestionPage {
                questions: Vec::new(),
                total_questions: counts.number_of_items,
            });
        }

        let rows = paginator.fetch_page(page - 1).await?;

        Ok(QuestionPage {
            questions: rows.into_iter().map(Into::into).collect(),
            total_questions: counts.number_of_items,
        })
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        Ok(Questions::find().count(&self.conn).await?)
    }

    pub async fn search(&self, term: &str) -> anyhow::Result<Vec<questions::Model>> {
        let term = fold_term(term);

        let rows = Questions::find()
            .order_by_asc(questions::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|q| matches_term(&q.question, &term))
            .collect())
    }

    pub async fn by_category(&self, category_id: i32) -> anyhow::Result<Vec<questions::Model>> {
        Ok(Questions::find()
            .filter(questions::Column::CategoryId.eq(category_id))
            .order_by_asc(questions::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn create(&self, input: NewQuestion) -> anyhow::Result<questions::Model> {
        let active = questions::ActiveModel {
            question: Set(input.question),
            answer: Set(input.answer),
            difficulty: Set(input.difficulty),
            category_id: Set(input.category_id),
            ..Default::default()
        };

        let model = active.insert(&self.conn).await?;
        info!("Created question {} in category {}", model.id, model.category_id);
        Ok(model)
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let txn = self.conn.begin().await?;
        let result = Questions::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Deleted question with ID: {}", id);
        }
        Ok(removed)
    }

    /// Questions still eligible for a quiz round.
    pub async fn quiz_candidates(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> anyhow::Result<Vec<questions::Model>> {
        let mut condition = Condition::all();
        if category_id != ALL_CATEGORIES {
            condition = condition.add(questions::Column::CategoryId.eq(category_id));
        }
        if !previous.is_empty() {
            condition = condition.add(questions::Column::Id.is_not_in(previous.iter().copied()));
        }

        Ok(Questions::find()
            .filter(condition)
            .order_by_asc(questions::Column::Id)
            .all(&self.conn)
            .await?)
    }
}
