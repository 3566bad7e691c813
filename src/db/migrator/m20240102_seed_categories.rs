use crate::entities::{categories, prelude::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Reference categories the trivia front-end expects, keyed by their fixed ids.
const CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = sea_orm_migration::sea_query::Query::insert()
            .into_table(Categories)
            .columns([categories::Column::Id, categories::Column::CategoryType])
            .to_owned();

        for (id, label) in CATEGORIES {
            insert.values_panic([(*id).into(), (*label).into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i32> = CATEGORIES.iter().map(|(id, _)| *id).collect();

        let delete = sea_orm_migration::sea_query::Query::delete()
            .from_table(Categories)
            .and_where(Expr::col(categories::Column::Id).is_in(ids))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
