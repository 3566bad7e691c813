use crate::entities::{categories, prelude::*};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

pub struct CategoryRepository {
    conn: DatabaseConnection,
}

impl CategoryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<categories::Model>> {
        Ok(Categories::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<categories::Model>> {
        Ok(Categories::find_by_id(id).one(&self.conn).await?)
    }
}
