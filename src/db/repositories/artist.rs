use crate::entities::{artists, prelude::*};
use crate::models::artist::ArtistInput;
use crate::models::listing::{NamedRef, SearchResults};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};

use super::{fold_term, matches_term};
use tracing::info;

pub struct ArtistRepository {
    conn: DatabaseConnection,
}

impl ArtistRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn apply_input(active: &mut artists::ActiveModel, input: ArtistInput) {
        active.name = Set(input.name);
        active.city = Set(input.city);
        active.state = Set(input.state);
        active.phone = Set(input.phone);
        active.genres = Set(input.genres);
        active.image_link = Set(input.image_link);
        active.facebook_link = Set(input.facebook_link);
        active.website_link = Set(input.website_link);
        active.seeking_venue = Set(input.seeking_venue);
        active.seeking_description = Set(input.seeking_description);
    }

    pub async fn create(&self, input: ArtistInput) -> anyhow::Result<artists::Model> {
        let mut active = artists::ActiveModel {
            ..Default::default()
        };
        Self::apply_input(&mut active, input);

        let model = active.insert(&self.conn).await?;
        info!("Listed artist {} (ID: {})", model.name, model.id);
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<artists::Model>> {
        Ok(Artists::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<NamedRef>> {
        let rows = Artists::find()
            .order_by_asc(artists::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|a| NamedRef {
                id: a.id,
                name: a.name,
            })
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        input: ArtistInput,
    ) -> anyhow::Result<Option<artists::Model>> {
        let txn = self.conn.begin().await?;

        let Some(existing) = Artists::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        Self::apply_input(&mut active, input);
        let model = active.update(&txn).await?;

        txn.commit().await?;

        info!("Updated artist {} (ID: {})", model.name, model.id);
        Ok(Some(model))
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let txn = self.conn.begin().await?;
        let result = Artists::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Removed artist with ID: {}", id);
        }
        Ok(removed)
    }

    pub async fn search(&self, term: &str) -> anyhow::Result<SearchResults> {
        let term = fold_term(term);

        let rows: Vec<(i32, String)> = Artists::find()
            .select_only()
            .column(artists::Column::Id)
            .column(artists::Column::Name)
            .order_by_asc(artists::Column::Name)
            .into_tuple()
            .all(&self.conn)
            .await?;

        Ok(SearchResults::from_refs(
            rows.into_iter()
                .filter(|(_, name)| matches_term(name, &term))
                .map(|(id, name)| NamedRef { id, name })
                .collect(),
        ))
    }
}
