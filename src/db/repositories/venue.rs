use crate::entities::{prelude::*, shows, venues};
use crate::models::listing::{NamedRef, SearchResults};
use crate::models::venue::{VenueArea, VenueInput, VenueSummary};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashMap;
use tracing::info;

use super::{fold_term, matches_term};

pub struct VenueRepository {
    conn: DatabaseConnection,
}

impl VenueRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn apply_input(active: &mut venues::ActiveModel, input: VenueInput) {
        active.name = Set(input.name);
        active.city = Set(input.city);
        active.state = Set(input.state);
        active.address = Set(input.address);
        active.phone = Set(input.phone);
        active.image_link = Set(input.image_link);
        active.facebook_link = Set(input.facebook_link);
        active.website_link = Set(input.website_link);
        active.genres = Set(input.genres);
        active.seeking_talent = Set(input.seeking_talent);
        active.seeking_description = Set(input.seeking_description);
    }

    pub async fn create(&self, input: VenueInput) -> anyhow::Result<venues::Model> {
        let mut active = venues::ActiveModel {
            ..Default::default()
        };
        Self::apply_input(&mut active, input);

        let model = active.insert(&self.conn).await?;
        info!("Listed venue {} (ID: {})", model.name, model.id);
        Ok(model)
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<venues::Model>> {
        Ok(Venues::find_by_id(id).one(&self.conn).await?)
    }

    /// Replaces every field of the venue. Returns `None` when it doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        input: VenueInput,
    ) -> anyhow::Result<Option<venues::Model>> {
        let txn = self.conn.begin().await?;

        let Some(existing) = Venues::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        Self::apply_input(&mut active, input);
        let model = active.update(&txn).await?;

        txn.commit().await?;

        info!("Updated venue {} (ID: {})", model.name, model.id);
        Ok(Some(model))
    }

    /// Deletes by id. Shows still pointing at the venue make this fail.
    pub async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let txn = self.conn.begin().await?;
        let result = Venues::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Removed venue with ID: {}", id);
        }
        Ok(removed)
    }

    pub async fn search(&self, term: &str) -> anyhow::Result<SearchResults> {
        let term = fold_term(term);

        let rows: Vec<(i32, String)> = Venues::find()
            .select_only()
            .column(venues::Column::Id)
            .column(venues::Column::Name)
            .order_by_asc(venues::Column::Name)
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

    /// All venues grouped by `(city, state)`, each with its upcoming show count.
    pub async fn list_areas(&self, now: &str) -> anyhow::Result<Vec<VenueArea>> {
        let rows = Venues::find()
            .order_by_asc(venues::Column::State)
            .order_by_asc(venues::Column::City)
            .order_by_asc(venues::Column::Name)
            .all(&self.conn)
            .await?;

        let upcoming: HashMap<i32, i64> = Shows::find()
            .select_only()
            .column(shows::Column::VenueId)
            .column_as(shows::Column::Id.count(), "upcoming")
            .filter(shows::Column::StartTime.gt(now))
            .group_by(shows::Column::VenueId)
            .into_tuple::<(i32, i64)>()
            .all(&self.conn)
            .await?
            .into_iter()
            .collect();

        Ok(group_by_area(rows, &upcoming))
    }
}

fn group_by_area(rows: Vec<venues::Model>, upcoming: &HashMap<i32, i64>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for venue in rows {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming
                .get(&venue.id)
                .and_then(|n| u64::try_from(*n).ok())
                .unwrap_or(0),
        };

        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(summary);
            }
            _ => areas.push(VenueArea {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> venues::Model {
        venues::Model {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: String::new(),
            phone: String::new(),
            image_link: String::new(),
            facebook_link: String::new(),
            website_link: String::new(),
            genres: String::new(),
            seeking_talent: false,
            seeking_description: String::new(),
        }
    }

    #[test]
    fn test_group_by_area_merges_adjacent_city_state() {
        let rows = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
        ];
        let upcoming = HashMap::from([(3, 1)]);

        let areas = group_by_area(rows, &upcoming);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 0);
        assert_eq!(areas[0].venues[1].num_upcoming_shows, 1);
        assert_eq!(areas[1].state, "NY");
    }

    #[test]
    fn test_same_city_different_state_is_separate_area() {
        let rows = vec![
            venue(1, "A", "Springfield", "IL"),
            venue(2, "B", "Springfield", "MO"),
        ];
        let areas = group_by_area(rows, &HashMap::new());
        assert_eq!(areas.len(), 2);
    }
}
