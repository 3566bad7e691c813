use crate::entities::{artists, prelude::*, shows, venues};
use crate::models::show::{ShowInput, ShowListing, ShowSlot};
use crate::services::schedule::partition_by_start;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, input: ShowInput) -> anyhow::Result<shows::Model> {
        let active = shows::ActiveModel {
            venue_id: Set(input.venue_id),
            artist_id: Set(input.artist_id),
            start_time: Set(input.start_time),
            ..Default::default()
        };

        let model = active.insert(&self.conn).await?;
        info!(
            "Listed show {} (venue {}, artist {}) at {}",
            model.id, model.venue_id, model.artist_id, model.start_time
        );
        Ok(model)
    }

    pub async fn list(&self) -> anyhow::Result<Vec<ShowListing>> {
        let rows = Shows::find()
            .order_by_asc(shows::Column::StartTime)
            .find_also_related(Venues)
            .all(&self.conn)
            .await?;

        let artist_ids: Vec<i32> = rows.iter().map(|(s, _)| s.artist_id).collect();
        let artists: std::collections::HashMap<i32, artists::Model> = Artists::find()
            .filter(artists::Column::Id.is_in(artist_ids))
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(show, venue)| {
                let venue = venue?;
                let artist = artists.get(&show.artist_id)?;
                Some(ShowListing {
                    venue_id: venue.id,
                    venue_name: venue.name,
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect())
    }

    /// A venue's shows as `(past, upcoming)`, each slot naming the artist.
    pub async fn for_venue(
        &self,
        venue_id: i32,
        now: &str,
    ) -> anyhow::Result<(Vec<ShowSlot>, Vec<ShowSlot>)> {
        let rows = Shows::find()
            .filter(shows::Column::VenueId.eq(venue_id))
            .order_by_asc(shows::Column::StartTime)
            .find_also_related(Artists)
            .all(&self.conn)
            .await?;

        let slots = rows
            .into_iter()
            .filter_map(|(show, artist)| {
                artist.map(|a| ShowSlot {
                    counterpart_id: a.id,
                    counterpart_name: a.name,
                    counterpart_image_link: a.image_link,
                    start_time: show.start_time,
                })
            })
            .collect();

        Ok(partition_by_start(slots, now, |s| s.start_time.as_str()))
    }

    /// An artist's shows as `(past, upcoming)`, each slot naming the venue.
    pub async fn for_artist(
        &self,
        artist_id: i32,
        now: &str,
    ) -> anyhow::Result<(Vec<ShowSlot>, Vec<ShowSlot>)> {
        let rows = Shows::find()
            .filter(shows::Column::ArtistId.eq(artist_id))
            .order_by_asc(shows::Column::StartTime)
            .find_also_related(Venues)
            .all(&self.conn)
            .await?;

        let slots = rows
            .into_iter()
            .filter_map(|(show, venue): (shows::Model, Option<venues::Model>)| {
                venue.map(|v| ShowSlot {
                    counterpart_id: v.id,
                    counterpart_name: v.name,
                    counterpart_image_link: v.image_link,
                    start_time: show.start_time,
                })
            })
            .collect();

        Ok(partition_by_start(slots, now, |s| s.start_time.as_str()))
    }
}
