use serde::Serialize;

use super::show::ShowSlot;
use crate::entities::venues;

/// Field values for creating or fully replacing a venue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl From<venues::Model> for VenueInput {
    fn from(model: venues::Model) -> Self {
        Self {
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            genres: model.genres,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// Venues sharing one city/state pair.
#[derive(Debug, Clone, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub image_link: String,
    pub past_shows: Vec<ShowSlot>,
    pub upcoming_shows: Vec<ShowSlot>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    #[must_use]
    pub fn new(
        model: venues::Model,
        past_shows: Vec<ShowSlot>,
        upcoming_shows: Vec<ShowSlot>,
    ) -> Self {
        Self {
            id: model.id,
            name: model.name,
            genres: super::listing::split_genres(&model.genres),
            address: model.address,
            city: model.city,
            state: model.state,
            phone: model.phone,
            website: model.website_link,
            facebook_link: model.facebook_link,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
            image_link: model.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
