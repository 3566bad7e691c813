use serde::Serialize;

use super::show::ShowSlot;
use crate::entities::artists;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl From<artists::Model> for ArtistInput {
    fn from(model: artists::Model) -> Self {
        Self {
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            genres: model.genres,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
            website_link: model.website_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub image_link: String,
    pub past_shows: Vec<ShowSlot>,
    pub upcoming_shows: Vec<ShowSlot>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    #[must_use]
    pub fn new(
        model: artists::Model,
        past_shows: Vec<ShowSlot>,
        upcoming_shows: Vec<ShowSlot>,
    ) -> Self {
        Self {
            id: model.id,
            name: model.name,
            genres: super::listing::split_genres(&model.genres),
            city: model.city,
            state: model.state,
            phone: model.phone,
            website: model.website_link,
            facebook_link: model.facebook_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
            image_link: model.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
