//! Decoding of urlencoded form posts.
//!
//! Forms arrive as raw `(name, value)` pairs so repeated fields, like the
//! genre multi-select, keep every value.

use std::collections::HashMap;
use thiserror::Error;

use crate::constants::forms::TRUTHY;
use crate::models::artist::ArtistInput;
use crate::models::show::ShowInput;
use crate::models::venue::VenueInput;
use crate::services::schedule::{ScheduleError, normalize_start_time};

pub type FormPairs = Vec<(String, String)>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error(transparent)]
    StartTime(#[from] ScheduleError),
}

#[derive(Debug, Default)]
pub struct FormFields {
    values: HashMap<String, Vec<String>>,
}

impl From<FormPairs> for FormFields {
    fn from(pairs: FormPairs) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            values.entry(name).or_default().push(value);
        }
        Self { values }
    }
}

impl FormFields {
    /// First value of a field, trimmed. Missing fields read as empty.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .is_some_and(|v| TRUTHY.contains(&v.trim().to_lowercase().as_str()))
    }

    /// Every value of a repeated field joined into the stored comma separated form.
    #[must_use]
    pub fn joined(&self, name: &str) -> String {
        self.values
            .get(name)
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default()
    }

    fn required(&self, name: &'static str) -> Result<String, FormError> {
        let value = self.text(name);
        if value.is_empty() {
            return Err(FormError::Missing(name));
        }
        Ok(value)
    }

    fn id(&self, name: &'static str) -> Result<i32, FormError> {
        self.required(name)?
            .parse()
            .map_err(|_| FormError::NotANumber(name))
    }
}

#[must_use]
pub fn venue_input(fields: &FormFields) -> VenueInput {
    VenueInput {
        name: fields.text("name"),
        city: fields.text("city"),
        state: fields.text("state"),
        address: fields.text("address"),
        phone: fields.text("phone"),
        image_link: fields.text("image_link"),
        facebook_link: fields.text("facebook_link"),
        website_link: fields.text("website_link"),
        genres: fields.joined("genres"),
        seeking_talent: fields.flag("seeking_talent"),
        seeking_description: fields.text("seeking_description"),
    }
}

#[must_use]
pub fn artist_input(fields: &FormFields) -> ArtistInput {
    ArtistInput {
        name: fields.text("name"),
        city: fields.text("city"),
        state: fields.text("state"),
        phone: fields.text("phone"),
        genres: fields.joined("genres"),
        image_link: fields.text("image_link"),
        facebook_link: fields.text("facebook_link"),
        website_link: fields.text("website_link"),
        seeking_venue: fields.flag("seeking_venue"),
        seeking_description: fields.text("seeking_description"),
    }
}

pub fn show_input(fields: &FormFields) -> Result<ShowInput, FormError> {
    Ok(ShowInput {
        artist_id: fields.id("artist_id")?,
        venue_id: fields.id("venue_id")?,
        start_time: normalize_start_time(&fields.text("start_time"))?,
    })
}

/// A listing record needs at least a name.
pub fn require_name(name: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::Missing("name"));
    }
    Ok(())
}

#[must_use]
pub fn search_term(fields: &FormFields) -> String {
    fields.text("search_term")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<FormPairs>()
            .into()
    }

    #[test]
    fn test_venue_input_joins_genres_and_reads_checkbox() {
        let input = venue_input(&fields(&[
            ("name", " The Musical Hop "),
            ("genres", "Jazz"),
            ("genres", "Swing"),
            ("seeking_talent", "y"),
        ]));

        assert_eq!(input.name, "The Musical Hop");
        assert_eq!(input.genres, "Jazz,Swing");
        assert!(input.seeking_talent);
        assert_eq!(input.address, "");
    }

    #[test]
    fn test_missing_checkbox_is_false() {
        let input = artist_input(&fields(&[("name", "Matt Quevedo")]));
        assert!(!input.seeking_venue);

        let input = artist_input(&fields(&[("seeking_venue", "off")]));
        assert!(!input.seeking_venue);
    }

    #[test]
    fn test_show_input_keeps_artist_and_venue_apart() {
        let show = show_input(&fields(&[
            ("artist_id", "1"),
            ("venue_id", "3"),
            ("start_time", "2035-04-01T20:00"),
        ]))
        .unwrap();

        assert_eq!(show.artist_id, 1);
        assert_eq!(show.venue_id, 3);
        assert_eq!(show.start_time, "2035-04-01 20:00:00");
    }

    #[test]
    fn test_show_input_errors() {
        assert_eq!(
            show_input(&fields(&[("venue_id", "1"), ("start_time", "2035-04-01 20:00")])),
            Err(FormError::Missing("artist_id"))
        );
        assert_eq!(
            show_input(&fields(&[("artist_id", "x"), ("venue_id", "1")])),
            Err(FormError::NotANumber("artist_id"))
        );
        assert_eq!(
            show_input(&fields(&[("artist_id", "1"), ("venue_id", "1")])),
            Err(FormError::StartTime(ScheduleError::Missing))
        );
    }

    #[test]
    fn test_require_name() {
        assert!(require_name("Guns N Petals").is_ok());
        assert_eq!(require_name("  "), Err(FormError::Missing("name")));
    }
}
