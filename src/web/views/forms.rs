//! Create and edit forms. Field names match what `web::forms` reads back.

use std::fmt::Write;

use super::{attr, esc, layout};
use crate::constants::forms::{GENRES, STATES};
use crate::models::artist::ArtistInput;
use crate::models::listing::split_genres;
use crate::models::venue::VenueInput;
use crate::web::flash::Flash;

fn text_field(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label>{label}<input type="text" name="{name}" value="{value}"></label>"#,
        label = esc(label),
        value = attr(value),
    )
}

fn state_select(selected: &str) -> String {
    let mut out = String::from(r#"<label>State<select name="state">"#);
    for state in STATES {
        let marker = if *state == selected { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{state}"{marker}>{state}</option>"#);
    }
    out.push_str("</select></label>");
    out
}

fn genre_select(current: &str) -> String {
    let chosen = split_genres(current);
    let mut out = String::from(r#"<label>Genres<select name="genres" multiple>"#);
    for genre in GENRES {
        let marker = if chosen.iter().any(|g| g == genre) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            out,
            r#"<option value="{value}"{marker}>{text}</option>"#,
            value = attr(genre),
            text = esc(genre),
        );
    }
    out.push_str("</select></label>");
    out
}

fn checkbox(label: &str, name: &str, checked: bool) -> String {
    let marker = if checked { " checked" } else { "" };
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{marker}> {label}</label>"#,
        label = esc(label),
    )
}

/// `action` is the form target, e.g. `/venues/create` or `/venues/3/edit`.
#[must_use]
pub fn venue(heading: &str, action: &str, input: &VenueInput, flashes: &[Flash]) -> String {
    let body = format!(
        r#"<h1>{heading}</h1><form method="post" action="{action}">{fields}<button type="submit">Save venue</button></form>"#,
        heading = esc(heading),
        action = attr(action),
        fields = [
            text_field("Name", "name", &input.name),
            text_field("City", "city", &input.city),
            state_select(&input.state),
            text_field("Address", "address", &input.address),
            text_field("Phone", "phone", &input.phone),
            genre_select(&input.genres),
            text_field("Image link", "image_link", &input.image_link),
            text_field("Facebook link", "facebook_link", &input.facebook_link),
            text_field("Website", "website_link", &input.website_link),
            checkbox("Seeking talent", "seeking_talent", input.seeking_talent),
            text_field(
                "Seeking description",
                "seeking_description",
                &input.seeking_description
            ),
        ]
        .concat(),
    );

    layout(heading, flashes, &body)
}

#[must_use]
pub fn artist(heading: &str, action: &str, input: &ArtistInput, flashes: &[Flash]) -> String {
    let body = format!(
        r#"<h1>{heading}</h1><form method="post" action="{action}">{fields}<button type="submit">Save artist</button></form>"#,
        heading = esc(heading),
        action = attr(action),
        fields = [
            text_field("Name", "name", &input.name),
            text_field("City", "city", &input.city),
            state_select(&input.state),
            text_field("Phone", "phone", &input.phone),
            genre_select(&input.genres),
            text_field("Image link", "image_link", &input.image_link),
            text_field("Facebook link", "facebook_link", &input.facebook_link),
            text_field("Website", "website_link", &input.website_link),
            checkbox("Seeking venue", "seeking_venue", input.seeking_venue),
            text_field(
                "Seeking description",
                "seeking_description",
                &input.seeking_description
            ),
        ]
        .concat(),
    );

    layout(heading, flashes, &body)
}

#[must_use]
pub fn show(default_start: &str, flashes: &[Flash]) -> String {
    let body = format!(
        r#"<h1>List a new show</h1><form method="post" action="/shows/create">{}{}{}<button type="submit">Create show</button></form>"#,
        text_field("Artist ID", "artist_id", ""),
        text_field("Venue ID", "venue_id", ""),
        text_field("Start time", "start_time", default_start),
    );

    layout("New Show", flashes, &body)
}
