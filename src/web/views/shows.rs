use std::fmt::Write;

use super::{attr, esc, layout};
use crate::models::show::ShowListing;
use crate::services::schedule::{DateStyle, format_datetime};
use crate::web::flash::Flash;

#[must_use]
pub fn list(shows: &[ShowListing], flashes: &[Flash]) -> String {
    let mut body = String::from("<h1>Shows</h1>");
    for show in shows {
        let _ = write!(
            body,
            r#"<div class="show"><img src="{img}" alt=""><h4>{when}</h4><h5><a href="/artists/{artist_id}">{artist}</a></h5><p>playing at</p><h5><a href="/venues/{venue_id}">{venue}</a></h5></div>"#,
            img = attr(&show.artist_image_link),
            when = esc(&format_datetime(&show.start_time, DateStyle::Medium)),
            artist_id = show.artist_id,
            artist = esc(&show.artist_name),
            venue_id = show.venue_id,
            venue = esc(&show.venue_name),
        );
    }
    if shows.is_empty() {
        body.push_str("<p>No shows listed yet.</p>");
    }

    layout("Shows", flashes, &body)
}
