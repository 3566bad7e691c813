use std::fmt::Write;

use super::{attr, esc, genre_tags, layout, show_slots};
use crate::models::venue::{VenueArea, VenueDetail};
use crate::web::flash::Flash;

#[must_use]
pub fn list(areas: &[VenueArea], flashes: &[Flash]) -> String {
    let mut body = String::from("<h1>Venues</h1>");
    for area in areas {
        let _ = write!(body, "<h3>{}, {}</h3><ul>", esc(&area.city), esc(&area.state));
        for venue in &area.venues {
            let _ = write!(
                body,
                r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming shows</small></li>"#,
                venue.id,
                esc(&venue.name),
                venue.num_upcoming_shows
            );
        }
        body.push_str("</ul>");
    }
    if areas.is_empty() {
        body.push_str("<p>No venues listed yet.</p>");
    }

    layout("Venues", flashes, &body)
}

#[must_use]
pub fn detail(venue: &VenueDetail, flashes: &[Flash]) -> String {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><strong>Currently seeking talent</strong><p>{}</p></div>"#,
            esc(&venue.seeking_description)
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
<p><a href="{website}">{website_text}</a> <a href="{facebook}">Facebook</a></p>
{seeking}
<img src="{image}" alt="Venue image" width="300">
<p><a href="/venues/{id}/edit">Edit</a> <button type="button" data-delete="/venues/{id}">Delete</button></p>
<section>{upcoming}</section>
<section>{past}</section>"#,
        name = esc(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = esc(&venue.address),
        city = esc(&venue.city),
        state = esc(&venue.state),
        phone = esc(&venue.phone),
        website = attr(&venue.website),
        website_text = esc(&venue.website),
        facebook = attr(&venue.facebook_link),
        image = attr(&venue.image_link),
        upcoming = show_slots(
            "Upcoming Shows",
            &venue.upcoming_shows,
            venue.upcoming_shows_count,
            "/artists"
        ),
        past = show_slots("Past Shows", &venue.past_shows, venue.past_shows_count, "/artists"),
    );

    layout(&venue.name, flashes, &body)
}
