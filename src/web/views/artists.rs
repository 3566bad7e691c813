use std::fmt::Write;

use super::{attr, esc, genre_tags, layout, show_slots};
use crate::models::artist::ArtistDetail;
use crate::models::listing::NamedRef;
use crate::web::flash::Flash;

#[must_use]
pub fn list(artists: &[NamedRef], flashes: &[Flash]) -> String {
    let mut body = String::from("<h1>Artists</h1><ul>");
    for artist in artists {
        let _ = write!(
            body,
            r#"<li><a href="/artists/{}">{}</a></li>"#,
            artist.id,
            esc(&artist.name)
        );
    }
    body.push_str("</ul>");

    layout("Artists", flashes, &body)
}

#[must_use]
pub fn detail(artist: &ArtistDetail, flashes: &[Flash]) -> String {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><strong>Currently seeking performance venues</strong><p>{}</p></div>"#,
            esc(&artist.seeking_description)
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{city}, {state}</p>
<p>{phone}</p>
<p><a href="{website}">{website_text}</a> <a href="{facebook}">Facebook</a></p>
{seeking}
<img src="{image}" alt="Artist image" width="300">
<p><a href="/artists/{id}/edit">Edit</a> <button type="button" data-delete="/artists/{id}">Delete</button></p>
<section>{upcoming}</section>
<section>{past}</section>"#,
        name = esc(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = esc(&artist.city),
        state = esc(&artist.state),
        phone = esc(&artist.phone),
        website = attr(&artist.website),
        website_text = esc(&artist.website),
        facebook = attr(&artist.facebook_link),
        image = attr(&artist.image_link),
        upcoming = show_slots(
            "Upcoming Shows",
            &artist.upcoming_shows,
            artist.upcoming_shows_count,
            "/venues"
        ),
        past = show_slots("Past Shows", &artist.past_shows, artist.past_shows_count, "/venues"),
    );

    layout(&artist.name, flashes, &body)
}
