//! Server-rendered HTML. Every dynamic value goes through [`esc`] or [`attr`].

use std::borrow::Cow;
use std::fmt::Write;

use super::flash::Flash;
use crate::models::show::ShowSlot;
use crate::services::schedule::{DateStyle, format_datetime};

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod search;
pub mod shows;
pub mod venues;

#[must_use]
pub fn esc(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

#[must_use]
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

const STYLE: &str = "body{font-family:sans-serif;margin:0;color:#222}\
nav{background:#222;padding:.6em 1em}nav a{color:#eee;margin-right:1em;text-decoration:none}\
nav form{display:inline;margin-right:1em}main{padding:1em 2em}\
.alert{padding:.6em 1em;margin:.5em 0;border-radius:4px}\
.alert-success{background:#dff0d8}.alert-danger{background:#f2dede}\
.genres span{display:inline-block;background:#eee;border-radius:3px;padding:0 .4em;margin:.1em}\
.show{display:inline-block;width:14em;margin:.5em;vertical-align:top}\
.show img{width:100%;max-height:10em;object-fit:cover}\
label{display:block;margin-top:.6em}";

/// Sends `DELETE` for any `[data-delete]` button and returns home on success.
pub const DELETE_SCRIPT: &str = r#"document.addEventListener('click', function (e) {
  var target = e.target.closest('[data-delete]');
  if (!target) return;
  fetch(target.dataset.delete, { method: 'DELETE' })
    .then(function (r) { return r.json(); })
    .then(function (body) {
      if (body.success) { window.location.href = '/'; }
      else { alert('Could not delete this record.'); }
    });
});
"#;

/// Wraps page content in the shared chrome: navigation, search boxes and pending flashes.
#[must_use]
pub fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut alerts = String::new();
    for flash in flashes {
        let _ = write!(
            alerts,
            r#"<div class="alert {}">{}</div>"#,
            flash.level.css_class(),
            esc(&flash.message)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Fyyur</title>
<style>{STYLE}</style>
<script src="/static/delete.js" defer></script>
</head>
<body>
<nav>
<a href="/">Fyyur</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form method="post" action="/venues/search"><input type="search" name="search_term" placeholder="Find a venue"></form>
<form method="post" action="/artists/search"><input type="search" name="search_term" placeholder="Find an artist"></form>
</nav>
<main>
{alerts}
{body}
</main>
</body>
</html>
"#,
        title = esc(title),
    )
}

#[must_use]
pub fn genre_tags(genres: &[String]) -> String {
    let tags: String = genres
        .iter()
        .map(|g| format!("<span>{}</span>", esc(g)))
        .collect();
    format!(r#"<div class="genres">{tags}</div>"#)
}

/// Cards for one side of a show list. `link_base` is `/artists` or `/venues`.
#[must_use]
pub fn show_slots(heading: &str, slots: &[ShowSlot], count: usize, link_base: &str) -> String {
    let mut out = format!("<h3>{count} {}</h3>", esc(heading));
    for slot in slots {
        let _ = write!(
            out,
            r#"<div class="show"><img src="{img}" alt=""><h5><a href="{base}/{id}">{name}</a></h5><p>{when}</p></div>"#,
            img = attr(&slot.counterpart_image_link),
            base = link_base,
            id = slot.counterpart_id,
            name = esc(&slot.counterpart_name),
            when = esc(&format_datetime(&slot.start_time, DateStyle::Full)),
        );
    }
    out
}
