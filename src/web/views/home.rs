use super::layout;
use crate::web::flash::Flash;

#[must_use]
pub fn page(flashes: &[Flash]) -> String {
    layout(
        "Home",
        flashes,
        r#"<h1>Fyyur</h1>
<p>Book local talent, or find somewhere to play.</p>
<ul>
<li><a href="/venues/create">List a new venue</a></li>
<li><a href="/artists/create">List a new artist</a></li>
<li><a href="/shows/create">List a new show</a></li>
</ul>"#,
    )
}
