use std::fmt::Write;

use super::{esc, layout};
use crate::models::listing::SearchResults;
use crate::web::flash::Flash;

/// `kind` is the plural path segment, `venues` or `artists`.
#[must_use]
pub fn results(kind: &str, term: &str, results: &SearchResults, flashes: &[Flash]) -> String {
    let mut body = format!(
        "<h3>Number of search results for \"{}\": {}</h3><ul>",
        esc(term),
        results.count
    );
    for item in &results.data {
        let _ = write!(
            body,
            r#"<li><a href="/{kind}/{}">{}</a></li>"#,
            item.id,
            esc(&item.name)
        );
    }
    body.push_str("</ul>");

    layout("Search", flashes, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::NamedRef;

    #[test]
    fn test_results_show_count_and_links() {
        let found = SearchResults::from_refs(vec![NamedRef {
            id: 1,
            name: "The Musical Hop".to_string(),
        }]);
        let html = results("venues", "Hop", &found, &[]);
        assert!(html.contains("Number of search results for \"Hop\": 1"));
        assert!(html.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
    }
}
