use serde::Serialize;

/// An `{id, name}` pair, the row shape used by list and search pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<NamedRef>,
}

impl SearchResults {
    #[must_use]
    pub fn from_refs(data: Vec<NamedRef>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Splits the free-text genre column into display tags.
#[must_use]
pub fn split_genres(genres: &str) -> Vec<String> {
    genres
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}
