pub mod artist;
pub mod category;
pub mod question;
pub mod show;
pub mod venue;

/// Search needle folded the same way as [`matches_term`] folds haystacks.
pub(crate) fn fold_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive substring match over the full Unicode range.
///
/// SQLite's `LOWER` and `LIKE` only fold ASCII, so name and text searches
/// filter here instead of in SQL.
pub(crate) fn matches_term(haystack: &str, folded_term: &str) -> bool {
    folded_term.is_empty() || haystack.to_lowercase().contains(folded_term)
}
