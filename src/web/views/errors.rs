use super::layout;

#[must_use]
pub fn not_found() -> String {
    layout(
        "Not Found",
        &[],
        r#"<h1>404</h1><p>Not Found</p><p><a href="/">Back home</a></p>"#,
    )
}

#[must_use]
pub fn server_error() -> String {
    layout(
        "Server Error",
        &[],
        r#"<h1>500</h1><p>Something went wrong on our end.</p><p><a href="/">Back home</a></p>"#,
    )
}
