use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use fyyur::config::Config;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path = std::env::temp_dir().join(format!("fyyur-site-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = fyyur::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    fyyur::db::seed::seed_demo_data(state.store())
        .await
        .expect("Failed to seed database");
    fyyur::api::router(state).await
}

fn encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v.replace('&', "%26").replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&")
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, pairs: &[(&str, &str)]) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
                )
                .body(Body::from(encode(pairs)))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn html(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// `name=value` of the session cookie set by a response.
fn session_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set the session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_home_page() {
    let app = spawn_app().await;

    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(html(response).await.contains("List a new venue"));
}

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let app = spawn_app().await;

    let response = get(&app, "/no/such/page", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(html(response).await.contains("<h1>404</h1>"));
}

#[tokio::test]
async fn test_venue_search() {
    let app = spawn_app().await;

    let body = html(post_form(&app, "/venues/search", &[("search_term", "Hop")]).await).await;
    assert!(body.contains("Number of search results for \"Hop\": 1"));
    assert!(body.contains("The Musical Hop"));

    let body = html(post_form(&app, "/venues/search", &[("search_term", "Music")]).await).await;
    assert!(body.contains("Number of search results for \"Music\": 2"));
    assert!(body.contains("Park Square Live Music &amp; Coffee"));
}

#[tokio::test]
async fn test_artist_search() {
    let app = spawn_app().await;

    let body = html(post_form(&app, "/artists/search", &[("search_term", "A")]).await).await;
    assert!(body.contains("Number of search results for \"A\": 3"));

    let response = get(&app, "/artists/search?search_term=band", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = html(response).await;
    assert!(body.contains("Number of search results for \"band\": 1"));
    assert!(body.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let app = spawn_app().await;

    let response = post_form(
        &app,
        "/venues/create",
        &[("name", "ÉLAN Club"), ("city", "Montréal"), ("state", "NY")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    for term in ["ÉLAN", "Élan", "élan", "lan club"] {
        let body = html(post_form(&app, "/venues/search", &[("search_term", term)]).await).await;
        assert!(body.contains("ÉLAN Club"), "{term}");
        assert!(
            body.contains(&format!("Number of search results for \"{term}\": 1")),
            "{term}"
        );
    }
}

#[tokio::test]
async fn test_venues_grouped_by_area_with_upcoming_counts() {
    let app = spawn_app().await;

    let body = html(get(&app, "/venues", None).await).await;

    assert!(body.contains("<h3>San Francisco, CA</h3>"));
    assert!(body.contains("<h3>New York, NY</h3>"));
    assert!(body.contains("3 upcoming shows"));
    assert!(body.contains("0 upcoming shows"));
}

#[tokio::test]
async fn test_venue_detail_splits_past_and_upcoming() {
    let app = spawn_app().await;

    let response = get(&app, "/venues/3", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = html(response).await;

    assert!(body.contains("Park Square Live Music &amp; Coffee"));
    assert!(body.contains("<h3>3 Upcoming Shows</h3>"));
    assert!(body.contains("<h3>1 Past Shows</h3>"));
    assert!(body.contains("The Wild Sax Band"));
    assert!(body.contains("Matt Quevedo"));
}

#[tokio::test]
async fn test_venue_detail_shows_seeking_flag() {
    let app = spawn_app().await;

    let body = html(get(&app, "/venues/1", None).await).await;
    assert!(body.contains("Currently seeking talent"));

    let body = html(get(&app, "/venues/2", None).await).await;
    assert!(body.contains("Not currently seeking talent"));
}

#[tokio::test]
async fn test_artist_detail() {
    let app = spawn_app().await;

    let body = html(get(&app, "/artists/1", None).await).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("<h3>1 Past Shows</h3>"));
    assert!(body.contains("<h3>0 Upcoming Shows</h3>"));
    assert!(body.contains(r#"href="/venues/1""#));
}

#[tokio::test]
async fn test_missing_records_render_404() {
    let app = spawn_app().await;

    for uri in ["/venues/999", "/artists/999", "/venues/abc", "/venues/999/edit"] {
        let response = get(&app, uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_create_venue_flashes_on_home_page() {
    let app = spawn_app().await;

    let response = post_form(
        &app,
        "/venues/create",
        &[
            ("name", "The Blue Note"),
            ("city", "New York"),
            ("state", "NY"),
            ("address", "131 W 3rd St"),
            ("genres", "Jazz"),
            ("genres", "Blues"),
            ("seeking_talent", "y"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookie = session_cookie(&response);

    let body = html(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("Venue The Blue Note was successfully listed!"));

    let body = html(get(&app, "/", Some(&cookie)).await).await;
    assert!(!body.contains("successfully listed"));

    let body = html(post_form(&app, "/venues/search", &[("search_term", "blue")]).await).await;
    assert!(body.contains("Number of search results for \"blue\": 1"));
}

#[tokio::test]
async fn test_create_artist_without_name_flashes_error() {
    let app = spawn_app().await;

    let response = post_form(&app, "/artists/create", &[("city", "Austin")]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    let body = html(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("An error occurred. Artist  could not be listed."));
}

#[tokio::test]
async fn test_create_show() {
    let app = spawn_app().await;

    let response = post_form(
        &app,
        "/shows/create",
        &[
            ("artist_id", "1"),
            ("venue_id", "2"),
            ("start_time", "2036-01-10 19:00:00"),
        ],
    )
    .await;
    let cookie = session_cookie(&response);
    let body = html(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("Show was successfully listed!"));

    let body = html(get(&app, "/venues/2", None).await).await;
    assert!(body.contains("<h3>1 Upcoming Shows</h3>"));
    assert!(body.contains("Guns N Petals"));

    let body = html(get(&app, "/shows", None).await).await;
    assert!(body.contains("The Dueling Pianos Bar"));
}

#[tokio::test]
async fn test_create_show_rejects_bad_input() {
    let app = spawn_app().await;

    for pairs in [
        [("artist_id", "1"), ("venue_id", "2"), ("start_time", "soon")],
        [("artist_id", "1"), ("venue_id", "999"), ("start_time", "2036-01-10 19:00")],
    ] {
        let response = post_form(&app, "/shows/create", &pairs).await;
        let cookie = session_cookie(&response);
        let body = html(get(&app, "/", Some(&cookie)).await).await;
        assert!(body.contains("An error occurred. Show could not be listed."));
    }
}

#[tokio::test]
async fn test_edit_venue_replaces_every_field() {
    let app = spawn_app().await;

    let body = html(get(&app, "/venues/1/edit", None).await).await;
    assert!(body.contains(r#"value="The Musical Hop""#));

    let response = post_form(
        &app,
        "/venues/1/edit",
        &[
            ("name", "The Musical Hop Annex"),
            ("city", "Oakland"),
            ("state", "CA"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/venues/1");

    let body = html(get(&app, "/venues/1", None).await).await;
    assert!(body.contains("The Musical Hop Annex"));
    assert!(body.contains("Oakland"));
    assert!(body.contains("Not currently seeking talent"));
    assert!(!body.contains("1015 Folsom Street"));
}

#[tokio::test]
async fn test_edit_missing_artist_is_404() {
    let app = spawn_app().await;

    let response = post_form(&app, "/artists/999/edit", &[("name", "Nobody")]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue() {
    let app = spawn_app().await;

    let (status, body) = delete(&app, "/venues/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = delete(&app, "/venues/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_delete_with_shows_is_refused() {
    let app = spawn_app().await;

    let (status, body) = delete(&app, "/venues/3").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    let (status, body) = delete(&app, "/artists/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    let response = get(&app, "/venues/3", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = spawn_app().await;

    let response = get(&app, "/", None).await;

    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
    assert!(
        response.headers()["content-security-policy"]
            .to_str()
            .unwrap()
            .contains("img-src 'self' https:")
    );
}

#[tokio::test]
async fn test_metrics_disabled_is_404() {
    let app = spawn_app().await;

    let response = get(&app, "/metrics", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(html(response).await, "Metrics are disabled");
}
