use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use fyyur::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path = std::env::temp_dir().join(format!("fyyur-trivia-{}.db", uuid::Uuid::new_v4()));

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

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_categories() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_get_paginated_questions() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], 19);
    assert!(body["current_category"].is_null());
    assert!(body["categories"].as_object().is_some_and(|c| !c.is_empty()));

    let (status, body) = send(&app, "GET", "/questions?page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_get_paginated_questions_404() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/questions?page=20", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "Page Not Found");
}

#[tokio::test]
async fn test_huge_page_numbers_are_not_found() {
    let app = spawn_app().await;

    for uri in [
        "/questions?page=1000000000000000000",
        "/questions?page=18446744073709551615",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["message"], "Page Not Found");
    }

    let (status, _) = send(&app, "GET", "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_then_delete_question() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({
            "question": "testquestion",
            "answer": "testanswer",
            "difficulty": "1",
            "category": "1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["created"].as_i64().unwrap();
    assert_eq!(body["question"]["id"], id);
    assert_eq!(body["question"]["category"], 1);

    let (status, body) = send(&app, "DELETE", &format!("/questions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], id);

    let (status, body) = send(&app, "DELETE", &format!("/questions/{id}"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_delete_missing_question_is_422() {
    let app = spawn_app().await;

    for uri in ["/questions/2222", "/questions/0", "/questions/-3"] {
        let (status, body) = send(&app, "DELETE", uri, None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
    }
}

#[tokio::test]
async fn test_create_question() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({
            "question": "Which dung beetle was worshipped by the ancient Egyptians?",
            "answer": "Scarab",
            "difficulty": 4,
            "category": 4
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["answer"], "Scarab");

    let (_, body) = send(&app, "GET", "/questions?page=2", None).await;
    assert_eq!(body["total_questions"], 20);
}

#[tokio::test]
async fn test_create_question_missing_fields_is_400() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({
            "question": "Who invented Peanut Butter?",
            "answer": "George Washington Carver"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({ "question": "Q", "answer": "A", "difficulty": 9, "category": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_question_unknown_category_is_422() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({ "question": "Q", "answer": "A", "difficulty": 2, "category": 99 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_search_questions() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({ "searchTerm": "boxer" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["answer"], "Muhammad Ali");

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({ "searchTerm": "BURTON" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);

    let (status, _) = send(&app, "POST", "/questions/search", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_questions_folds_non_ascii_case() {
    let app = spawn_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/questions",
        Some(json!({
            "question": "Which city is home to the Musée d'Orsay?",
            "answer": "Paris",
            "difficulty": 2,
            "category": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "POST",
        "/questions/search",
        Some(json!({ "searchTerm": "MUSÉE" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["answer"], "Paris");
}

#[tokio::test]
async fn test_questions_by_category() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/categories/4/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], "History");
    assert_eq!(body["total_questions"], 4);
    assert!(
        body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["category"] == 4)
    );

    let (status, body) = send(&app, "GET", "/categories/2222/questions", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_quiz_returns_unseen_question() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({
            "previous_questions": [],
            "quiz_category": { "type": "Science", "id": 1 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["category"], 1);

    let (_, body) = send(&app, "GET", "/categories/1/questions", None).await;
    let all_science: Vec<Value> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].clone())
        .collect();

    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({
            "previous_questions": all_science,
            "quiz_category": { "type": "Science", "id": "1" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn test_quiz_all_categories_and_missing_category() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/quizzes",
        Some(json!({
            "previous_questions": [1, 2, 3],
            "quiz_category": { "type": "click", "id": 0 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["question"]["id"].as_i64().unwrap();
    assert!(![1, 2, 3].contains(&id));

    let missing_category = json!({ "previous_questions": [] });
    let (status, body) = send(&app, "POST", "/quizzes", Some(missing_category)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_health_probes() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/health/live", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");

    let (status, body) = send(&app, "GET", "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["database"], true);
}
