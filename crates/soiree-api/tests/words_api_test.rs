//! Integration tests for the word-list routes.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_password_words_come_from_the_word_service() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/words/password",
        &json!({ "category": "Vacances", "count": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["words"], json!(["Plage", "Soleil", "Glace"]));
}

#[tokio::test]
async fn test_password_words_fall_back_offline() {
    let app = common::build_offline_test_app();

    let (status, json) =
        common::post_json(app, "/api/v1/words/password", &json!({ "category": "Vacances" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["words"], json!(["Mode", "Hors-ligne", "Erreur API"]));
}
