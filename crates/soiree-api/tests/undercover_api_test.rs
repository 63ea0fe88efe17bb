//! Integration tests for the Undercover routes.

mod common;

use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};
use soiree_words::fallback::FALLBACK_PAIRS;

const NAMES: [&str; 5] = ["Ana", "Ben", "Cleo", "Dan", "Eve"];

async fn start_round(app: &Router, body: &Value) -> String {
    let (status, json) =
        common::post_json(app.clone(), "/api/v1/undercover/start-round", body).await;
    assert_eq!(status, StatusCode::OK);
    json["aggregate_id"].as_str().unwrap().to_string()
}

async fn round(app: &Router, round_id: &str) -> Value {
    let (status, json) =
        common::get_json(app.clone(), &format!("/api/v1/undercover/{round_id}")).await;
    assert_eq!(status, StatusCode::OK);
    json
}

#[tokio::test]
async fn test_full_round_reveals_words_only_at_results() {
    // Arrange
    let app = common::build_test_app();
    let round_id = start_round(
        &app,
        &json!({
            "players": common::players_json(&NAMES),
            "category": "animals",
            "undercover_count": 2
        }),
    )
    .await;

    // Act
    let mut dealt = Vec::new();
    for position in 0..NAMES.len() {
        let view = round(&app, &round_id).await;
        assert_eq!(view["phase"], "reveal");
        assert_eq!(view["reveal"]["position"], position);
        dealt.push(view["reveal"]["word"].as_str().unwrap().to_string());

        let (status, _) = common::post_json(
            app.clone(),
            "/api/v1/undercover/reveal-next",
            &json!({ "round_id": round_id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let playing = round(&app, &round_id).await;

    let (status, _) = common::post_json(
        app.clone(),
        "/api/v1/undercover/show-results",
        &json!({ "round_id": round_id }),
    )
    .await;
    let results = round(&app, &round_id).await;

    // Assert
    assert_eq!(dealt.iter().filter(|w| *w == "Chien").count(), 2);
    assert_eq!(dealt.iter().filter(|w| *w == "Chat").count(), 3);

    assert_eq!(playing["phase"], "playing");
    assert_eq!(playing["category_label"], "Animaux");
    assert!(playing["results"].is_null());
    assert!(
        playing["turn_order"]
            .as_array()
            .unwrap()
            .iter()
            .all(|seat| seat["word"].is_null())
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(results["phase"], "results");
    assert_eq!(results["results"]["civilian_word"], "Chat");
    assert_eq!(results["results"]["undercover_word"], "Chien");
    let undercovers = results["turn_order"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|seat| seat["side"] == "undercover")
        .count();
    assert_eq!(undercovers, 2);
}

#[tokio::test]
async fn test_undercover_count_is_clamped_to_table_size() {
    // Arrange
    let app = common::build_test_app();

    // Act
    let round_id = start_round(
        &app,
        &json!({
            "players": common::players_json(&NAMES[..3]),
            "undercover_count": 9
        }),
    )
    .await;

    // Assert
    let view = round(&app, &round_id).await;
    assert_eq!(view["undercover_count"], 1);
    assert_eq!(view["category"], "general");
}

#[tokio::test]
async fn test_round_starts_with_static_pair_when_word_service_is_down() {
    // Arrange
    let app = common::build_offline_test_app();

    // Act
    let round_id = start_round(&app, &json!({ "players": common::players_json(&NAMES) })).await;

    // Assert
    let view = round(&app, &round_id).await;
    assert_eq!(view["phase"], "reveal");
    let word = view["reveal"]["word"].as_str().unwrap();
    assert!(
        FALLBACK_PAIRS
            .iter()
            .any(|(civilian, undercover)| word == *civilian || word == *undercover)
    );
}

#[tokio::test]
async fn test_show_results_during_reveal_is_rejected() {
    let app = common::build_test_app();
    let round_id = start_round(&app, &json!({ "players": common::players_json(&NAMES) })).await;

    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/undercover/show-results",
        &json!({ "round_id": round_id }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}
