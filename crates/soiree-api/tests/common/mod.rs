//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use soiree_core::clock::Clock;
use soiree_core::rng::{DeterministicRng, StdRandom};
use soiree_event_store::memory_event_repository::InMemoryEventRepository;
use soiree_test_support::{FailingWordSource, FixedClock, StaticWordSource};
use soiree_words::{WordPair, WordSource};
use tower::ServiceExt;

use soiree_api::build_router;
use soiree_api::state::AppState;

/// Seed shared by every integration test so deals are reproducible.
pub const SEED: u64 = 2026;

fn fixed_clock() -> Arc<dyn Clock + Send + Sync> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 10, 17, 21, 0, 0).unwrap(),
    ))
}

/// Build the full app router over a fresh in-memory store, a seeded RNG,
/// and a word service answering Chat / Chien.
pub fn build_test_app() -> Router {
    let words = StaticWordSource::new(
        WordPair::new("Chat", "Chien"),
        vec!["Plage".to_string(), "Soleil".to_string(), "Glace".to_string()],
    );
    build_test_app_with_words(Arc::new(words))
}

/// Same as [`build_test_app`] with an unreachable word service.
pub fn build_offline_test_app() -> Router {
    build_test_app_with_words(Arc::new(FailingWordSource))
}

fn build_test_app_with_words(words: Arc<dyn WordSource>) -> Router {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
        Arc::new(Mutex::new(StdRandom::seeded(SEED)));
    let app_state = AppState::new(
        fixed_clock(),
        rng,
        Arc::new(InMemoryEventRepository::new()),
        words,
    );
    build_router(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// A roster of `names`, ids lowercased, as a JSON array.
pub fn players_json(names: &[&str]) -> serde_json::Value {
    names
        .iter()
        .map(|name| serde_json::json!({ "id": name.to_lowercase(), "name": name }))
        .collect()
}
