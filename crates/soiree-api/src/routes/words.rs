//! Routes for generated word lists.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use soiree_words::generate_password_words;
use tracing::{info, instrument};

use crate::state::AppState;

/// Upper bound on words per request.
const MAX_PASSWORD_WORDS: u32 = 50;

fn default_count() -> u32 {
    10
}

/// Request body for POST /password.
#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    /// Free-text theme sent to the word service.
    pub category: String,
    /// How many words to ask for.
    #[serde(default = "default_count")]
    pub count: u32,
}

/// Response body for POST /password.
#[derive(Debug, Serialize)]
pub struct PasswordResponse {
    pub words: Vec<String>,
}

/// POST /password
///
/// Never fails: an unreachable word service yields the offline list.
#[instrument(skip(state, request), fields(category = %request.category, count = request.count))]
async fn password(
    State(state): State<AppState>,
    Json(request): Json<PasswordRequest>,
) -> Json<PasswordResponse> {
    let count = request.count.clamp(1, MAX_PASSWORD_WORDS);
    info!("generating password words");

    let words = generate_password_words(state.words.as_ref(), &request.category, count).await;

    Json(PasswordResponse { words })
}

/// Returns the router for the words context.
pub fn router() -> Router<AppState> {
    Router::new().route("/password", post(password))
}
