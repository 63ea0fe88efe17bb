//! Soirée API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use soiree_api::config::Settings;
use soiree_api::state::AppState;
use soiree_core::clock::{Clock, SystemClock};
use soiree_core::rng::{DeterministicRng, StdRandom};
use soiree_event_store::memory_event_repository::InMemoryEventRepository;
use soiree_words::GeminiClient;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Soirée API server");

    let settings = Settings::from_env()?;
    if settings.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; serving static word lists only");
    }

    // Build application state.
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match settings.rng_seed {
        Some(seed) => Arc::new(Mutex::new(StdRandom::seeded(seed))),
        None => Arc::new(Mutex::new(StdRandom::from_entropy())),
    };
    let app_state = AppState::new(
        clock,
        rng,
        Arc::new(InMemoryEventRepository::new()),
        Arc::new(GeminiClient::new(settings.gemini.clone())),
    );

    // TODO: Replace CorsLayer::permissive() with the front-end origin once it is deployed.
    let app = soiree_api::build_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server.
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port)
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
