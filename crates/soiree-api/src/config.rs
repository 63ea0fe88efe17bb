//! Server settings read from the environment at startup.

use soiree_words::GeminiConfig;
use soiree_words::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::error::AppError;

/// Everything `main` needs to wire the server.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Word service connection.
    pub gemini: GeminiConfig,
    /// Seed for reproducible shuffles; entropy when absent.
    pub rng_seed: Option<u64>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when `PORT` or `SOIREE_RNG_SEED` does not
    /// parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when `PORT` or `SOIREE_RNG_SEED` does not
    /// parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let rng_seed = var("SOIREE_RNG_SEED")
            .map(|raw| {
                raw.parse().map_err(|e| {
                    AppError::Config(format!("SOIREE_RNG_SEED must be a valid u64: {e}"))
                })
            })
            .transpose()?;

        let gemini = GeminiConfig {
            api_key: var("GEMINI_API_KEY"),
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("GEMINI_BASE_URL")
                .map_or_else(|| DEFAULT_BASE_URL.to_string(), |url| {
                    url.trim_end_matches('/').to_string()
                }),
        };

        Ok(Self {
            host,
            port,
            gemini,
            rng_seed,
        })
    }
}
