//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::category::{Category, WordPair};
use crate::error::WordError;
use crate::prompt;
use crate::WordSource;

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; without one every request fails fast with
    /// [`WordError::MissingApiKey`].
    pub api_key: Option<String>,
    /// Model name inserted into the request path.
    pub model: String,
    /// Scheme and host, without trailing slash.
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Word source backed by Gemini structured JSON output.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client with its own connection pool.
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Sends one prompt and returns the concatenated text of the first
    /// candidate.
    async fn generate(&self, prompt: String, schema: Value) -> Result<String, WordError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(WordError::MissingApiKey)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| WordError::Malformed(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(WordError::EmptyResponse);
        }
        debug!(bytes = text.len(), "word service answered");
        Ok(text)
    }
}

#[async_trait]
impl WordSource for GeminiClient {
    #[instrument(skip(self), fields(model = %self.config.model))]
    async fn undercover_pair(
        &self,
        category: Category,
        sub_theme: &str,
    ) -> Result<WordPair, WordError> {
        let text = self
            .generate(
                prompt::undercover_prompt(category, sub_theme),
                prompt::pair_schema(),
            )
            .await?;

        let pair: WordPair = serde_json::from_str(text.trim())
            .map_err(|e| WordError::Malformed(e.to_string()))?;

        if pair.civilian.trim().is_empty() || pair.undercover.trim().is_empty() {
            return Err(WordError::Malformed("blank word in pair".to_owned()));
        }
        Ok(pair)
    }

    #[instrument(skip(self), fields(model = %self.config.model))]
    async fn password_words(
        &self,
        category: &str,
        count: u32,
    ) -> Result<Vec<String>, WordError> {
        let text = self
            .generate(
                prompt::password_prompt(category, count),
                prompt::word_list_schema(),
            )
            .await?;

        let words: Vec<String> = serde_json::from_str(text.trim())
            .map_err(|e| WordError::Malformed(e.to_string()))?;

        Ok(words
            .into_iter()
            .map(|w| w.trim().to_owned())
            .filter(|w| !w.is_empty())
            .collect())
    }
}
