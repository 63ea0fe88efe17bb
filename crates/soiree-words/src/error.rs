//! Word generation errors.

use thiserror::Error;

/// Why a generation request did not produce usable words.
#[derive(Debug, Error)]
pub enum WordError {
    /// No API key configured; the request is never sent.
    #[error("no API key configured for the word service")]
    MissingApiKey,

    /// The request could not be sent or the body could not be read.
    #[error("word service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("word service returned status {0}")]
    Status(u16),

    /// The service answered without any text.
    #[error("word service returned an empty response")]
    EmptyResponse,

    /// The text could not be parsed into the expected shape.
    #[error("malformed word service response: {0}")]
    Malformed(String),
}
