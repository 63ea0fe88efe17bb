//! Soirée Words: generated word lists.
//!
//! Wraps a third-party generative text API that produces Undercover word
//! pairs and Password word lists. Every failure degrades to static content;
//! callers never see an error from [`generate_undercover_words`] or
//! [`generate_password_words`].

pub mod category;
pub mod client;
pub mod error;
pub mod fallback;
pub mod prompt;

use async_trait::async_trait;

pub use category::{Category, WordPair};
pub use client::{GeminiClient, GeminiConfig};
pub use error::WordError;
pub use fallback::{generate_password_words, generate_undercover_words};

/// A source of generated words. Implementations may fail; the fallback
/// layer turns every failure into static content.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Requests one civilian/undercover pair for `category`, steered by
    /// `sub_theme` so consecutive rounds vary.
    async fn undercover_pair(
        &self,
        category: Category,
        sub_theme: &str,
    ) -> Result<WordPair, WordError>;

    /// Requests `count` words for a Password round in `category`.
    async fn password_words(&self, category: &str, count: u32)
    -> Result<Vec<String>, WordError>;
}
