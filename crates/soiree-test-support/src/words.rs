//! `WordSource` doubles that never touch the network.

use async_trait::async_trait;
use soiree_words::{Category, WordError, WordPair, WordSource};

/// Always answers with the configured pair and password list.
#[derive(Debug, Clone)]
pub struct StaticWordSource {
    pair: WordPair,
    password_words: Vec<String>,
}

impl StaticWordSource {
    /// Create a source answering `pair` and `password_words`.
    #[must_use]
    pub fn new(pair: WordPair, password_words: Vec<String>) -> Self {
        Self {
            pair,
            password_words,
        }
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn undercover_pair(
        &self,
        _category: Category,
        _sub_theme: &str,
    ) -> Result<WordPair, WordError> {
        Ok(self.pair.clone())
    }

    async fn password_words(
        &self,
        _category: &str,
        _count: u32,
    ) -> Result<Vec<String>, WordError> {
        Ok(self.password_words.clone())
    }
}

/// Simulates an unreachable word service.
#[derive(Debug, Clone, Copy)]
pub struct FailingWordSource;

#[async_trait]
impl WordSource for FailingWordSource {
    async fn undercover_pair(
        &self,
        _category: Category,
        _sub_theme: &str,
    ) -> Result<WordPair, WordError> {
        Err(WordError::Status(503))
    }

    async fn password_words(
        &self,
        _category: &str,
        _count: u32,
    ) -> Result<Vec<String>, WordError> {
        Err(WordError::Status(503))
    }
}
