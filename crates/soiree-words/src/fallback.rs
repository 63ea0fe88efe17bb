//! Offline fallback around any [`WordSource`].

use std::sync::{Mutex, PoisonError};

use soiree_core::rng::DeterministicRng;
use tracing::warn;

use crate::category::{Category, WordPair};
use crate::error::WordError;
use crate::prompt::SUB_THEMES;
use crate::WordSource;

/// Pairs served when the word service is unavailable.
pub const FALLBACK_PAIRS: [(&str, &str); 6] = [
    ("Chien", "Loup"),
    ("Café", "Thé"),
    ("Facebook", "Twitter"),
    ("Piano", "Guitare"),
    ("Plage", "Piscine"),
    ("Paris", "Londres"),
];

/// Password words served when the service answers with nothing usable.
pub const EMPTY_PASSWORD_WORDS: [&str; 2] = ["Erreur", "Réessaie"];

/// Password words served when the request itself fails.
pub const OFFLINE_PASSWORD_WORDS: [&str; 3] = ["Mode", "Hors-ligne", "Erreur API"];

/// Returns the fallback pair at `index` (wrapping).
#[must_use]
pub fn fallback_pair(index: usize) -> WordPair {
    let (civilian, undercover) = FALLBACK_PAIRS[index % FALLBACK_PAIRS.len()];
    WordPair::new(civilian, undercover)
}

#[allow(clippy::cast_possible_truncation)]
fn draw(rng: &Mutex<dyn DeterministicRng + Send>, len: usize) -> usize {
    let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
    guard.next_u32_range(0, (len - 1) as u32) as usize
}

/// Produces an Undercover pair for `category`; never fails.
///
/// The sub-theme and the fallback index are drawn before the request so
/// the RNG lock is never held across the await.
pub async fn generate_undercover_words(
    source: &dyn WordSource,
    category: Category,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> WordPair {
    let sub_theme = SUB_THEMES[draw(rng, SUB_THEMES.len())];
    let fallback_index = draw(rng, FALLBACK_PAIRS.len());

    match source.undercover_pair(category, sub_theme).await {
        Ok(pair) => pair,
        Err(error) => {
            warn!(%error, %category, "falling back to static word pair");
            fallback_pair(fallback_index)
        }
    }
}

/// Produces `count` Password words for `category`; never fails.
pub async fn generate_password_words(
    source: &dyn WordSource,
    category: &str,
    count: u32,
) -> Vec<String> {
    let owned = |words: &[&str]| words.iter().map(|w| (*w).to_owned()).collect();

    match source.password_words(category, count.max(1)).await {
        Ok(words) if !words.is_empty() => words,
        Ok(_) | Err(WordError::EmptyResponse) => {
            warn!(category, "word service returned no password words");
            owned(&EMPTY_PASSWORD_WORDS)
        }
        Err(error) => {
            warn!(%error, category, "falling back to offline password words");
            owned(&OFFLINE_PASSWORD_WORDS)
        }
    }
}
