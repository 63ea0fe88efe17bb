//! Undercover categories and word pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven Undercover word categories offered at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Anything goes.
    #[default]
    General,
    /// Food and drink.
    Food,
    /// Animals.
    Animals,
    /// Places.
    Places,
    /// Famous people.
    Celebrities,
    /// Everyday objects.
    Objects,
    /// Adult-only theme.
    Adults,
}

impl Category {
    /// Every category, in the order shown at setup.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Food,
        Category::Animals,
        Category::Places,
        Category::Celebrities,
        Category::Objects,
        Category::Adults,
    ];

    /// The label shown to players and sent to the word service.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::General => "Général",
            Category::Food => "Nourriture",
            Category::Animals => "Animaux",
            Category::Places => "Lieux",
            Category::Celebrities => "Célébrités",
            Category::Objects => "Objets",
            Category::Adults => "Adultes (18+)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two close but distinct words: most players get `civilian`, the
/// impostors get `undercover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// Word dealt to civilians.
    pub civilian: String,
    /// Word dealt to undercovers.
    pub undercover: String,
}

impl WordPair {
    /// Creates a pair.
    pub fn new(civilian: impl Into<String>, undercover: impl Into<String>) -> Self {
        Self {
            civilian: civilian.into(),
            undercover: undercover.into(),
        }
    }
}
