//! Prompt text and response schemas sent to the word service.

use serde_json::{Value, json};

use crate::category::Category;

/// Words the service keeps suggesting; listed in every pair prompt so
/// rounds do not repeat the classics.
pub const BANNED_WORDS: &[&str] = &[
    "Chien", "Loup", "Chat", "Tigre", "Lion", "Ours", "Café", "Thé", "Bière", "Vin", "Champagne",
    "Eau", "Soda", "Jus", "Coca", "Whisky", "Vodka", "Facebook", "Twitter", "Instagram", "Tiktok",
    "Snapchat", "Linkedin", "Piano", "Guitare", "Violon", "Trompette", "Batterie", "Plage",
    "Piscine", "Montagne", "Mer", "Océan", "Lac", "Rivière", "Paris", "Londres", "New York",
    "Madrid", "Rome", "Tokyo", "Banane", "Pomme", "Fraise", "Orange", "Citron", "Poire", "Foot",
    "Rugby", "Tennis", "Basket", "Handball", "Voiture", "Camion", "Moto", "Vélo", "Stylo",
    "Crayon", "Feutre", "Chaise", "Fauteuil", "Canapé", "Table",
];

/// Sub-themes drawn at random to push the service off its favourite pairs.
pub const SUB_THEMES: &[&str] = &[
    "Un objet technique ou mécanique",
    "Un élément naturel spécifique",
    "Un concept abstrait",
    "Un objet de la cuisine",
    "Un vêtement ou accessoire",
    "Un métier",
    "Un lieu historique",
    "Une émotion",
    "Un outil de bricolage",
    "Un instrument scientifique",
];

/// Builds the Undercover pair prompt.
#[must_use]
pub fn undercover_prompt(category: Category, sub_theme: &str) -> String {
    let context = match category {
        Category::Adults => "Thème imposé : séduction, sensualité et intimité, \
             avec des mots explicitement coquins. \
             Interdits : alcool et drogues."
            .to_owned(),
        other => format!(
            "Catégorie : {other}. Sous-contexte à appliquer pour varier : \"{sub_theme}\". \
             Sois créatif, surprenant et difficile."
        ),
    };

    format!(
        "Tu génères des mots pour le jeu 'Undercover'. Réponds uniquement en français.\n\
         Produis UNE paire de mots : un pour les civils, un pour l'undercover.\n\
         1. Les deux mots sont proches par le sens mais distincts.\n\
         2. {context}\n\
         3. Mots interdits : {}.",
        BANNED_WORDS.join(", ")
    )
}

/// Builds the Password word-list prompt.
#[must_use]
pub fn password_prompt(category: &str, count: u32) -> String {
    format!(
        "Tu génères des mots pour le jeu 'Mot de Passe'. Réponds uniquement en français.\n\
         Catégorie : {category}.\n\
         Quantité : {count} mots.\n\
         Donne des mots variés, devinables mais intéressants."
    )
}

/// JSON schema constraining the pair response to `{civilian, undercover}`.
#[must_use]
pub fn pair_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "civilian": { "type": "STRING", "description": "Le mot des civils" },
            "undercover": { "type": "STRING", "description": "Le mot de l'undercover" }
        },
        "required": ["civilian", "undercover"]
    })
}

/// JSON schema constraining the Password response to a list of strings.
#[must_use]
pub fn word_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}
