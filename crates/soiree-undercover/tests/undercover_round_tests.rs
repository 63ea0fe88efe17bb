//! Plays Undercover rounds through the command handlers against the
//! in-memory event store.

use std::sync::Mutex;

use soiree_core::rng::StdRandom;
use soiree_event_store::memory_event_repository::InMemoryEventRepository;
use soiree_test_support::{FailingWordSource, FixedClock, StaticWordSource, roster};
use soiree_undercover::application::command_handlers::{
    handle_reveal_next_card, handle_show_results, handle_start_round,
};
use soiree_undercover::application::query_handlers::get_round_by_id;
use soiree_undercover::domain::aggregates::RoundPhase;
use soiree_undercover::domain::commands::{RevealNextCard, ShowResults, StartRound};
use soiree_undercover::domain::dealing::Side;
use soiree_words::fallback::FALLBACK_PAIRS;
use soiree_words::{Category, WordPair};
use uuid::Uuid;

const NAMES: [&str; 5] = ["Ana", "Ben", "Cleo", "Dan", "Eve"];

fn start_round(undercover_count: u32) -> StartRound {
    StartRound {
        correlation_id: Uuid::new_v4(),
        players: roster(&NAMES),
        category: Category::Places,
        undercover_count,
    }
}

#[tokio::test]
async fn test_full_round_from_deal_to_results() {
    // Arrange
    let clock = FixedClock::game_night();
    let rng = Mutex::new(StdRandom::seeded(9));
    let repo = InMemoryEventRepository::new();
    let words = StaticWordSource::new(WordPair::new("Plage", "Piscine"), Vec::new());

    // Act
    let round_id = handle_start_round(&start_round(2), &clock, &rng, &words, &repo)
        .await
        .unwrap()
        .aggregate_id;

    // Assert: reveal one card at a time, words hidden in the turn order
    let view = get_round_by_id(round_id, &repo).await.unwrap();
    assert_eq!(view.phase, RoundPhase::Reveal);
    assert_eq!(view.category_label, Category::Places.label());
    assert_eq!(view.undercover_count, 2);
    assert!(view.turn_order.iter().all(|s| s.side.is_none() && s.word.is_none()));
    let first = view.reveal.unwrap();
    assert_eq!(first.position, 0);
    assert_eq!(first.player_id, view.turn_order[0].player_id);

    for _ in NAMES {
        let command = RevealNextCard {
            correlation_id: Uuid::new_v4(),
            round_id,
        };
        handle_reveal_next_card(&command, &clock, &repo).await.unwrap();
    }
    assert_eq!(get_round_by_id(round_id, &repo).await.unwrap().phase, RoundPhase::Playing);

    let command = ShowResults {
        correlation_id: Uuid::new_v4(),
        round_id,
    };
    handle_show_results(&command, &clock, &repo).await.unwrap();

    let view = get_round_by_id(round_id, &repo).await.unwrap();
    assert_eq!(view.phase, RoundPhase::Results);
    let results = view.results.unwrap();
    assert_eq!(results.civilian_word, "Plage");
    assert_eq!(results.undercover_word, "Piscine");
    let undercovers: Vec<_> = view
        .turn_order
        .iter()
        .filter(|s| s.side == Some(Side::Undercover))
        .collect();
    assert_eq!(undercovers.len(), 2);
    assert!(undercovers.iter().all(|s| s.word.as_deref() == Some("Piscine")));
}

#[tokio::test]
async fn test_offline_round_still_deals_a_known_pair() {
    let clock = FixedClock::game_night();
    let rng = Mutex::new(StdRandom::seeded(4));
    let repo = InMemoryEventRepository::new();

    let round_id = handle_start_round(&start_round(1), &clock, &rng, &FailingWordSource, &repo)
        .await
        .unwrap()
        .aggregate_id;
    for _ in NAMES {
        let command = RevealNextCard {
            correlation_id: Uuid::new_v4(),
            round_id,
        };
        handle_reveal_next_card(&command, &clock, &repo).await.unwrap();
    }
    let command = ShowResults {
        correlation_id: Uuid::new_v4(),
        round_id,
    };
    handle_show_results(&command, &clock, &repo).await.unwrap();

    let results = get_round_by_id(round_id, &repo).await.unwrap().results.unwrap();
    assert!(
        FALLBACK_PAIRS
            .iter()
            .any(|(c, u)| *c == results.civilian_word && *u == results.undercover_word)
    );
}
