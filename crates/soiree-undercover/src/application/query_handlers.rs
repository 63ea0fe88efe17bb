//! Query handlers for the Undercover context.

use serde::Serialize;
use soiree_core::error::DomainError;
use soiree_core::player::PlayerId;
use soiree_core::repository::EventRepository;
use soiree_words::Category;
use uuid::Uuid;

use crate::application::command_handlers;
use crate::domain::aggregates::{RoundPhase, UndercoverRound};
use crate::domain::dealing::Side;

/// The word the next player is about to see.
#[derive(Debug, Serialize)]
pub struct CardView {
    pub position: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub word: String,
}

/// A seat in the turn order. Sides stay hidden until the results.
#[derive(Debug, Serialize)]
pub struct SeatView {
    pub player_id: PlayerId,
    pub name: String,
    pub side: Option<Side>,
    pub word: Option<String>,
}

/// Both words, once disclosed.
#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub civilian_word: String,
    pub undercover_word: String,
}

/// Read-only view of an Undercover round.
#[derive(Debug, Serialize)]
pub struct RoundView {
    pub round_id: Uuid,
    pub phase: RoundPhase,
    pub category: Category,
    pub category_label: &'static str,
    pub undercover_count: u32,
    pub reveal: Option<CardView>,
    pub turn_order: Vec<SeatView>,
    pub results: Option<ResultsView>,
    /// Current version (event count).
    pub version: i64,
}

fn name_of(round: &UndercoverRound, id: &PlayerId) -> String {
    round
        .players
        .iter()
        .find(|p| &p.id == id)
        .map_or_else(|| id.to_string(), |p| p.name.clone())
}

/// Retrieves a round by its aggregate ID.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the ID.
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub async fn get_round_by_id(
    round_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<RoundView, DomainError> {
    let stored_events = repo.load_events(round_id).await?;
    if stored_events.is_empty() {
        return Err(DomainError::AggregateNotFound(round_id));
    }
    let round = command_handlers::reconstitute(round_id, &stored_events)?;
    let disclosed = round.phase == RoundPhase::Results;

    let reveal = if round.phase == RoundPhase::Reveal {
        round.turn_order.get(round.revealed).map(|card| CardView {
            position: round.revealed,
            player_id: card.player_id.clone(),
            name: name_of(&round, &card.player_id),
            word: card.word.clone(),
        })
    } else {
        None
    };

    let turn_order = round
        .turn_order
        .iter()
        .map(|card| SeatView {
            player_id: card.player_id.clone(),
            name: name_of(&round, &card.player_id),
            side: disclosed.then_some(card.side),
            word: disclosed.then(|| card.word.clone()),
        })
        .collect();

    let results = round
        .words
        .as_ref()
        .filter(|_| disclosed)
        .map(|words| ResultsView {
            civilian_word: words.civilian.clone(),
            undercover_word: words.undercover.clone(),
        });

    Ok(RoundView {
        round_id,
        phase: round.phase,
        category: round.category,
        category_label: round.category.label(),
        undercover_count: round.undercover_count,
        reveal,
        turn_order,
        results,
        version: round.version,
    })
}

#[cfg(test)]
mod tests {
    use soiree_test_support::EmptyEventRepository;

    use super::*;

    #[tokio::test]
    async fn test_get_round_by_id_returns_not_found_for_empty_stream() {
        let round_id = Uuid::new_v4();

        let result = get_round_by_id(round_id, &EmptyEventRepository).await;

        assert!(matches!(result, Err(DomainError::AggregateNotFound(id)) if id == round_id));
    }
}
