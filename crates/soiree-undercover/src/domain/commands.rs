//! Commands for the Undercover context.

use soiree_core::command::Command;
use soiree_core::player::Player;
use soiree_words::Category;
use uuid::Uuid;

/// Command to fetch a word pair and deal a new round.
#[derive(Debug, Clone)]
pub struct StartRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Seated players, in roster order.
    pub players: Vec<Player>,
    /// Category to draw the words from.
    pub category: Category,
    /// Requested undercovers; clamped to what the table allows.
    pub undercover_count: u32,
}

impl Command for StartRound {
    fn command_type(&self) -> &'static str {
        "undercover.start_round"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to show the next player in turn order their word.
#[derive(Debug, Clone)]
pub struct RevealNextCard {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target round.
    pub round_id: Uuid,
}

impl Command for RevealNextCard {
    fn command_type(&self) -> &'static str {
        "undercover.reveal_next_card"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to disclose both words and who held which.
#[derive(Debug, Clone)]
pub struct ShowResults {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target round.
    pub round_id: Uuid,
}

impl Command for ShowResults {
    fn command_type(&self) -> &'static str {
        "undercover.show_results"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
