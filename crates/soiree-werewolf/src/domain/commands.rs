//! Commands for the Werewolf context.

use soiree_core::command::Command;
use soiree_core::player::Player;
use uuid::Uuid;

use super::roles::RoleCounts;
use super::workflow::ModeratorAction;

/// Command to deal the deck. Creates a new game, or deals again into a
/// restarted one when `game_id` is set.
#[derive(Debug, Clone)]
pub struct DistributeRoles {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// An existing game waiting for a new deal.
    pub game_id: Option<Uuid>,
    /// Seated players, in roster order.
    pub players: Vec<Player>,
    /// How many copies of each role go into the deck.
    pub role_counts: RoleCounts,
}

impl Command for DistributeRoles {
    fn command_type(&self) -> &'static str {
        "werewolf.distribute_roles"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to show the next player their card.
#[derive(Debug, Clone)]
pub struct RevealNextRole {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target game.
    pub game_id: Uuid,
}

impl Command for RevealNextRole {
    fn command_type(&self) -> &'static str {
        "werewolf.reveal_next_role"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to hand over to the moderator and start the first night.
#[derive(Debug, Clone)]
pub struct StartModeration {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target game.
    pub game_id: Uuid,
}

impl Command for StartModeration {
    fn command_type(&self) -> &'static str {
        "werewolf.start_moderation"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command carrying one moderator button press.
#[derive(Debug, Clone)]
pub struct Moderate {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target game.
    pub game_id: Uuid,
    /// What the moderator pressed.
    pub action: ModeratorAction,
}

impl Command for Moderate {
    fn command_type(&self) -> &'static str {
        "werewolf.moderate"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to turn every card face up once the game is over.
#[derive(Debug, Clone)]
pub struct ShowFinalReveal {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target game.
    pub game_id: Uuid,
}

impl Command for ShowFinalReveal {
    fn command_type(&self) -> &'static str {
        "werewolf.show_final_reveal"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to start over with the same table.
#[derive(Debug, Clone)]
pub struct RestartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The target game.
    pub game_id: Uuid,
}

impl Command for RestartGame {
    fn command_type(&self) -> &'static str {
        "werewolf.restart_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
