//! Win condition evaluation.

use serde::{Deserialize, Serialize};

use super::village::Village;

/// The camp that won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Camp {
    Lovers,
    SolitaryWolf,
    Wolves,
    Village,
}

impl Camp {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Camp::Lovers => "Lovers win",
            Camp::SolitaryWolf => "Solitary wolf wins",
            Camp::Wolves => "Wolves win",
            Camp::Village => "Village wins",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Camp::Lovers => "Love conquered everything. They lived happily ever after.",
            Camp::SolitaryWolf => "The white werewolf devoured everyone, pack included.",
            Camp::Wolves => "The village has fallen to the pack.",
            Camp::Village => "Every werewolf has been driven out of the village.",
        }
    }
}

/// Terminal state of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub camp: Camp,
    pub title: String,
    pub description: String,
}

impl From<Camp> for Winner {
    fn from(camp: Camp) -> Self {
        Self {
            camp,
            title: camp.title().to_owned(),
            description: camp.description().to_owned(),
        }
    }
}

/// Checks the living table against the win conditions, highest precedence
/// first. An empty table has no winner.
#[must_use]
pub fn evaluate(village: &Village) -> Option<Winner> {
    let alive = village.alive_count();
    if alive == 0 {
        return None;
    }

    if alive == 2
        && village
            .lovers()
            .is_some_and(|(a, b)| village.is_alive(a) && village.is_alive(b))
    {
        return Some(Camp::Lovers.into());
    }

    let solitary_alive = village.alive_roles().any(|r| r.is_solitary_wolf());
    if alive == 1 && solitary_alive {
        return Some(Camp::SolitaryWolf.into());
    }

    let wolves = village.alive_roles().filter(|r| r.is_wolf_aligned()).count();
    let others = alive - wolves;
    if wolves >= others && !solitary_alive {
        return Some(Camp::Wolves.into());
    }
    if wolves == 0 {
        return Some(Camp::Village.into());
    }
    None
}
