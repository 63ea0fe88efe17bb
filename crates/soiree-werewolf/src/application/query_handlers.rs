//! Query handlers for the Werewolf context.
//!
//! This module contains query handlers that reconstitute aggregates
//! from stored events and return read-only view DTOs.

use serde::Serialize;
use soiree_core::error::DomainError;
use soiree_core::player::PlayerId;
use soiree_core::repository::EventRepository;
use uuid::Uuid;

use crate::application::command_handlers;
use crate::domain::aggregates::{GamePhase, WerewolfGame};
use crate::domain::roles::{Role, RoleCounts};
use crate::domain::victory::Winner;
use crate::domain::village::DeadRecord;
use crate::domain::workflow::{Moderation, Prompt};

/// Read-only view of a seated player.
#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub player_id: PlayerId,
    pub name: String,
    /// Hidden until the moderator holds the phone.
    pub role: Option<Role>,
    pub alive: bool,
    pub is_mayor: bool,
    pub is_lover: bool,
}

/// The card the next player is about to see.
#[derive(Debug, Serialize)]
pub struct RevealView {
    pub position: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub role_name: &'static str,
    pub description: &'static str,
}

/// One role the moderator wakes up tonight.
#[derive(Debug, Serialize)]
pub struct NightCallView {
    pub role: Role,
    pub role_name: &'static str,
    pub action: &'static str,
    pub note: Option<&'static str>,
}

/// The moderator's screen.
#[derive(Debug, Serialize)]
pub struct ModerationView {
    pub night_number: u32,
    pub is_day: bool,
    pub prompt: Prompt,
    pub prompt_title: String,
    /// Players the open prompt lets the moderator pick from.
    pub eligible_players: Vec<PlayerId>,
    pub mayor: Option<PlayerId>,
    pub lovers: Option<(PlayerId, PlayerId)>,
    pub dead: Vec<DeadRecord>,
    pub night_calls: Vec<NightCallView>,
    pub winner: Option<Winner>,
    pub ended: bool,
}

/// Read-only view of a Werewolf game.
#[derive(Debug, Serialize)]
pub struct GameView {
    pub game_id: Uuid,
    pub phase: GamePhase,
    pub players: Vec<PlayerView>,
    pub role_counts: RoleCounts,
    pub reveal: Option<RevealView>,
    pub moderation: Option<ModerationView>,
    /// Current version (event count).
    pub version: i64,
}

/// Roles to wake tonight, in calling order. Empty during the day.
#[must_use]
pub fn night_calls(moderation: &Moderation) -> Vec<NightCallView> {
    if moderation.is_day {
        return Vec::new();
    }
    let village = &moderation.village;
    let call = |role: Role, note: Option<&'static str>| NightCallView {
        role,
        role_name: role.name(),
        action: role.night_action(),
        note,
    };

    let mut calls = Vec::new();
    if moderation.night_number == 1 && village.is_role_alive(Role::Cupid) {
        calls.push(call(Role::Cupid, None));
    }
    for role in [Role::Guardian, Role::Seer] {
        if village.is_role_alive(role) {
            calls.push(call(role, None));
        }
    }
    let white_alive = village.is_role_alive(Role::WhiteWerewolf);
    if white_alive || village.is_role_alive(Role::Werewolf) {
        let note = white_alive.then_some("The white werewolf wakes with the pack.");
        calls.push(call(Role::Werewolf, note));
    }
    if village.is_role_alive(Role::Witch) {
        calls.push(call(Role::Witch, None));
    }
    calls
}

fn name_of(moderation: &Moderation, id: &PlayerId) -> String {
    moderation
        .village
        .player(id)
        .map_or_else(|| id.to_string(), |p| p.name.clone())
}

/// Heading shown above the open prompt.
#[must_use]
pub fn prompt_title(moderation: &Moderation) -> String {
    match &moderation.prompt {
        Prompt::Idle if moderation.is_day => format!("Day {}", moderation.night_number),
        Prompt::Idle => format!("Night {}", moderation.night_number),
        Prompt::AskNightDeath => "Did anyone die tonight?".to_owned(),
        Prompt::SelectNightDeath => "Who died tonight?".to_owned(),
        Prompt::SelectMayor if moderation.is_succession() => "Mayor succession".to_owned(),
        Prompt::SelectMayor => "Mayor election".to_owned(),
        Prompt::SelectVillageVote => "Who does the village banish?".to_owned(),
        Prompt::SelectLovers => "Cupid chooses the lovers".to_owned(),
        Prompt::AnnounceLoverDeath { partner } => {
            format!("{} dies of grief", name_of(moderation, partner))
        }
        Prompt::ConfirmEnd => "End the game?".to_owned(),
        Prompt::SelectHunterShot { hunter } => {
            format!("{} takes the hunter's last shot", name_of(moderation, hunter))
        }
    }
}

fn eligible_players(moderation: &Moderation) -> Vec<PlayerId> {
    match moderation.prompt {
        Prompt::SelectNightDeath
        | Prompt::SelectMayor
        | Prompt::SelectVillageVote
        | Prompt::SelectLovers
        | Prompt::SelectHunterShot { .. } => moderation
            .village
            .alive_players()
            .map(|p| p.id.clone())
            .collect(),
        _ => Vec::new(),
    }
}

fn moderation_view(moderation: &Moderation) -> ModerationView {
    ModerationView {
        night_number: moderation.night_number,
        is_day: moderation.is_day,
        prompt: moderation.prompt.clone(),
        prompt_title: prompt_title(moderation),
        eligible_players: eligible_players(moderation),
        mayor: moderation.village.mayor().cloned(),
        lovers: moderation.village.lovers().cloned(),
        dead: moderation.village.dead().to_vec(),
        night_calls: night_calls(moderation),
        winner: moderation.winner.clone(),
        ended: moderation.ended,
    }
}

fn player_views(game: &WerewolfGame) -> Vec<PlayerView> {
    let roles_visible = matches!(
        game.phase,
        GamePhase::Moderation | GamePhase::GameOver | GamePhase::FinalReveal
    );
    game.players
        .iter()
        .map(|player| {
            let village = game.moderation.as_ref().map(|m| &m.village);
            let role = game
                .assignments
                .iter()
                .find(|a| a.player_id == player.id)
                .map(|a| a.role);
            PlayerView {
                player_id: player.id.clone(),
                name: player.name.clone(),
                role: role.filter(|_| roles_visible),
                alive: village.is_none_or(|v| v.is_alive(&player.id)),
                is_mayor: village.is_some_and(|v| v.mayor() == Some(&player.id)),
                is_lover: village.is_some_and(|v| v.is_lover(&player.id)),
            }
        })
        .collect()
}

fn reveal_view(game: &WerewolfGame) -> Option<RevealView> {
    if game.phase != GamePhase::Reveal {
        return None;
    }
    let player = game.players.get(game.revealed)?;
    let role = game.assignments.get(game.revealed)?.role;
    Some(RevealView {
        position: game.revealed,
        player_id: player.id.clone(),
        name: player.name.clone(),
        role,
        role_name: role.name(),
        description: role.description(),
    })
}

/// Retrieves a game by its aggregate ID.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the ID.
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub async fn get_game_by_id(
    game_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<GameView, DomainError> {
    let stored_events = repo.load_events(game_id).await?;
    if stored_events.is_empty() {
        return Err(DomainError::AggregateNotFound(game_id));
    }
    let game = command_handlers::reconstitute(game_id, &stored_events)?;

    Ok(GameView {
        game_id,
        phase: game.phase,
        players: player_views(&game),
        role_counts: game.role_counts.clone(),
        reveal: reveal_view(&game),
        moderation: game.moderation.as_ref().map(moderation_view),
        version: game.version,
    })
}
